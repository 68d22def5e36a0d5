//! Fourier Tone CLI - render band-limited tones to WAV files
//!
//! This binary provides commands for synthesizing a single tone from a JSON
//! spec or flags, and for converting between pitch representations.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use fourier_tone_cli::commands::{self, pitch::PitchArgs, render::RenderArgs};
use fourier_tone_cli::logging;

/// Fourier Tone - Truncated Fourier Series Tone Synthesizer
#[derive(Parser)]
#[command(name = "fourier-tone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a tone to a 16-bit mono WAV file
    Render(RenderArgs),

    /// Convert between semitone keys, frequencies and note names
    Pitch(PitchArgs),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Cli::parse() would exit with clap's code 2; usage errors exit 1.
            // A failed write to stderr leaves nothing better to report.
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    logging::init(cli.verbose);

    let result = match &cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Pitch(args) => commands::pitch::run(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
