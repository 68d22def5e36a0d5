//! Pitch command implementation
//!
//! Converts between semitone keys (relative to A4), frequencies and note names.

use anyhow::{anyhow, bail, Result};
use clap::{ArgGroup, Args};
use colored::Colorize;
use std::process::ExitCode;

use fourier_tone_synth::pitch::{freq, key, key_from_note_name};

use crate::json_output::{print_json, PitchOutput};

/// Arguments for `fourier-tone pitch`. Exactly one input is required.
#[derive(Debug, Clone, Default, Args)]
#[command(group(ArgGroup::new("input").required(true).args(["key", "freq", "note"])))]
pub struct PitchArgs {
    /// Semitone offset from A4
    #[arg(short, long, allow_hyphen_values = true)]
    pub key: Option<f64>,

    /// Frequency in Hz
    #[arg(short, long)]
    pub freq: Option<f64>,

    /// Note name such as A4, C#5 or Bb3
    #[arg(short, long)]
    pub note: Option<String>,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    pub json: bool,
}

/// Performs the conversion requested by `args`.
pub fn convert(args: &PitchArgs) -> Result<PitchOutput> {
    if let Some(k) = args.key {
        return Ok(PitchOutput {
            key: k,
            frequency: freq(k),
            note: None,
        });
    }
    if let Some(f) = args.freq {
        if !(f > 0.0 && f.is_finite()) {
            bail!("Frequency must be positive and finite, got {}", f);
        }
        return Ok(PitchOutput {
            key: key(f),
            frequency: f,
            note: None,
        });
    }
    if let Some(note) = &args.note {
        let k = key_from_note_name(note).ok_or_else(|| anyhow!("Invalid note name: {}", note))?;
        return Ok(PitchOutput {
            key: k,
            frequency: freq(k),
            note: Some(note.trim().to_string()),
        });
    }
    bail!("One of --key, --freq or --note is required")
}

/// Run the pitch command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &PitchArgs) -> Result<ExitCode> {
    let output = convert(args)?;

    if args.json {
        print_json(&output)?;
    } else {
        let label = output
            .note
            .as_deref()
            .map(|n| format!("{} ", n.cyan().bold()))
            .unwrap_or_default();
        println!(
            "{}{} {:+.4}  {} {:.4} Hz",
            label,
            "key".bold(),
            output.key,
            "freq".bold(),
            output.frequency
        );
    }

    Ok(ExitCode::SUCCESS)
}
