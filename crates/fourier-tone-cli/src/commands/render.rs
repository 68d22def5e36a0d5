//! Render command implementation
//!
//! Builds a tone spec from an optional JSON file plus flag overrides,
//! validates it, and synthesizes it to a 16-bit mono WAV file.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use fourier_tone_spec::{SpecError, ToneSpec, ValidationError};
use fourier_tone_synth::pitch::{freq, key_from_note_name};
use fourier_tone_synth::{synthesize, with_wav_extension, ReportStatus, SynthOutcome};

use super::reporting::ConsoleReporter;
use crate::json_output::{print_json, JsonError, RenderOutput};

/// Arguments for `fourier-tone render`.
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    /// Path to a JSON tone spec (omitted fields use defaults)
    #[arg(short, long)]
    pub spec: Option<PathBuf>,

    /// Output WAV path (".wav" is appended if missing). Nothing is written without it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Waveform: sine, saw, square, triangle
    #[arg(short, long)]
    pub waveform: Option<String>,

    /// Fundamental frequency in Hz
    #[arg(short, long, conflicts_with_all = ["note", "key"])]
    pub frequency: Option<f64>,

    /// Note name such as A4, C#5 or Bb3
    #[arg(long, conflicts_with = "key")]
    pub note: Option<String>,

    /// Semitone offset from A4
    #[arg(long, allow_hyphen_values = true)]
    pub key: Option<f64>,

    /// Hold length in seconds (release is added on top)
    #[arg(long)]
    pub length: Option<f64>,

    /// Linear amplitude applied after the envelope
    #[arg(long, allow_hyphen_values = true)]
    pub amplitude: Option<f64>,

    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Envelope attack time in seconds
    #[arg(long)]
    pub attack: Option<f64>,

    /// Envelope decay time in seconds
    #[arg(long)]
    pub decay: Option<f64>,

    /// Envelope sustain level (0.0 to 1.0)
    #[arg(long)]
    pub sustain: Option<f64>,

    /// Envelope release time in seconds
    #[arg(long)]
    pub release: Option<f64>,

    /// Render even if parameters are out of range
    #[arg(long)]
    pub no_validate: bool,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    pub json: bool,
}

/// Resolves the tone spec: file (or defaults), then flag overrides.
pub fn build_spec(args: &RenderArgs) -> Result<ToneSpec> {
    let mut spec = match &args.spec {
        Some(path) => ToneSpec::from_path(path)
            .with_context(|| format!("Failed to load tone spec: {}", path.display()))?,
        None => ToneSpec::default(),
    };

    if let Some(waveform) = &args.waveform {
        spec.waveform = waveform.as_str().into();
    }
    if let Some(frequency) = args.frequency {
        spec.frequency = frequency;
    } else if let Some(note) = &args.note {
        let key = key_from_note_name(note).ok_or_else(|| anyhow!("Invalid note name: {}", note))?;
        spec.frequency = freq(key);
    } else if let Some(key) = args.key {
        spec.frequency = freq(key);
    }
    if let Some(length) = args.length {
        spec.length = length;
    }
    if let Some(amplitude) = args.amplitude {
        spec.amplitude = amplitude;
    }
    if let Some(sample_rate) = args.sample_rate {
        spec.sample_rate = sample_rate;
    }
    if let Some(attack) = args.attack {
        spec.envelope.attack = attack;
    }
    if let Some(decay) = args.decay {
        spec.envelope.decay = decay;
    }
    if let Some(sustain) = args.sustain {
        spec.envelope.sustain = sustain;
    }
    if let Some(release) = args.release {
        spec.envelope.release = release;
    }

    Ok(spec)
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success or when no output path was given, 1 on error
pub fn run(args: &RenderArgs) -> Result<ExitCode> {
    let spec = match build_spec(args) {
        Ok(spec) => spec,
        Err(e) if args.json => {
            print_json(&RenderOutput::invalid(vec![JsonError::from_anyhow(&e)]))?;
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };
    debug!(?spec, total_duration = spec.total_duration(), "resolved tone spec");

    let spec = if args.no_validate {
        spec
    } else {
        match spec.validated() {
            Ok(spec) => spec,
            Err(SpecError::Invalid(errors)) => {
                report_invalid(&errors, args.json)?;
                return Ok(ExitCode::from(1));
            }
            Err(e) => return Err(e.into()),
        }
    };

    let mut paths = || args.output.as_ref().map(with_wav_extension);
    let mut reporter = ConsoleReporter::new(args.json);
    let result = synthesize(&spec, &mut paths, &mut reporter);

    if args.json {
        let (status, message) = reporter
            .last()
            .unwrap_or((ReportStatus::Failed, "no result was reported"));
        let summary = match &result {
            Ok(SynthOutcome::Written(summary)) => Some(summary),
            _ => None,
        };
        print_json(&RenderOutput::from_report(
            status,
            message,
            summary,
            result.as_ref().err(),
        ))?;
    } else if let Ok(SynthOutcome::Written(summary)) = &result {
        println!(
            "  {} samples at {} Hz ({:.3} s), pcm blake3 {}",
            summary.num_samples,
            summary.sample_rate,
            summary.duration_seconds(),
            summary.pcm_hash.dimmed()
        );
    }

    Ok(match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(1),
    })
}

/// Prints every validation failure, as colored lines or one JSON object.
fn report_invalid(errors: &[ValidationError], json: bool) -> Result<()> {
    if json {
        let errors = errors.iter().map(JsonError::from_validation).collect();
        return print_json(&RenderOutput::invalid(errors));
    }
    eprintln!(
        "{} Tone spec has {} invalid parameter(s):",
        "INVALID".red().bold(),
        errors.len()
    );
    for error in errors {
        eprintln!("  {} {}", "x".red(), error);
    }
    eprintln!(
        "  {} pass --no-validate to render anyway",
        "hint:".dimmed()
    );
    Ok(())
}
