//! JSON output types for machine-readable CLI output.
//!
//! Every command run with `--json` prints exactly one of these objects to
//! stdout. Colored status lines are suppressed in that mode.

use fourier_tone_spec::{SpecError, ValidationError};
use fourier_tone_synth::{RenderSummary, ReportStatus, SynthError};
use serde::Serialize;

/// Error codes for CLI-level failures.
///
/// Library errors keep their own codes (`SPEC_XXX`, `SYNTH_XXX`).
pub mod error_codes {
    /// A command-line argument could not be interpreted
    pub const INVALID_ARGUMENT: &str = "CLI_001";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "SPEC_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Tone spec field the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    /// Converts a parameter validation failure.
    pub fn from_validation(error: &ValidationError) -> Self {
        Self {
            code: "SPEC_003".to_string(),
            message: error.message.clone(),
            field: Some(error.field.clone()),
        }
    }

    /// Converts a synthesis failure.
    pub fn from_synth(error: &SynthError) -> Self {
        Self::new(error.code(), error.to_string())
    }

    /// Converts an arbitrary command error, using the spec error code when
    /// one is in the chain.
    pub fn from_anyhow(error: &anyhow::Error) -> Self {
        let code = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<SpecError>())
            .map(SpecError::code)
            .unwrap_or(error_codes::INVALID_ARGUMENT);
        Self::new(code, format!("{:#}", error))
    }
}

/// Stable tag for a [`ReportStatus`].
pub fn status_tag(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Written => "written",
        ReportStatus::NotWritten => "not_written",
        ReportStatus::Failed => "failed",
    }
}

/// Details of a written WAV file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderedFile {
    pub path: String,
    pub sample_rate: u32,
    pub num_samples: usize,
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

impl From<&RenderSummary> for RenderedFile {
    fn from(summary: &RenderSummary) -> Self {
        Self {
            path: summary.path.display().to_string(),
            sample_rate: summary.sample_rate,
            num_samples: summary.num_samples,
            duration_seconds: summary.duration_seconds(),
            pcm_hash: summary.pcm_hash.clone(),
        }
    }
}

/// Result of `fourier-tone render --json`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderOutput {
    /// Whether the command succeeded (a skipped write counts as success)
    pub success: bool,
    /// One of "written", "not_written", "failed", "invalid"
    pub status: &'static str,
    /// Message delivered to the result reporter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<RenderedFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl RenderOutput {
    /// Output for a spec rejected before synthesis started.
    pub fn invalid(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            status: "invalid",
            message: None,
            file: None,
            errors,
        }
    }

    /// Output for a completed synthesis run.
    pub fn from_report(
        status: ReportStatus,
        message: &str,
        summary: Option<&RenderSummary>,
        error: Option<&SynthError>,
    ) -> Self {
        Self {
            success: status.is_success(),
            status: status_tag(status),
            message: Some(message.to_string()),
            file: summary.map(RenderedFile::from),
            errors: error.map(JsonError::from_synth).into_iter().collect(),
        }
    }
}

/// Result of `fourier-tone pitch --json`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PitchOutput {
    /// Semitone offset from A4
    pub key: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Note name given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Serializes `value` to stdout on one line.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_output_shape() {
        let output = RenderOutput::invalid(vec![JsonError::from_validation(&ValidationError::new(
            "envelope.sustain",
            "must be between 0 and 1, got 2",
        ))]);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "success": false,
                "status": "invalid",
                "errors": [{
                    "code": "SPEC_003",
                    "message": "must be between 0 and 1, got 2",
                    "field": "envelope.sustain"
                }]
            })
        );
    }

    #[test]
    fn test_written_output_includes_file() {
        let summary = RenderSummary {
            path: PathBuf::from("tone.wav"),
            sample_rate: 8000,
            num_samples: 4000,
            pcm_hash: "abc".to_string(),
        };
        let output = RenderOutput::from_report(ReportStatus::Written, "done", Some(&summary), None);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["status"], "written");
        assert_eq!(value["file"]["num_samples"], 4000);
        assert_eq!(value["file"]["duration_seconds"], 0.5);
        assert!(value.get("errors").is_none());
    }

    #[test]
    fn test_failed_output_carries_synth_code() {
        let error = SynthError::unsupported("sample rate must be non-zero");
        let output = RenderOutput::from_report(ReportStatus::Failed, "nope", None, Some(&error));
        assert!(!output.success);
        assert_eq!(output.errors[0].code, "SYNTH_002");
    }

    #[test]
    fn test_anyhow_error_code_from_chain() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = anyhow::Error::new(SpecError::from(parse)).context("Failed to load tone spec");
        assert_eq!(JsonError::from_anyhow(&err).code, "SPEC_002");

        let err = anyhow::anyhow!("Invalid note name: H9");
        assert_eq!(JsonError::from_anyhow(&err).code, error_codes::INVALID_ARGUMENT);
    }

    #[test]
    fn test_status_tags() {
        assert_eq!(status_tag(ReportStatus::Written), "written");
        assert_eq!(status_tag(ReportStatus::NotWritten), "not_written");
        assert_eq!(status_tag(ReportStatus::Failed), "failed");
    }
}
