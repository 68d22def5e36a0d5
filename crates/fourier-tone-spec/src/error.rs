//! Error types for loading and validating tone specs.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while loading or validating a tone spec.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The spec file could not be read.
    #[error("failed to read spec file {path}: {source}")]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The spec is not valid JSON or does not match the schema.
    #[error("failed to parse spec: {0}")]
    Parse(#[from] serde_json::Error),

    /// The spec parsed but one or more parameters are out of range.
    #[error("invalid spec: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

impl SpecError {
    /// Returns a stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::Read { .. } => "SPEC_001",
            SpecError::Parse(_) => "SPEC_002",
            SpecError::Invalid(_) => "SPEC_003",
        }
    }
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
