//! Error types for the synthesis backend.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can abort a synthesis run.
///
/// Numeric edge cases (zero attack, non-positive frequency) are not errors;
/// they produce NaN or silent samples instead.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The destination file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The tone cannot be represented as a 16-bit mono RIFF/WAVE file.
    #[error("unsupported audio format: {message}")]
    UnsupportedFormat {
        /// Error message.
        message: String,
    },
}

impl SynthError {
    /// Creates an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }

    /// Returns a stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::Io { .. } => "SYNTH_001",
            SynthError::UnsupportedFormat { .. } => "SYNTH_002",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_helper_includes_path_and_cause() {
        let err = SynthError::io(
            "/tmp/out.wav",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out.wav"));
        assert!(msg.contains("denied"));
        assert_eq!(err.code(), "SYNTH_001");
    }

    #[test]
    fn test_unsupported_helper() {
        let err = SynthError::unsupported("sample rate must be positive");
        assert!(err.to_string().contains("sample rate must be positive"));
        assert_eq!(err.code(), "SYNTH_002");
    }
}
