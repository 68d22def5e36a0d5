//! Capabilities the synthesis run consumes from its caller.
//!
//! The engine never decides where output goes or how results are shown.
//! A [`PathProvider`] supplies the destination (or declines), and a
//! [`ResultReporter`] receives exactly one status message per run. Both are
//! implemented for plain closures.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Supplies the destination path for a synthesis run.
pub trait PathProvider {
    /// Returns the destination, or `None` if the caller declined to choose one.
    fn destination(&mut self) -> Option<PathBuf>;
}

impl<F> PathProvider for F
where
    F: FnMut() -> Option<PathBuf>,
{
    fn destination(&mut self) -> Option<PathBuf> {
        self()
    }
}

/// Outcome category delivered to a [`ResultReporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportStatus {
    /// The WAVE file was written.
    Written,
    /// No destination was chosen, so nothing was written. Not a failure.
    NotWritten,
    /// The run failed; the message carries the cause.
    Failed,
}

impl ReportStatus {
    /// Returns true unless the run failed.
    pub fn is_success(&self) -> bool {
        !matches!(self, ReportStatus::Failed)
    }
}

/// Receives the human-readable result of a synthesis run.
pub trait ResultReporter {
    /// Called once at the end of every run.
    fn report(&mut self, status: ReportStatus, message: &str);
}

impl<F> ResultReporter for F
where
    F: FnMut(ReportStatus, &str),
{
    fn report(&mut self, status: ReportStatus, message: &str) {
        self(status, message)
    }
}

/// Appends a `.wav` suffix unless the file name already ends with one.
///
/// The check is case-sensitive, so `tone.WAV` becomes `tone.WAV.wav`.
pub fn with_wav_extension(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(".wav"))
    {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".wav");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_path_provider() {
        let mut provider = || Some(PathBuf::from("out.wav"));
        assert_eq!(provider.destination(), Some(PathBuf::from("out.wav")));

        let mut declined = || None;
        assert_eq!(declined.destination(), None);
    }

    #[test]
    fn test_closure_reporter_collects_messages() {
        let mut seen = Vec::new();
        {
            let mut reporter = |status: ReportStatus, message: &str| {
                seen.push((status, message.to_string()));
            };
            reporter.report(ReportStatus::NotWritten, "no file written");
        }
        assert_eq!(seen, vec![(ReportStatus::NotWritten, "no file written".to_string())]);
    }

    #[test]
    fn test_status_success() {
        assert!(ReportStatus::Written.is_success());
        assert!(ReportStatus::NotWritten.is_success());
        assert!(!ReportStatus::Failed.is_success());
    }

    #[test]
    fn test_wav_extension_appended() {
        assert_eq!(with_wav_extension("tone"), PathBuf::from("tone.wav"));
        assert_eq!(with_wav_extension("dir/tone.mp3"), PathBuf::from("dir/tone.mp3.wav"));
        assert_eq!(with_wav_extension("tone.WAV"), PathBuf::from("tone.WAV.wav"));
    }

    #[test]
    fn test_wav_extension_kept() {
        assert_eq!(with_wav_extension("tone.wav"), PathBuf::from("tone.wav"));
        assert_eq!(with_wav_extension("a/b/c.wav"), PathBuf::from("a/b/c.wav"));
        assert_eq!(with_wav_extension(".wav"), PathBuf::from(".wav"));
    }
}
