use colored::Colorize;
use fourier_tone_synth::{ReportStatus, ResultReporter};

/// Result reporter that prints colored status lines.
///
/// In JSON mode nothing is printed; the last report is kept so the command
/// can fold it into its JSON object.
#[derive(Debug, Default)]
pub(crate) struct ConsoleReporter {
    json: bool,
    last: Option<(ReportStatus, String)>,
}

impl ConsoleReporter {
    pub(crate) fn new(json: bool) -> Self {
        Self { json, last: None }
    }

    /// The most recent report, if any.
    pub(crate) fn last(&self) -> Option<(ReportStatus, &str)> {
        self.last
            .as_ref()
            .map(|(status, message)| (*status, message.as_str()))
    }
}

impl ResultReporter for ConsoleReporter {
    fn report(&mut self, status: ReportStatus, message: &str) {
        if !self.json {
            match status {
                ReportStatus::Written => println!("{} {}", "SUCCESS".green().bold(), message),
                ReportStatus::NotWritten => println!("{} {}", "SKIPPED".yellow().bold(), message),
                ReportStatus::Failed => eprintln!("{} {}", "FAILED".red().bold(), message),
            }
        }
        self.last = Some((status, message.to_string()));
    }
}
