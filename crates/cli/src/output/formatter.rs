//! Formatter for end-of-run output
//!
//! Per-file lines are written by the report's sink while the run is in
//! progress. Everything printed once the run is over goes through here:
//! the closing banner and summary on stderr, and rendered documents on
//! stdout.

use br_core::{ExitCode, StyledText};
use console::Term;

use super::{ConsoleEmphasis, OutputConfig};

const DONE_BANNER: &str = "All done! ✨ 🍰 ✨";
const FAILED_BANNER: &str = "Oh no! 💥 💔 💥";

/// Formatter for CLI output
#[derive(Debug, Clone)]
pub struct Formatter {
    config: OutputConfig,
}

impl Formatter {
    /// Create a new formatter with the given configuration
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Whether end-of-run messages are printed
    pub fn shows_summary(&self) -> bool {
        self.config.verbose || !self.config.quiet
    }

    /// Closing banner and summary sentence, on stderr
    pub fn finish(&self, code: ExitCode, summary: &StyledText) {
        if !self.shows_summary() {
            return;
        }
        let emphasis = ConsoleEmphasis::stderr(self.config.color);
        let mut banner = StyledText::new();
        banner.push_styled(finish_banner(code), br_core::Style::bold());
        self.write_err(&banner.paint(&emphasis));
        self.write_err(&summary.paint(&emphasis));
    }

    /// Output an error message
    ///
    /// Errors are always printed, even in quiet mode.
    pub fn error(&self, message: &str) {
        let emphasis = ConsoleEmphasis::stderr(self.config.color);
        let line = StyledText::styled(
            format!("error: {message}"),
            br_core::Style::fg(br_core::Color::Red),
        );
        self.write_err(&line.paint(&emphasis));
    }

    /// Informational line on stderr (respects quiet mode)
    pub fn note(&self, message: &str) {
        if self.shows_summary() {
            self.write_err(message);
        }
    }

    /// Print a rendered document on stdout, regardless of quiet mode
    pub fn document(&self, document: &str) {
        if let Err(e) = Term::stdout().write_line(document) {
            tracing::warn!("failed to write document: {e}");
        }
    }

    fn write_err(&self, line: &str) {
        if let Err(e) = Term::stderr().write_line(line) {
            tracing::warn!("failed to write output: {e}");
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}

/// Banner line printed above the summary
pub fn finish_banner(code: ExitCode) -> &'static str {
    match code {
        ExitCode::Failure => FAILED_BANNER,
        _ => DONE_BANNER,
    }
}
