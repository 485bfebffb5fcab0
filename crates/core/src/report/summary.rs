//! Human-readable run summary
//!
//! Per-file lines are written to the sink as soon as they are recorded.
//! The rendered summary is a single sentence such as
//! `2 files reformatted, 1 file left unchanged.`

use std::path::Path;

use tracing::debug;

use super::{
    exit_code_for, failure_message, files, ignored_message, reformatted_message, sentence,
    unchanged_message, Report, ReportConfig, Verbs,
};
use crate::exit_code::ExitCode;
use crate::outcome::Outcome;
use crate::sink::{Channel, OutputSink, ERR_STYLE, OUT_STYLE};
use crate::style::{Color, Style, StyledText};

/// Reformatting counter that prints per-file lines and renders a colored
/// sentence at the end of the run.
#[derive(Debug)]
pub struct SummaryReport<S> {
    config: ReportConfig,
    sink: S,
    changed: usize,
    unchanged: usize,
    failed: usize,
}

impl<S: OutputSink> SummaryReport<S> {
    pub fn new(config: ReportConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            changed: 0,
            unchanged: 0,
            failed: 0,
        }
    }

    /// Number of files reformatted (or that would be)
    pub fn changed_count(&self) -> usize {
        self.changed
    }

    /// Number of files left unchanged, cached or not
    pub fn unchanged_count(&self) -> usize {
        self.unchanged
    }

    /// Number of files that failed to format
    pub fn failure_count(&self) -> usize {
        self.failed
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: OutputSink> Report for SummaryReport<S> {
    fn record_outcome(&mut self, path: &Path, outcome: Outcome) {
        debug!(path = %path.display(), ?outcome, "file done");
        if outcome.is_changed() {
            if self.config.shows_changed() {
                let line = reformatted_message(&self.config, path);
                self.sink
                    .emit(Channel::Out, StyledText::styled(line, OUT_STYLE));
            }
            self.changed += 1;
        } else {
            if self.config.verbose {
                let line = unchanged_message(path, outcome);
                self.sink.emit(Channel::Out, StyledText::from(line));
            }
            self.unchanged += 1;
        }
    }

    fn record_failure(&mut self, path: &Path, message: &str) {
        debug!(path = %path.display(), message, "file failed");
        let line = failure_message(path, message);
        self.sink
            .emit(Channel::Err, StyledText::styled(line, ERR_STYLE));
        self.failed += 1;
    }

    fn record_ignored(&mut self, path: &Path, message: &str) {
        debug!(path = %path.display(), message, "file ignored");
        if self.config.verbose {
            let line = ignored_message(path, message);
            self.sink.emit(Channel::Out, StyledText::from(line));
        }
    }

    fn exit_code(&self) -> ExitCode {
        exit_code_for(self.changed, self.failed, self.config.check)
    }

    fn render(&self) -> StyledText {
        let verbs = Verbs::for_config(&self.config);
        let mut clauses = Vec::new();

        if self.changed > 0 {
            let mut clause = StyledText::new();
            clause
                .push_styled(
                    format!("{} ", files(self.changed)),
                    Style::fg(Color::Blue).with_bold(),
                )
                .push_styled(verbs.reformatted, Style::bold());
            clauses.push(clause);
        }
        if self.unchanged > 0 {
            let mut clause = StyledText::new();
            clause
                .push_styled(format!("{} ", files(self.unchanged)), Style::fg(Color::Blue))
                .push(verbs.unchanged);
            clauses.push(clause);
        }
        if self.failed > 0 {
            clauses.push(StyledText::styled(
                format!("{} {}", files(self.failed), verbs.failed),
                Style::fg(Color::Red),
            ));
        }

        sentence(clauses)
    }
}
