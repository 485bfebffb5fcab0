//! JUnit XML report
//!
//! Every recorded event becomes one `<testcase>` fragment, kept in call
//! order. Nothing is written until the caller renders the document, so the
//! XML can go to stdout or a file untouched by per-file chatter.
//!
//! The document layout is consumed by CI tooling and is reproduced byte for
//! byte, including the `failures`/`errors` attribute mapping: `failures`
//! counts changed files and `errors` counts files that could not be
//! formatted.

use std::path::Path;

use tracing::debug;

use super::{
    exit_code_for, failure_message, files, ignored_message, reformatted_message, sentence,
    Report, ReportConfig, Verbs,
};
use crate::exit_code::ExitCode;
use crate::outcome::Outcome;
use crate::style::{Color, Style, StyledText};

const SUITE_NAME: &str = "black";

/// Child element of a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseKind {
    Pass,
    Skipped,
    Failure,
    Error,
}

impl CaseKind {
    const fn element(self) -> Option<&'static str> {
        match self {
            Self::Pass => None,
            Self::Skipped => Some("skipped"),
            Self::Failure => Some("failure"),
            Self::Error => Some("error"),
        }
    }
}

/// Accumulator rendering a JUnit-compatible test suite.
///
/// `changed`, `unchanged` and `failed` only record whether at least one
/// such file was seen (0 or 1), while `skipped` is a running total. This
/// asymmetry with [`SummaryReport`](super::SummaryReport) is the observed
/// behaviour that consuming tools rely on and is kept as is.
#[derive(Debug, Clone, Default)]
pub struct JunitReport {
    config: ReportConfig,
    changed: usize,
    unchanged: usize,
    failed: usize,
    skipped: usize,
    test_cases: Vec<String>,
}

impl JunitReport {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// 1 if any file was (or would be) reformatted
    pub fn changed_count(&self) -> usize {
        self.changed
    }

    /// 1 if any file was left unchanged
    pub fn unchanged_count(&self) -> usize {
        self.unchanged
    }

    /// 1 if any file failed to format
    pub fn failure_count(&self) -> usize {
        self.failed
    }

    /// Number of ignored files recorded while verbose
    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    /// Value of the suite's `tests` attribute
    pub fn tests_count(&self) -> usize {
        self.changed + self.unchanged + self.failed + self.skipped
    }

    /// Recorded `<testcase>` fragments in call order
    pub fn test_cases(&self) -> &[String] {
        &self.test_cases
    }

    /// Human sentence for the terminal, next to the XML document.
    ///
    /// Same wording as the summary report, but only the changed clause is
    /// bold and the failed clause red.
    pub fn summary(&self) -> StyledText {
        let verbs = Verbs::for_config(&self.config);
        let mut clauses = Vec::new();

        if self.changed > 0 {
            clauses.push(StyledText::styled(
                format!("{} {}", files(self.changed), verbs.reformatted),
                Style::bold(),
            ));
        }
        if self.unchanged > 0 {
            clauses.push(StyledText::from(format!(
                "{} {}",
                files(self.unchanged),
                verbs.unchanged
            )));
        }
        if self.failed > 0 {
            clauses.push(StyledText::styled(
                format!("{} {}", files(self.failed), verbs.failed),
                Style::fg(Color::Red),
            ));
        }

        sentence(clauses)
    }

    fn push_case(&mut self, kind: CaseKind, path: &Path, message: &str) {
        self.test_cases.push(test_case(kind, path, message));
    }
}

impl Report for JunitReport {
    fn record_outcome(&mut self, path: &Path, outcome: Outcome) {
        debug!(path = %path.display(), ?outcome, "file done");
        if outcome.is_changed() {
            if self.config.shows_changed() {
                let message = reformatted_message(&self.config, path);
                self.push_case(CaseKind::Failure, path, &message);
            }
            self.changed = 1;
        } else {
            self.push_case(CaseKind::Pass, path, "");
            self.unchanged = 1;
        }
    }

    fn record_failure(&mut self, path: &Path, message: &str) {
        debug!(path = %path.display(), message, "file failed");
        let message = failure_message(path, message);
        self.push_case(CaseKind::Error, path, &message);
        self.failed = 1;
    }

    fn record_ignored(&mut self, path: &Path, message: &str) {
        debug!(path = %path.display(), message, "file ignored");
        if self.config.verbose {
            let message = ignored_message(path, message);
            self.push_case(CaseKind::Skipped, path, &message);
            self.skipped += 1;
        }
    }

    fn exit_code(&self) -> ExitCode {
        exit_code_for(self.changed, self.failed, self.config.check)
    }

    fn render(&self) -> StyledText {
        let mut doc = String::new();
        doc.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        doc.push_str(&format!(
            "<testsuite failures=\"{}\" errors=\"{}\" name=\"{SUITE_NAME}\"\n\
             skipped=\"{}\" tests=\"{}\">\n",
            self.changed,
            self.failed,
            self.skipped,
            self.tests_count(),
        ));
        for case in &self.test_cases {
            doc.push_str(case);
        }
        doc.push_str("</testsuite>");
        StyledText::from(doc)
    }
}

fn test_case(kind: CaseKind, path: &Path, message: &str) -> String {
    let file = escape_xml(&path.display().to_string());
    let head = format!(
        "\t<testcase classname=\"{SUITE_NAME}\" file=\"{file}\"\n    name=\"{SUITE_NAME}-{file}\">"
    );
    match kind.element() {
        None => format!("{head}</testcase>\n"),
        Some(element) => format!(
            "{head}\n            <{element} message=\"{}\" />\n    </testcase>\n",
            escape_xml(message)
        ),
    }
}

/// Escapes the characters a double-quoted attribute value cannot hold.
///
/// `>` and `'` are legal there and pass through untouched.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
