//! Outcome accumulators
//!
//! A run feeds exactly one `record_*` call per file into a single
//! [`Report`], then asks it for the exit code and renders it once.
//! [`SummaryReport`] prints as it goes and renders a short sentence;
//! [`JunitReport`] buffers test cases and renders a JUnit XML document.

use std::path::Path;

use crate::exit_code::ExitCode;
use crate::outcome::Outcome;
use crate::style::StyledText;

mod junit;
mod summary;

pub use junit::JunitReport;
pub use summary::SummaryReport;

/// Run flags shared by both reports, fixed at construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Don't write files back, exit with 1 if something would change
    pub check: bool,
    /// Show diffs instead of writing files back
    pub diff: bool,
    /// Suppress per-file success output
    pub quiet: bool,
    /// Also report unchanged and ignored files
    pub verbose: bool,
}

impl ReportConfig {
    /// Whether wording should be conditional ("would reformat")
    pub const fn is_dry_run(&self) -> bool {
        self.check || self.diff
    }

    /// Whether a changed file gets its own line / test case
    pub const fn shows_changed(&self) -> bool {
        self.verbose || !self.quiet
    }
}

/// Capability set every accumulator offers to the traversal loop
pub trait Report {
    /// Record a file the engine finished with
    fn record_outcome(&mut self, path: &Path, outcome: Outcome);

    /// Record a file the engine could not format
    fn record_failure(&mut self, path: &Path, message: &str);

    /// Record a file that was skipped before reaching the engine
    fn record_ignored(&mut self, path: &Path, message: &str);

    /// Exit code for the run so far
    fn exit_code(&self) -> ExitCode;

    /// Final rendering of the report
    fn render(&self) -> StyledText;
}

/// Failures dominate; changes only matter under `--check`.
pub(crate) const fn exit_code_for(changed: usize, failed: usize, check: bool) -> ExitCode {
    if failed > 0 {
        ExitCode::Failure
    } else if changed > 0 && check {
        ExitCode::WouldReformat
    } else {
        ExitCode::Success
    }
}

/// Verb phrases of the three summary clauses
pub(crate) struct Verbs {
    pub reformatted: &'static str,
    pub unchanged: &'static str,
    pub failed: &'static str,
}

impl Verbs {
    pub(crate) const fn for_config(config: &ReportConfig) -> Self {
        if config.is_dry_run() {
            Self {
                reformatted: "would be reformatted",
                unchanged: "would be left unchanged",
                failed: "would fail to reformat",
            }
        } else {
            Self {
                reformatted: "reformatted",
                unchanged: "left unchanged",
                failed: "failed to reformat",
            }
        }
    }
}

/// `"1 file"` / `"N files"`
pub(crate) fn files(count: usize) -> String {
    let s = if count > 1 { "s" } else { "" };
    format!("{count} file{s}")
}

pub(crate) fn reformatted_message(config: &ReportConfig, path: &Path) -> String {
    let verb = if config.is_dry_run() {
        "would reformat"
    } else {
        "reformatted"
    };
    format!("{verb} {}", path.display())
}

pub(crate) fn unchanged_message(path: &Path, outcome: Outcome) -> String {
    match outcome {
        Outcome::CachedUnchanged => {
            format!("{} wasn't modified on disk since last run.", path.display())
        }
        _ => format!("{} already well formatted, good job.", path.display()),
    }
}

pub(crate) fn failure_message(path: &Path, message: &str) -> String {
    format!("error: cannot format {}: {message}", path.display())
}

pub(crate) fn ignored_message(path: &Path, message: &str) -> String {
    format!("{} ignored: {message}", path.display())
}

/// Comma-join the non-empty clauses and close the sentence
pub(crate) fn sentence(clauses: Vec<StyledText>) -> StyledText {
    let mut out = StyledText::new();
    for (i, clause) in clauses.into_iter().enumerate() {
        if i > 0 {
            out.push(", ");
        }
        out.append(clause);
    }
    out.push(".");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_priority() {
        assert_eq!(exit_code_for(0, 0, false), ExitCode::Success);
        assert_eq!(exit_code_for(0, 0, true), ExitCode::Success);
        assert_eq!(exit_code_for(3, 0, false), ExitCode::Success);
        assert_eq!(exit_code_for(3, 0, true), ExitCode::WouldReformat);
        assert_eq!(exit_code_for(3, 1, true), ExitCode::Failure);
        assert_eq!(exit_code_for(0, 1, false), ExitCode::Failure);
    }

    #[test]
    fn test_files_pluralization() {
        assert_eq!(files(1), "1 file");
        assert_eq!(files(2), "2 files");
        assert_eq!(files(10), "10 files");
    }

    #[test]
    fn test_diff_shares_check_wording() {
        let diff = ReportConfig {
            diff: true,
            ..Default::default()
        };
        let path = Path::new("a.py");
        assert_eq!(reformatted_message(&diff, path), "would reformat a.py");
        assert_eq!(
            reformatted_message(&ReportConfig::default(), path),
            "reformatted a.py"
        );
        assert_eq!(Verbs::for_config(&diff).failed, "would fail to reformat");
    }

    #[test]
    fn test_messages() {
        let path = Path::new("src/x.py");
        assert_eq!(
            unchanged_message(path, Outcome::Unchanged),
            "src/x.py already well formatted, good job."
        );
        assert_eq!(
            unchanged_message(path, Outcome::CachedUnchanged),
            "src/x.py wasn't modified on disk since last run."
        );
        assert_eq!(
            failure_message(path, "syntax error"),
            "error: cannot format src/x.py: syntax error"
        );
        assert_eq!(
            ignored_message(path, "matches an --exclude pattern"),
            "src/x.py ignored: matches an --exclude pattern"
        );
    }

    #[test]
    fn test_empty_sentence_is_a_period() {
        assert_eq!(sentence(Vec::new()).plain(), ".");
    }

    #[test]
    fn test_shows_changed() {
        let quiet = ReportConfig {
            quiet: true,
            ..Default::default()
        };
        assert!(!quiet.shows_changed());
        assert!(ReportConfig { verbose: true, ..quiet }.shows_changed());
        assert!(ReportConfig::default().shows_changed());
    }
}
