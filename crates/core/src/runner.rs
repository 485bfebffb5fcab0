//! Traversal loop
//!
//! Feeds discovered sources through the formatting engine and into a
//! [`Report`], one `record_*` call per source, in the order given.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::cache::Cache;
use crate::error::Result;
use crate::exit_code::ExitCode;
use crate::outcome::{FormatVerdict, Outcome, WriteBack};
use crate::report::Report;

/// Message recorded for inputs that do not exist
pub const MISSING_MESSAGE: &str = "no such file or directory";

/// The engine that reformats a single file
///
/// Identical output is reported as [`FormatVerdict::NothingChanged`];
/// an `Err` is reserved for files that could not be formatted at all.
#[cfg_attr(test, mockall::automock)]
pub trait FormatEngine {
    fn format_file(&self, path: &Path, write_back: WriteBack) -> Result<FormatVerdict>;
}

/// One entry produced by file discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file to hand to the engine
    File(PathBuf),
    /// A file skipped before formatting, with the reason
    Ignored(PathBuf, String),
    /// An input path that does not exist
    Missing(PathBuf),
}

impl Source {
    pub fn path(&self) -> &Path {
        match self {
            Source::File(path) | Source::Ignored(path, _) | Source::Missing(path) => path,
        }
    }
}

/// Runs the engine over every source and reports the results
pub struct Runner<'a> {
    engine: &'a dyn FormatEngine,
    write_back: WriteBack,
}

impl<'a> Runner<'a> {
    pub fn new(engine: &'a dyn FormatEngine, write_back: WriteBack) -> Self {
        Self { engine, write_back }
    }

    /// Process one source, recording exactly one event on the report
    pub fn process(&self, source: &Source, cache: &mut Cache, report: &mut dyn Report) {
        match source {
            Source::Ignored(path, reason) => report.record_ignored(path, reason),
            Source::Missing(path) => report.record_failure(path, MISSING_MESSAGE),
            Source::File(path) => {
                if cache.is_unchanged(path) {
                    report.record_outcome(path, Outcome::CachedUnchanged);
                    return;
                }
                match self.engine.format_file(path, self.write_back) {
                    Ok(verdict) => {
                        let outcome = Outcome::from(verdict);
                        if !outcome.is_changed() || self.write_back == WriteBack::Yes {
                            cache.mark(path);
                        }
                        report.record_outcome(path, outcome);
                    }
                    Err(e) => report.record_failure(path, &e.to_string()),
                }
            }
        }
    }

    /// Process every source in order and return the report's exit code
    pub fn run<I>(&self, sources: I, cache: &mut Cache, report: &mut dyn Report) -> ExitCode
    where
        I: IntoIterator<Item = Source>,
    {
        let mut processed = 0usize;
        for source in sources {
            debug!(path = %source.path().display(), "processing");
            self.process(&source, cache, report);
            processed += 1;
        }

        if let Err(e) = cache.save() {
            warn!("failed to save cache: {e}");
        }

        let code = report.exit_code();
        info!(processed, exit_code = code.as_i32(), "run finished");
        code
    }
}
