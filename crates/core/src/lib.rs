//! br-core: Core library for the br reformatting report tool
//!
//! This crate provides everything between "the engine decided what happened
//! to a file" and "the process exits":
//! - Outcome classification and the engine seam
//! - The two report accumulators (summary sentence and JUnit XML)
//! - Exit code policy
//! - Styled text with an injectable emphasis renderer
//! - Prior-run cache and configuration
//!
//! This crate is independent of any terminal library and of the formatter
//! actually used, so reports can be driven and inspected in tests.

pub mod cache;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod outcome;
pub mod report;
pub mod runner;
pub mod sink;
pub mod style;

pub use cache::Cache;
pub use config::{Config, ConfigManager, Defaults};
pub use error::{Error, Result};
pub use exit_code::ExitCode;
pub use outcome::{FormatVerdict, Outcome, WriteBack};
pub use report::{JunitReport, Report, ReportConfig, SummaryReport};
pub use runner::{FormatEngine, Runner, Source};
pub use sink::{Channel, MemorySink, OutputSink};
pub use style::{Color, Emphasis, PlainEmphasis, Style, StyledText};
