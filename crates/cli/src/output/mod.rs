//! Output formatting utilities
//!
//! This module connects the reports' styled text to the terminal: a
//! `console`-backed emphasis, a sink writing per-file lines as they happen,
//! and the formatter used for the end-of-run messages.

mod formatter;
mod terminal;

pub use formatter::Formatter;
pub use terminal::{ConsoleEmphasis, TerminalSink};

/// When to emit color escape codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Only when the stream is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse the config file value; unknown values fall back to auto
    pub fn from_config(value: &str) -> Self {
        match value {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Auto,
        }
    }
}

/// Output configuration derived from CLI flags and config defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Color handling
    pub color: ColorMode,
    /// Suppress the end-of-run messages
    pub quiet: bool,
    /// Keep the end-of-run messages even when quiet
    pub verbose: bool,
}
