//! Exit code definitions for br
//!
//! Scripts and CI jobs branch on these values. `WouldReformat` and
//! `Failure` are what the reports produce; `UsageError` is only returned by
//! the CLI before any file has been processed.

/// Exit codes for the br CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every file was processed without problems
    Success = 0,

    /// At least one file would be reformatted while running with `--check`
    WouldReformat = 1,

    /// Invalid arguments or configuration
    UsageError = 2,

    /// At least one file could not be formatted
    ///
    /// Values from 126 upwards are reserved by shells.
    Failure = 123,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get a human-readable description of the exit code
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "All files processed",
            Self::WouldReformat => "Some files would be reformatted",
            Self::UsageError => "Invalid arguments or configuration",
            Self::Failure => "Some files failed to reformat",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}
