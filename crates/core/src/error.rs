//! Error types for br-core
//!
//! The accumulators themselves never fail. Everything around them (config
//! files, the prior-run cache, exclude patterns, the formatting engine)
//! reports through this one error type, which maps onto an exit code.

use thiserror::Error;

use crate::exit_code::ExitCode;

/// Result type alias for br-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for br-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid exclude pattern
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The formatting engine could not process a file.
    ///
    /// The payload is shown verbatim after `cannot format {path}:`.
    #[error("{0}")]
    Engine(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Error::Config(_) | Error::TomlParse(_) | Error::Pattern(_) => ExitCode::UsageError,
            _ => ExitCode::Failure,
        }
    }
}
