//! Configuration management
//!
//! This module loads the br configuration file. The file is TOML, stored
//! at ~/.config/black-report/config.toml or under `$BR_CONFIG_DIR`, and is
//! only ever edited by hand.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::report::ReportConfig;

/// Current configuration schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "BR_CONFIG_DIR";

/// Default color setting
const DEFAULT_COLOR: &str = "auto";

/// Default formatter command
const DEFAULT_FORMATTER: &str = "black -q -";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for migration support
    pub schema_version: u32,

    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default settings for a formatting run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub check: bool,

    #[serde(default)]
    pub diff: bool,

    #[serde(default)]
    pub quiet: bool,

    #[serde(default)]
    pub verbose: bool,

    /// Color mode: "auto", "always", or "never"
    #[serde(default = "default_color")]
    pub color: String,

    /// File extensions picked up when walking directories
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Glob patterns of files to report as ignored
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Formatter command, reads the source on stdin and writes to stdout
    #[serde(default = "default_formatter")]
    pub formatter: String,

    /// Use the prior-run cache
    #[serde(default = "default_true")]
    pub cache: bool,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_include() -> Vec<String> {
    vec!["py".to_string()]
}

fn default_formatter() -> String {
    DEFAULT_FORMATTER.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            check: false,
            diff: false,
            quiet: false,
            verbose: false,
            color: default_color(),
            include: default_include(),
            exclude: Vec::new(),
            formatter: default_formatter(),
            cache: true,
        }
    }
}

impl Defaults {
    /// Report flags from the configured defaults
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            check: self.check,
            diff: self.diff,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }

    /// Reject values the CLI cannot act on
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.color.as_str(), "auto" | "always" | "never") {
            return Err(Error::Config(format!(
                "Invalid color mode '{}'. Expected auto, always or never",
                self.color
            )));
        }
        if self.formatter.split_whitespace().next().is_none() {
            return Err(Error::Config("Formatter command cannot be empty".into()));
        }
        for pattern in &self.exclude {
            glob::Pattern::new(pattern)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            defaults: Defaults::default(),
        }
    }
}

/// Locates and loads the configuration file
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the default config path
    pub fn new() -> Result<Self> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| Error::Config("Could not determine config directory".into()))?
                .join("black-report"),
        };
        Ok(Self {
            config_path: config_dir.join("config.toml"),
        })
    }

    /// Create a ConfigManager with a custom path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist, returns a default configuration.
    /// Files written for a newer schema version are rejected.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&content)?;

        if config.schema_version > SCHEMA_VERSION {
            return Err(Error::Config(format!(
                "Configuration file version {} is newer than supported version {}. Please upgrade br.",
                config.schema_version, SCHEMA_VERSION
            )));
        }

        config.defaults.validate()?;
        Ok(config)
    }
}
