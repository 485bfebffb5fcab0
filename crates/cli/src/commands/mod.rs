//! CLI command definitions and execution
//!
//! This module contains the CLI commands and their implementations.

use std::path::PathBuf;

use br_core::ExitCode;
use clap::{Parser, Subcommand};

pub mod completions;
pub mod format;

/// br - reformat files and report what happened
///
/// Runs a formatter command over source files and prints a summary or a
/// JUnit XML report. Exits with 1 when `--check` finds files to reformat
/// and with 123 when any file fails.
#[derive(Parser, Debug)]
#[command(name = "br")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    /// Read configuration from this file
    #[arg(long, global = true, env = "BR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format files and report the results
    Format(format::FormatArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub no_color: bool,
    pub config: Option<PathBuf>,
}

/// Execute the CLI command and return an exit code
pub fn execute(cli: Cli) -> ExitCode {
    let global = GlobalOptions {
        no_color: cli.no_color,
        config: cli.config,
    };

    match cli.command {
        Commands::Format(args) => format::execute(args, global),
        Commands::Completions(args) => completions::execute(args),
    }
}
