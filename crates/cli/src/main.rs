//! br - reformat files and report what happened
//!
//! Runs an external formatter over source files and reports the outcome as
//! a short summary or a JUnit XML document.

use black_report::commands::{self, Cli};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JUnit documents
    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let exit_code = commands::execute(cli);

    std::process::exit(exit_code.as_i32());
}
