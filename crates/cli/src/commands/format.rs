//! format command - Reformat files and report
//!
//! Discovers sources, runs the formatter over them and renders either the
//! summary sentence or a JUnit XML document.

use std::path::PathBuf;

use br_core::{
    Cache, Channel, ConfigManager, Defaults, ExitCode, JunitReport, Report, ReportConfig, Runner,
    SummaryReport, WriteBack,
};
use clap::Args;
use tracing::debug;

use super::GlobalOptions;
use crate::discovery::Discovery;
use crate::engine::CommandEngine;
use crate::output::{ColorMode, Formatter, OutputConfig, TerminalSink};

/// Format files and report the results
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Files or directories to format
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Don't write files back; exit with 1 if any file would be reformatted
    #[arg(long)]
    pub check: bool,

    /// Print the reformatted content instead of writing files back
    #[arg(long)]
    pub diff: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Also report unchanged and ignored files
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a JUnit XML report on stdout instead of the summary
    #[arg(long)]
    pub junit: bool,

    /// Write the JUnit XML report to this file
    #[arg(long, value_name = "FILE")]
    pub junit_file: Option<PathBuf>,

    /// Formatter command reading stdin and writing stdout
    #[arg(long, value_name = "CMD")]
    pub formatter: Option<String>,

    /// Glob pattern of files to skip (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// File extension to pick up in directories (repeatable)
    #[arg(long, value_name = "EXT")]
    pub include: Vec<String>,

    /// Don't read or write the prior-run cache
    #[arg(long)]
    pub no_cache: bool,
}

/// Settings for one run, flags layered over the config file defaults
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub report: ReportConfig,
    pub color: ColorMode,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub formatter: String,
    pub cache: bool,
}

impl RunSettings {
    pub fn resolve(args: &FormatArgs, defaults: &Defaults, global: &GlobalOptions) -> Self {
        let base = defaults.report_config();
        let report = ReportConfig {
            check: args.check || base.check,
            diff: args.diff || base.diff,
            quiet: args.quiet || base.quiet,
            verbose: args.verbose || base.verbose,
        };
        let color = if global.no_color {
            ColorMode::Never
        } else {
            ColorMode::from_config(&defaults.color)
        };
        let include = if args.include.is_empty() {
            defaults.include.clone()
        } else {
            args.include.clone()
        };
        let mut exclude = defaults.exclude.clone();
        exclude.extend(args.exclude.iter().cloned());

        Self {
            report,
            color,
            include,
            exclude,
            formatter: args
                .formatter
                .clone()
                .unwrap_or_else(|| defaults.formatter.clone()),
            cache: defaults.cache && !args.no_cache,
        }
    }

    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            color: self.color,
            quiet: self.report.quiet,
            verbose: self.report.verbose,
        }
    }
}

/// Execute the format command
pub fn execute(args: FormatArgs, global: GlobalOptions) -> ExitCode {
    let manager = match &global.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => match ConfigManager::new() {
            Ok(manager) => manager,
            Err(e) => {
                Formatter::default().error(&e.to_string());
                return e.exit_code();
            }
        },
    };
    let config = match manager.load() {
        Ok(config) => config,
        Err(e) => {
            Formatter::default().error(&e.to_string());
            return e.exit_code();
        }
    };

    let settings = RunSettings::resolve(&args, &config.defaults, &global);
    let formatter = Formatter::new(settings.output_config());
    debug!(?settings, "resolved run settings");

    let discovery = match Discovery::new(&settings.include, &settings.exclude) {
        Ok(discovery) => discovery,
        Err(e) => {
            formatter.error(&e.to_string());
            return e.exit_code();
        }
    };
    // A JUnit document on stdout must stay the only thing written there.
    let diff_channel = if args.junit && args.junit_file.is_none() {
        Channel::Err
    } else {
        Channel::Out
    };
    let engine = match CommandEngine::new(&settings.formatter) {
        Ok(engine) => engine.with_diff_channel(diff_channel),
        Err(e) => {
            formatter.error(&e.to_string());
            return e.exit_code();
        }
    };
    let sources = match discovery.collect(&args.paths) {
        Ok(sources) => sources,
        Err(e) => {
            formatter.error(&e.to_string());
            return e.exit_code();
        }
    };
    if sources.is_empty() {
        formatter.note("No files are present to be formatted. Nothing to do 😴");
        return ExitCode::Success;
    }

    let mut cache = match Cache::default_location() {
        Some(location) if settings.cache => Cache::load(location, &engine.command_line()),
        _ => Cache::disabled(),
    };
    let write_back = WriteBack::from_flags(settings.report.check, settings.report.diff);
    let runner = Runner::new(&engine, write_back);

    if args.junit || args.junit_file.is_some() {
        let mut report = JunitReport::new(settings.report);
        let code = runner.run(sources, &mut cache, &mut report);
        let document = report.render();

        match &args.junit_file {
            Some(path) => {
                if let Err(e) = std::fs::write(path, document.plain()) {
                    formatter.error(&format!(
                        "cannot write JUnit report to {}: {e}",
                        path.display()
                    ));
                    return ExitCode::Failure;
                }
            }
            None => formatter.document(document.plain()),
        }
        formatter.finish(code, &report.summary());
        code
    } else {
        let mut report = SummaryReport::new(settings.report, TerminalSink::new(settings.color));
        let code = runner.run(sources, &mut cache, &mut report);
        formatter.finish(code, &report.render());
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::commands::{Cli, Commands};

    fn parse(args: &[&str]) -> FormatArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Format(args) => args,
            _ => panic!("expected format command"),
        }
    }

    #[test]
    fn test_flags_override_config_defaults() {
        let args = parse(&["br", "format", "src", "--check", "-q", "--include", "pyi"]);
        let defaults = Defaults {
            verbose: true,
            exclude: vec!["build/*".to_string()],
            ..Default::default()
        };
        let settings = RunSettings::resolve(&args, &defaults, &GlobalOptions::default());

        assert_eq!(
            settings.report,
            ReportConfig {
                check: true,
                diff: false,
                quiet: true,
                verbose: true,
            }
        );
        assert_eq!(settings.include, vec!["pyi".to_string()]);
        assert_eq!(settings.exclude, vec!["build/*".to_string()]);
        assert_eq!(settings.formatter, "black -q -");
        assert!(settings.cache);
    }

    #[test]
    fn test_no_color_and_no_cache() {
        let args = parse(&["br", "format", "a.py", "--no-cache", "--formatter", "cat"]);
        let global = GlobalOptions {
            no_color: true,
            config: None,
        };
        let settings = RunSettings::resolve(&args, &Defaults::default(), &global);
        assert_eq!(settings.color, ColorMode::Never);
        assert!(!settings.cache);
        assert_eq!(settings.formatter, "cat");
    }

    #[test]
    fn test_paths_are_required() {
        assert!(Cli::try_parse_from(["br", "format"]).is_err());
    }

    #[test]
    fn test_repeatable_excludes() {
        let args = parse(&["br", "format", ".", "--exclude", "a/*", "--exclude", "b/*"]);
        assert_eq!(args.exclude, vec!["a/*".to_string(), "b/*".to_string()]);
    }
}
