//! Integration tests for the br CLI
//!
//! These tests run the built binary with small shell utilities standing in
//! for a real formatter (`cat` never changes anything, `tr -d =` always
//! does, `false` always fails).

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the br binary
fn br_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_br"))
}

/// Workspace with isolated config and cache directories
struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join("src").join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Run br with the test environment
    fn run(&self, args: &[&str]) -> Output {
        Command::new(br_binary())
            .args(args)
            .current_dir(self.path())
            .env("BR_CONFIG_DIR", self.path().join("config"))
            .env("BR_CACHE_DIR", self.path().join("cache"))
            .env_remove("BR_CONFIG")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute br command")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_check_reports_files_that_would_change() {
    let env = TestEnv::new();
    env.write("a.py", "x=1\n");

    let output = env.run(&[
        "--no-color",
        "format",
        "src",
        "--check",
        "--formatter",
        "tr -d =",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("would reformat src/a.py"));
    assert!(stderr(&output).contains("All done!"));
    assert!(stderr(&output).contains("1 file would be reformatted."));
    assert_eq!(
        std::fs::read_to_string(env.path().join("src/a.py")).unwrap(),
        "x=1\n"
    );
}

#[test]
fn test_write_back_and_exit_zero() {
    let env = TestEnv::new();
    env.write("a.py", "x=1\n");
    env.write("b.py", "y\n");

    let output = env.run(&["--no-color", "format", "src", "--formatter", "tr -d ="]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("1 file reformatted, 1 file left unchanged."));
    assert_eq!(
        std::fs::read_to_string(env.path().join("src/a.py")).unwrap(),
        "x1\n"
    );
}

#[test]
fn test_failures_exit_123() {
    let env = TestEnv::new();
    env.write("a.py", "x = 1\n");

    let output = env.run(&["--no-color", "format", "src", "--formatter", "false"]);

    assert_eq!(output.status.code(), Some(123));
    assert!(stderr(&output).contains("error: cannot format src/a.py"));
    assert!(stderr(&output).contains("Oh no!"));
    assert!(stderr(&output).contains("1 file failed to reformat."));
}

#[test]
fn test_missing_path_is_a_failure() {
    let env = TestEnv::new();

    let output = env.run(&["--no-color", "format", "nope.py", "--formatter", "cat"]);

    assert_eq!(output.status.code(), Some(123));
    assert!(stderr(&output).contains("error: cannot format nope.py: no such file or directory"));
}

#[test]
fn test_quiet_unchanged_is_silent() {
    let env = TestEnv::new();
    env.write("a.py", "x = 1\n");

    let output = env.run(&["format", "src", "-q", "--formatter", "cat"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_junit_document_on_stdout() {
    let env = TestEnv::new();
    env.write("a.py", "x=1\n");
    env.write("b.py", "y\n");

    let output = env.run(&[
        "--no-color",
        "format",
        "src",
        "--check",
        "--junit",
        "--formatter",
        "tr -d =",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let xml = stdout(&output);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
    assert!(xml.contains("failures=\"1\" errors=\"0\" name=\"black\"\nskipped=\"0\" tests=\"2\""));
    assert!(xml.contains("<failure message=\"would reformat src/a.py\" />"));
    assert!(xml.contains("name=\"black-src/b.py\"></testcase>"));
    assert!(
        stderr(&output).contains("1 file would be reformatted, 1 file would be left unchanged.")
    );
}

#[test]
fn test_junit_stdout_stays_xml_with_diff() {
    let env = TestEnv::new();
    env.write("a.py", "x=1\n");

    let output = env.run(&[
        "--no-color",
        "format",
        "src",
        "--diff",
        "--junit",
        "--formatter",
        "tr -d =",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let xml = stdout(&output);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
    assert!(xml.ends_with("</testsuite>\n"));
    assert!(!xml.contains("--- src/a.py"));
    assert!(stderr(&output).contains("--- src/a.py\n+++ src/a.py\nx1\n"));
    assert_eq!(
        std::fs::read_to_string(env.path().join("src/a.py")).unwrap(),
        "x=1\n"
    );
}

#[test]
fn test_diff_goes_to_stdout_without_junit() {
    let env = TestEnv::new();
    env.write("a.py", "x=1\n");

    let output = env.run(&["--no-color", "format", "src", "--diff", "--formatter", "tr -d ="]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("--- src/a.py\n+++ src/a.py\nx1\n"));
}

#[test]
fn test_junit_file_and_verbose_skips() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.path().join("src/build")).unwrap();
    env.write("a.py", "x = 1\n");
    env.write("build/gen.py", "x = 1\n");
    let report = env.path().join("report.xml");

    let output = env.run(&[
        "--no-color",
        "format",
        "src",
        "-v",
        "--exclude",
        "build/*",
        "--junit-file",
        report.to_str().unwrap(),
        "--formatter",
        "cat",
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
    let xml = std::fs::read_to_string(&report).unwrap();
    assert!(xml.contains("skipped=\"1\" tests=\"2\""));
    assert!(xml.contains(
        "<skipped message=\"src/build/gen.py ignored: matches an --exclude pattern\" />"
    ));
}

#[test]
fn test_second_run_uses_cache() {
    let env = TestEnv::new();
    env.write("a.py", "x = 1\n");

    let first = env.run(&["--no-color", "format", "src", "-v", "--formatter", "cat"]);
    assert!(stdout(&first).contains("src/a.py already well formatted, good job."));

    let second = env.run(&["--no-color", "format", "src", "-v", "--formatter", "cat"]);
    assert_eq!(second.status.code(), Some(0));
    assert!(stdout(&second).contains("src/a.py wasn't modified on disk since last run."));

    let uncached = env.run(&[
        "--no-color",
        "format",
        "src",
        "-v",
        "--no-cache",
        "--formatter",
        "cat",
    ]);
    assert!(stdout(&uncached).contains("src/a.py already well formatted, good job."));
}

#[test]
fn test_invalid_config_is_a_usage_error() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.path().join("config")).unwrap();
    std::fs::write(
        env.path().join("config/config.toml"),
        "schema_version = 1\n[defaults]\ncolor = \"sometimes\"\n",
    )
    .unwrap();

    let output = env.run(&["--no-color", "format", "src"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Configuration error"));
}

#[test]
fn test_config_defaults_apply() {
    let env = TestEnv::new();
    env.write("a.py", "x=1\n");
    std::fs::create_dir_all(env.path().join("config")).unwrap();
    std::fs::write(
        env.path().join("config/config.toml"),
        "schema_version = 1\n[defaults]\ncheck = true\nformatter = \"tr -d =\"\ncolor = \"never\"\n",
    )
    .unwrap();

    let output = env.run(&["format", "src"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("would reformat src/a.py"));
}
