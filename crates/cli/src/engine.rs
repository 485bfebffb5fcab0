//! Formatting engine backed by an external command
//!
//! The command receives the file's contents on stdin and must print the
//! formatted result on stdout. Byte-identical output means nothing changed.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use br_core::{Channel, Error, FormatEngine, FormatVerdict, Result, WriteBack};
use tracing::debug;

/// Runs a formatter command once per file
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
    diff_channel: Channel,
}

impl CommandEngine {
    /// Build an engine from a whitespace-separated command line
    pub fn new(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| Error::Config("Formatter command cannot be empty".into()))?;
        Ok(Self {
            program,
            args: parts.collect(),
            diff_channel: Channel::Out,
        })
    }

    /// Stream that receives diff output, stdout unless something else owns it
    pub fn with_diff_channel(mut self, channel: Channel) -> Self {
        self.diff_channel = channel;
        self
    }

    /// Normalized command line, used to key the cache
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self, source: &[u8]) -> Result<Vec<u8>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Engine(format!("cannot run {}: {e}", self.program)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::General("formatter stdin unavailable".into()))?;

        // Feed stdin while draining stdout so large files cannot deadlock.
        let (output, written) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(source));
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (output, written)
        });
        let output = output?;

        // A formatter that bails out early closes stdin; its status wins.
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr.trim();
            return Err(Error::Engine(if message.is_empty() {
                format!("{} exited with {}", self.program, output.status)
            } else {
                message.to_string()
            }));
        }
        written?;
        Ok(output.stdout)
    }
}

impl FormatEngine for CommandEngine {
    fn format_file(&self, path: &Path, write_back: WriteBack) -> Result<FormatVerdict> {
        let source = std::fs::read(path)?;
        let formatted = self.run(&source)?;

        if formatted == source {
            debug!(path = %path.display(), "nothing changed");
            return Ok(FormatVerdict::NothingChanged);
        }

        match write_back {
            WriteBack::Yes => std::fs::write(path, &formatted)?,
            WriteBack::Diff => match self.diff_channel {
                Channel::Out => write_diff(&mut std::io::stdout().lock(), path, &formatted)?,
                Channel::Err => write_diff(&mut std::io::stderr().lock(), path, &formatted)?,
            },
            WriteBack::Check => {}
        }
        Ok(FormatVerdict::Reformatted)
    }
}

/// Header plus the reformatted content
fn write_diff(out: &mut impl Write, path: &Path, formatted: &[u8]) -> Result<()> {
    writeln!(out, "--- {}", path.display())?;
    writeln!(out, "+++ {}", path.display())?;
    out.write_all(formatted)?;
    out.flush()?;
    Ok(())
}
