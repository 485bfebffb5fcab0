//! Output sink for lines written while a run is in progress
//!
//! `SummaryReport` writes per-file lines immediately. Where those lines go
//! is up to the caller: the CLI writes them to the terminal, tests keep them
//! in a [`MemorySink`].

use crate::style::{Color, Style, StyledText};

/// Destination stream of an emitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Standard output
    Out,
    /// Standard error
    Err,
}

/// Receives complete lines, without the trailing newline
pub trait OutputSink {
    fn emit(&mut self, channel: Channel, line: StyledText);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, channel: Channel, line: StyledText) {
        (**self).emit(channel, line);
    }
}

/// Style of an emphasized out-channel line
pub const OUT_STYLE: Style = Style::bold();

/// Style of an err-channel line
pub const ERR_STYLE: Style = Style::fg(Color::Red);

/// Sink that keeps every emitted line
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<(Channel, StyledText)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines with their channel, in emission order
    pub fn lines(&self) -> &[(Channel, StyledText)] {
        &self.lines
    }

    /// Plain text of the lines written to one channel
    pub fn plain(&self, channel: Channel) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.plain())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, channel: Channel, line: StyledText) {
        self.lines.push((channel, line));
    }
}
