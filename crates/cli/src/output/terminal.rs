//! Terminal backends for styled text

use br_core::{Channel, Color, Emphasis, OutputSink, Style, StyledText};
use console::Term;

use super::ColorMode;

/// Emphasis rendered with `console` escape codes
#[derive(Debug, Clone, Copy)]
pub struct ConsoleEmphasis {
    mode: ColorMode,
    stderr: bool,
}

impl ConsoleEmphasis {
    /// Emphasis for text headed to stdout
    pub fn stdout(mode: ColorMode) -> Self {
        Self {
            mode,
            stderr: false,
        }
    }

    /// Emphasis for text headed to stderr
    pub fn stderr(mode: ColorMode) -> Self {
        Self { mode, stderr: true }
    }
}

impl Emphasis for ConsoleEmphasis {
    fn paint(&self, text: &str, style: Style) -> String {
        let mut console_style = console::Style::new();
        if self.stderr {
            console_style = console_style.for_stderr();
        }
        match self.mode {
            ColorMode::Never => return text.to_string(),
            ColorMode::Always => console_style = console_style.force_styling(true),
            ColorMode::Auto => {}
        }

        if style.bold {
            console_style = console_style.bold();
        }
        console_style = match style.fg {
            Some(Color::Blue) => console_style.blue(),
            Some(Color::Red) => console_style.red(),
            None => console_style,
        };
        console_style.apply_to(text).to_string()
    }
}

/// Sink writing out-channel lines to stdout and err-channel lines to stderr
#[derive(Debug)]
pub struct TerminalSink {
    out: Term,
    err: Term,
    out_emphasis: ConsoleEmphasis,
    err_emphasis: ConsoleEmphasis,
}

impl TerminalSink {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            out_emphasis: ConsoleEmphasis::stdout(mode),
            err_emphasis: ConsoleEmphasis::stderr(mode),
        }
    }
}

impl OutputSink for TerminalSink {
    fn emit(&mut self, channel: Channel, line: StyledText) {
        let (term, emphasis) = match channel {
            Channel::Out => (&self.out, &self.out_emphasis),
            Channel::Err => (&self.err, &self.err_emphasis),
        };
        if let Err(e) = term.write_line(&line.paint(emphasis)) {
            tracing::warn!("failed to write output: {e}");
        }
    }
}
