//! Styled text and the emphasis seam
//!
//! Reports never talk to a terminal library. They build [`StyledText`]:
//! the plain string plus the byte ranges that carry emphasis. A caller
//! hands it an [`Emphasis`] implementation to get the final string, or
//! reads [`StyledText::plain`] directly.

use std::fmt;
use std::ops::Range;

/// Foreground colors used by the reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Red,
}

/// Emphasis applied to a run of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub fg: Option<Color>,
}

impl Style {
    /// No emphasis at all
    pub const fn plain() -> Self {
        Self { bold: false, fg: None }
    }

    pub const fn bold() -> Self {
        Self { bold: true, fg: None }
    }

    pub const fn fg(color: Color) -> Self {
        Self { bold: false, fg: Some(color) }
    }

    pub const fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn is_plain(&self) -> bool {
        !self.bold && self.fg.is_none()
    }
}

/// A byte range of a [`StyledText`] and the style applied to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub range: Range<usize>,
    pub style: Style,
}

/// Plain text plus a parallel list of emphasis spans
///
/// Spans are kept in order and never overlap. `Display` prints the plain
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    spans: Vec<Span>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single run of text with one style
    pub fn styled(text: impl AsRef<str>, style: Style) -> Self {
        let mut styled = Self::new();
        styled.push_styled(text, style);
        styled
    }

    /// Append unstyled text
    pub fn push(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.text.push_str(text.as_ref());
        self
    }

    /// Append text with the given style
    pub fn push_styled(&mut self, text: impl AsRef<str>, style: Style) -> &mut Self {
        let text = text.as_ref();
        let start = self.text.len();
        self.text.push_str(text);
        if !style.is_plain() && !text.is_empty() {
            self.spans.push(Span {
                range: start..self.text.len(),
                style,
            });
        }
        self
    }

    /// Append another styled text, shifting its spans
    pub fn append(&mut self, other: StyledText) -> &mut Self {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.spans.extend(other.spans.into_iter().map(|span| Span {
            range: span.range.start + offset..span.range.end + offset,
            style: span.style,
        }));
        self
    }

    /// The text without any emphasis
    pub fn plain(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text of every span together with its style, in order
    pub fn styled_runs(&self) -> impl Iterator<Item = (&str, Style)> {
        self.spans
            .iter()
            .map(|span| (&self.text[span.range.clone()], span.style))
    }

    /// Render through an emphasis implementation
    pub fn paint(&self, emphasis: &dyn Emphasis) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0;
        for span in &self.spans {
            out.push_str(&self.text[cursor..span.range.start]);
            out.push_str(&emphasis.paint(&self.text[span.range.clone()], span.style));
            cursor = span.range.end;
        }
        out.push_str(&self.text[cursor..]);
        out
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        let mut styled = Self::new();
        styled.push(text);
        styled
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self {
            text,
            spans: Vec::new(),
        }
    }
}

/// Turns a styled run of text into its final form (escape codes, markup...)
pub trait Emphasis {
    fn paint(&self, text: &str, style: Style) -> String;
}

/// Emphasis that drops every style
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainEmphasis;

impl Emphasis for PlainEmphasis {
    fn paint(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Marks styled runs with brackets so tests can see where they land
    struct Brackets;

    impl Emphasis for Brackets {
        fn paint(&self, text: &str, style: Style) -> String {
            let mut tag = String::new();
            if style.bold {
                tag.push('b');
            }
            match style.fg {
                Some(Color::Blue) => tag.push_str("blue"),
                Some(Color::Red) => tag.push_str("red"),
                Some(_) => tag.push_str("fg"),
                None => {}
            }
            format!("[{tag}:{text}]")
        }
    }

    #[test]
    fn test_plain_text_has_no_spans() {
        let mut text = StyledText::new();
        text.push("hello ").push("world");
        assert_eq!(text.plain(), "hello world");
        assert!(text.spans().is_empty());
        assert_eq!(text.paint(&Brackets), "hello world");
    }

    #[test]
    fn test_spans_track_byte_ranges() {
        let mut text = StyledText::new();
        text.push("a ")
            .push_styled("bold", Style::bold())
            .push(" b ")
            .push_styled("red", Style::fg(Color::Red));
        assert_eq!(text.spans()[0].range, 2..6);
        assert_eq!(text.spans()[1].range, 9..12);
        assert_eq!(text.paint(&Brackets), "a [b:bold] b [red:red]");
    }

    #[test]
    fn test_plain_style_is_not_recorded() {
        let text = StyledText::styled("x", Style::plain());
        assert!(text.spans().is_empty());
    }

    #[test]
    fn test_append_shifts_spans() {
        let mut left = StyledText::from("1, ");
        let right = StyledText::styled("two", Style::fg(Color::Blue).with_bold());
        left.append(right);
        assert_eq!(left.plain(), "1, two");
        let runs: Vec<_> = left.styled_runs().collect();
        assert_eq!(runs, vec![("two", Style::fg(Color::Blue).with_bold())]);
        assert_eq!(left.paint(&Brackets), "1, [bblue:two]");
    }

    #[test]
    fn test_plain_emphasis_drops_styles() {
        let text = StyledText::styled("boom", Style::fg(Color::Red));
        assert_eq!(text.paint(&PlainEmphasis), "boom");
        assert_eq!(text.to_string(), "boom");
    }
}
