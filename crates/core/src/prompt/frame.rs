//! Terminal independent description of one screen of a prompt.

use itertools::Itertools;

use crate::display::display_width;

/// How a span should look; the terminal front end picks the colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Question,
    Message,
    Hint,
    Pointer,
    Highlight,
    Checked,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
    /// The row under the cursor; front ends may fill it to the full width.
    pub highlighted: bool,
}

impl Line {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn push(mut self, text: impl Into<String>, style: SpanStyle) -> Self {
        self.spans.push(Span {
            text: text.into(),
            style,
        });
        self
    }

    #[must_use]
    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(|span| display_width(&span.text)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
    /// Where the terminal cursor should be shown as `(column, row)`; hidden when `None`.
    pub cursor: Option<(u16, u16)>,
}

impl Frame {
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// The frame as plain text, one line per row.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.iter().map(Line::text).join("\n")
    }
}
