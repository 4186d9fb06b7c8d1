use crossterm::style::{Attribute, Color};
use pipesel_core::prompt::SpanStyle;

/// Background of the row under the cursor.
pub const HIGHLIGHT_BACKGROUND: Color = Color::DarkBlue;

/// Trait for converting frame styles to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Option<Color>;

    fn attribute(&self) -> Option<Attribute>;
}

impl AsTermColor for SpanStyle {
    fn as_crossterm_color(&self) -> Option<Color> {
        match self {
            SpanStyle::Plain | SpanStyle::Message => None,
            SpanStyle::Question | SpanStyle::Checked => Some(Color::Green),
            SpanStyle::Hint => Some(Color::DarkGrey),
            SpanStyle::Pointer | SpanStyle::Highlight => Some(Color::Yellow),
            SpanStyle::Error => Some(Color::Red),
        }
    }

    fn attribute(&self) -> Option<Attribute> {
        match self {
            SpanStyle::Message | SpanStyle::Highlight | SpanStyle::Pointer => Some(Attribute::Bold),
            SpanStyle::Hint => Some(Attribute::Dim),
            _ => None,
        }
    }
}
