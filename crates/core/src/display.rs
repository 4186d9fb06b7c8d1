//! Fitting candidate labels into the terminal.
//!
//! Widths are display columns as measured by `unicode-width`: East Asian wide
//! characters and most emoji take two columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns reserved for prompt glyphs, checkboxes and the ellipsis.
pub const UI_CHROME_WIDTH: usize = 9;

/// Terminal width assumed when the output is not a terminal.
pub const DEFAULT_COLUMNS: u16 = 80;

/// Terminal height assumed when the output is not a terminal.
pub const DEFAULT_ROWS: u16 = 24;

/// Appended to labels that had to be shortened.
pub const ELLIPSIS: &str = "...";

/// Widest label that fits a terminal `columns` wide.
#[must_use]
pub fn max_label_width(columns: u16) -> usize {
    usize::from(columns).saturating_sub(UI_CHROME_WIDTH)
}

#[must_use]
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Derives a display label from `value` that is at most `max_width` columns
/// wide before the ellipsis marker.
///
/// Control characters are dropped so a stray `\r` cannot move the cursor.
///
/// ```
/// use pipesel_core::display::format_label;
///
/// assert_eq!(format_label("short", 20), "short");
/// assert_eq!(format_label("日本語テキスト", 6), "日本語...");
/// ```
#[must_use]
pub fn format_label(value: &str, max_width: usize) -> String {
    let printable: String = value.chars().filter(|c| !c.is_control()).collect();

    if display_width(&printable) <= max_width {
        return printable;
    }

    let mut label = String::new();
    let mut width = 0;

    for c in printable.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width {
            break;
        }
        label.push(c);
        width += char_width;
    }

    label.push_str(ELLIPSIS);
    label
}

/// Right-pads `s` with spaces up to `width` display columns.
#[must_use]
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - current))
}
