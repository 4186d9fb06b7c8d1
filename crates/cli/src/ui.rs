//! Interactive session: draws prompt frames and feeds it key events until the
//! user submits or cancels.

use std::io::Write;
use std::time::Duration;

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use log::debug;
use pipesel_core::display::pad_to_width;
use pipesel_core::error::{Error, Result};
use pipesel_core::prompt::{Answer, Frame, Line, Prompt};
use pipesel_core::state::{KeyAction, Phase};

use crate::colors::{AsTermColor, HIGHLIGHT_BACKGROUND};
use crate::keymap::map_key;
use crate::terminal::{terminal_size, tty_output, RawModeGuard};

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Submitted(Answer),
    Cancelled,
}

/// Runs `prompt` on the terminal until it is submitted or cancelled.
///
/// The terminal is restored before returning, whatever the result.
///
/// # Errors
///
/// Returns [`Error::Render`] if the terminal cannot be read from or drawn to.
pub fn run_prompt(prompt: &mut dyn Prompt) -> Result<Outcome> {
    let mut out = tty_output();
    let raw_mode_guard = RawModeGuard::enter(&mut out)?; // Restores the terminal when it goes out of scope

    let (mut columns, mut rows) = terminal_size();
    prompt.resize(columns, rows);

    let mut should_redraw = true;

    while !prompt.phase().is_terminal() {
        if should_redraw {
            draw_frame(&mut out, &prompt.render(), columns, rows).map_err(Error::Render)?;
            should_redraw = false;
        }

        if !event::poll(POLL_INTERVAL).map_err(Error::Render)? {
            continue;
        }

        match event::read().map_err(Error::Render)? {
            Event::Key(key_event) => {
                let Some(action) = map_key(prompt.mode(), key_event) else {
                    continue;
                };

                let phase = prompt.handle(action);
                if action == KeyAction::Submit && phase != Phase::Submitted {
                    debug!("Nothing highlighted to submit");
                    ring_bell(&mut out).map_err(Error::Render)?;
                }
                should_redraw = true;
            }
            Event::Resize(new_columns, new_rows) => {
                debug!("Terminal resized to {new_columns}x{new_rows}");
                columns = new_columns;
                rows = new_rows;
                prompt.resize(columns, rows);
                should_redraw = true;
            }
            _ => {}
        }
    }

    drop(raw_mode_guard);

    Ok(match prompt.answer() {
        Some(answer) => Outcome::Submitted(answer),
        None => Outcome::Cancelled,
    })
}

fn ring_bell<W: Write>(out: &mut W) -> std::io::Result<()> {
    queue!(out, Print("\x07"))?;
    out.flush()
}

/// Redraws the whole screen from `frame`.
///
/// Rows beyond the bottom of the terminal are dropped.
pub fn draw_frame<W: Write>(
    out: &mut W,
    frame: &Frame,
    columns: u16,
    rows: u16,
) -> std::io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    for (row, line) in (0..rows).zip(&frame.lines) {
        queue!(out, MoveTo(0, row))?;
        draw_line(out, line, columns)?;
    }

    match frame.cursor {
        Some((column, row)) => queue!(out, MoveTo(column, row), cursor::Show)?,
        None => queue!(out, cursor::Hide)?,
    }

    out.flush()
}

fn draw_line<W: Write>(out: &mut W, line: &Line, columns: u16) -> std::io::Result<()> {
    if line.highlighted {
        queue!(out, SetBackgroundColor(HIGHLIGHT_BACKGROUND))?;
    }

    for span in &line.spans {
        if let Some(color) = span.style.as_crossterm_color() {
            queue!(out, SetForegroundColor(color))?;
        }
        if let Some(attribute) = span.style.attribute() {
            queue!(out, SetAttribute(attribute))?;
        }
        queue!(
            out,
            Print(&span.text),
            SetForegroundColor(Color::Reset),
            SetAttribute(Attribute::NormalIntensity)
        )?;
    }

    if line.highlighted {
        let padding = usize::from(columns).saturating_sub(line.width());
        queue!(
            out,
            Print(pad_to_width("", padding)),
            SetBackgroundColor(Color::Reset)
        )?;
    }

    queue!(out, SetAttribute(Attribute::Reset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipesel_core::prompt::SpanStyle;

    fn drawn(frame: &Frame, columns: u16, rows: u16) -> String {
        let mut out = Vec::new();
        draw_frame(&mut out, frame, columns, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_draws_every_span() {
        let mut frame = Frame::default();
        frame.push(
            Line::new()
                .push("? ", SpanStyle::Question)
                .push("Select an item:", SpanStyle::Message),
        );
        frame.push(Line::new().push("  foo", SpanStyle::Plain));

        let output = drawn(&frame, 80, 24);
        assert!(output.contains("Select an item:"));
        assert!(output.contains("  foo"));
    }

    #[test]
    fn test_highlighted_line_fills_the_row() {
        let mut frame = Frame::default();
        frame.push(Line::new().push("❯ bar", SpanStyle::Highlight).highlighted());

        let output = drawn(&frame, 20, 24);
        assert!(output.contains("❯ bar"));
        assert!(output.contains(&" ".repeat(15)));
        assert!(!output.contains(&" ".repeat(16)));
    }

    #[test]
    fn test_rows_beyond_terminal_are_dropped() {
        let mut frame = Frame::default();
        for value in ["first", "second", "third"] {
            frame.push(Line::new().push(value, SpanStyle::Plain));
        }

        let output = drawn(&frame, 80, 2);
        assert!(output.contains("second"));
        assert!(!output.contains("third"));
    }
}
