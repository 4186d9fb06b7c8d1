//! Terminal plumbing: where frames go, how big the screen is, and putting the
//! terminal back the way it was.
//!
//! Keys are read through crossterm, which falls back to `/dev/tty` when stdin
//! is a pipe. Frames are written to `/dev/tty` as well (stderr when there is
//! none), so stdout only ever carries the result.

use std::fs::OpenOptions;
use std::io::{self, Write};

use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use log::debug;
use pipesel_core::display::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use pipesel_core::error::{Error, Result};

/// Escape sequence that makes the cursor visible again.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Output stream for drawing frames.
pub fn tty_output() -> Box<dyn Write + Send> {
    match OpenOptions::new().write(true).open("/dev/tty") {
        Ok(tty) => Box::new(tty),
        Err(e) => {
            debug!("Cannot open /dev/tty ({e}), drawing to stderr");
            Box::new(io::stderr())
        }
    }
}

/// Terminal size as `(columns, rows)`, 80×24 when it cannot be determined.
#[must_use]
pub fn terminal_size() -> (u16, u16) {
    match terminal::size() {
        Ok((columns, rows)) if columns > 0 && rows > 0 => (columns, rows),
        Ok(_) => (DEFAULT_COLUMNS, DEFAULT_ROWS),
        Err(e) => {
            debug!("Cannot read terminal size ({e}), assuming {DEFAULT_COLUMNS}x{DEFAULT_ROWS}");
            (DEFAULT_COLUMNS, DEFAULT_ROWS)
        }
    }
}

/// Raw mode and the alternate screen for as long as the guard lives.
pub struct RawModeGuard;

impl RawModeGuard {
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the terminal cannot be switched over.
    pub fn enter<W: Write>(out: &mut W) -> Result<Self> {
        enable_raw_mode().map_err(Error::Render)?;
        // From here on the terminal is restored on drop, even if the rest fails
        let guard = RawModeGuard;
        execute!(out, EnterAlternateScreen, cursor::Hide).map_err(Error::Render)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Failures are ignored; there is nothing left to report them to.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut out = tty_output();
    let _ = execute!(out, cursor::Show, LeaveAlternateScreen);
}

/// Restores the terminal and ends the process without printing a result.
pub fn forced_exit() -> ! {
    restore_terminal();
    eprint!("{SHOW_CURSOR}");
    std::process::exit(0)
}

/// Makes SIGINT and SIGTERM end the process through [`forced_exit`].
///
/// # Errors
///
/// Returns an error if a handler is already installed.
pub fn install_signal_handler() -> Result<()> {
    ctrlc::set_handler(|| forced_exit())
        .map_err(|e| Error::Misc(format!("Unable to install signal handler: {e}")))
}
