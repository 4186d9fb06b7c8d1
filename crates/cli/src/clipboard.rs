//! Copying the results to the system clipboard.

use std::time::Duration;

use log::debug;
use pipesel_core::error::{Error, Result};

/// How long to keep serving the selection until a clipboard manager takes it.
pub const CLIPBOARD_TIMEOUT: Duration = Duration::from_secs(2);

pub trait ClipboardWriter {
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] if the text could not be stored.
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The desktop clipboard, through `arboard`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;

        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            // X11 and Wayland serve the selection from this process, so wait
            // for a clipboard manager to take it over, but not indefinitely.
            clipboard
                .set()
                .wait_until(std::time::Instant::now() + CLIPBOARD_TIMEOUT)
                .text(text)
                .map_err(|e| Error::Clipboard(e.to_string()))
        }

        #[cfg(not(target_os = "linux"))]
        {
            clipboard
                .set_text(text)
                .map_err(|e| Error::Clipboard(e.to_string()))
        }
    }
}

/// Copies `text`, logging instead of failing when no clipboard is available.
pub fn copy_results(writer: &dyn ClipboardWriter, text: &str) -> bool {
    match writer.write_text(text) {
        Ok(()) => {
            debug!("Copied {} bytes to the clipboard", text.len());
            true
        }
        Err(e) => {
            debug!("{e}");
            false
        }
    }
}
