//! Delivering the processed results.

use std::io::Write;

use itertools::Itertools;
use pipesel_core::error::{Error, Result};

use crate::cli_args::RunOptions;
use crate::clipboard::{copy_results, ClipboardWriter};

/// Prints `results` joined by the item separator, then copies the same text
/// to the clipboard when asked to.
///
/// The output ends with a newline unless NUL separates the items. Printing
/// comes first so a clipboard that never answers cannot hold up a pipeline.
///
/// # Errors
///
/// Returns [`Error::Render`] if the output cannot be written, for example
/// because the reading end of the pipe was closed.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[String],
    options: &RunOptions,
    clipboard: &dyn ClipboardWriter,
) -> Result<()> {
    let joined = results.iter().join(&options.separator);

    out.write_all(joined.as_bytes()).map_err(Error::Render)?;
    if options.newline {
        out.write_all(b"\n").map_err(Error::Render)?;
    }
    out.flush().map_err(Error::Render)?;

    if options.copy {
        copy_results(clipboard, &joined);
    }
    Ok(())
}
