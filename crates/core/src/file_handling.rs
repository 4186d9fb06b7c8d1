//! Reading the items to select from and the settings file.
//!
//! Input files are decoded with `encoding_rs`. Besides the WHATWG labels it
//! knows, the short names common on the command line (`utf8`, `utf16le`,
//! `ucs2`, `latin1`, `ascii`, ...) are accepted.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::{Encoding, UTF_16LE, UTF_8, WINDOWS_1252};
use log::{debug, warn};

use crate::config::Settings;
use crate::error::{Error, Result, INPUT_FILE};
use crate::tokenizer::RawInput;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Looks up an encoding by name.
///
/// # Errors
///
/// Returns [`Error::UnknownEncoding`] for names neither `encoding_rs` nor the
/// short aliases recognise.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    let normalized = label.trim().to_ascii_lowercase();

    let alias = match normalized.as_str() {
        "utf8" => Some(UTF_8),
        "utf16le" | "utf-16" | "ucs2" | "ucs-2" => Some(UTF_16LE),
        "latin1" | "binary" | "ascii" => Some(WINDOWS_1252),
        _ => None,
    };

    alias
        .or_else(|| Encoding::for_label(normalized.as_bytes()))
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Reads and decodes the file at `path`.
///
/// A byte order mark overrides the requested encoding.
///
/// # Errors
///
/// Returns an error if the encoding is unknown or the file cannot be read.
pub fn read_input_file(path: &str, encoding: &str) -> Result<RawInput> {
    let encoding = resolve_encoding(encoding)?;

    let mut bytes = Vec::new();
    get_reader(INPUT_FILE, path)?
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io_error(INPUT_FILE.to_string(), path.to_string(), e))?;

    let (text, used_encoding, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!(
            "Input file `{path}` contained sequences invalid in {}; they were replaced",
            used_encoding.name()
        );
    }
    debug!(
        "Read {} bytes from `{path}` as {}",
        bytes.len(),
        used_encoding.name()
    );

    Ok(RawInput::Text(text.into_owned()))
}

/// Reads everything from a pipe.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_input<R: Read>(mut reader: R) -> Result<RawInput> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    debug!("Read {} bytes of piped input", bytes.len());
    Ok(RawInput::from_bytes(bytes))
}

/// Loads the settings file.
///
/// A missing file yields the default settings.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid
/// settings YAML.
pub fn get_settings(config_path: &str) -> Result<Settings> {
    if !Path::exists(Path::new(config_path)) {
        debug!("No settings file at `{config_path}`, using defaults");
        return Ok(Settings::default());
    }

    let mut contents = String::new();
    get_reader("settings", config_path)?
        .read_to_string(&mut contents)
        .map_err(|e| Error::io_error("settings".to_string(), config_path.to_string(), e))?;

    if contents.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            config_path.to_string(),
            e,
        )
    })
}
