//! Splitting raw input into selectable candidates.
//!
//! Input either arrives as one block of text that is split on a literal
//! separator, or as items the caller already segmented. Empty segments are
//! dropped in both cases; empty input is valid and yields no candidates.

use log::debug;

use crate::display::format_label;
use crate::error::{Error, Result};

/// Raw input handed to the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// A single block of text, split on the separator.
    Text(String),
    /// Items that were segmented by the caller.
    Items(Vec<RawItem>),
    /// Data that is not text; tokenizing it fails with [`Error::InputType`].
    Bytes(Vec<u8>),
}

impl RawInput {
    /// Wraps bytes read from a pipe, keeping them as text when they are valid UTF-8.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => RawInput::Text(text),
            Err(e) => RawInput::Bytes(e.into_bytes()),
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

/// A pre-segmented input item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawItem {
    Text(String),
    /// An item whose displayed name differs from the value it resolves to.
    Named { name: String, value: String },
}

/// One selectable entry.
///
/// The value is fixed at tokenization; the label is derived from the name
/// (the value unless the caller supplied one) and the available width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    value: String,
    label: String,
}

impl Candidate {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: value.clone(),
            label: value.clone(),
            value,
        }
    }

    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Recomputes the label so that it fits `max_width` columns.
    pub fn fit(&mut self, max_width: usize) {
        self.label = format_label(&self.name, max_width);
    }
}

/// Splits `input` into candidates on the literal `separator`.
///
/// # Errors
///
/// Returns [`Error::InputType`] when the input is not text.
///
/// # Examples
///
/// ```
/// use pipesel_core::tokenizer::{tokenize, RawInput};
///
/// let candidates = tokenize(&RawInput::from("foo:bar::baz"), ":")?;
/// let values: Vec<&str> = candidates.iter().map(|c| c.value()).collect();
/// assert_eq!(values, ["foo", "bar", "baz"]);
/// # Ok::<(), pipesel_core::error::Error>(())
/// ```
pub fn tokenize(input: &RawInput, separator: &str) -> Result<Vec<Candidate>> {
    let candidates: Vec<Candidate> = match input {
        RawInput::Text(text) => text
            .split(separator)
            .filter(|item| !item.is_empty())
            .map(Candidate::new)
            .collect(),
        RawInput::Items(items) => items
            .iter()
            .filter_map(|item| match item {
                RawItem::Text(text) if text.is_empty() => None,
                RawItem::Text(text) => Some(Candidate::new(text.as_str())),
                RawItem::Named { name, value } => {
                    Some(Candidate::named(name.as_str(), value.as_str()))
                }
            })
            .collect(),
        RawInput::Bytes(bytes) => {
            return Err(Error::InputType(format!(
                "{} bytes of non-text data",
                bytes.len()
            )));
        }
    };

    debug!("Tokenized input into {} candidates", candidates.len());
    Ok(candidates)
}

/// Fits every candidate label into `max_width` columns.
pub fn fit_labels(candidates: &mut [Candidate], max_width: usize) {
    for candidate in candidates.iter_mut() {
        candidate.fit(max_width);
    }
}
