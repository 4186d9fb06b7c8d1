//! Prompt configuration and settings resolution.
//!
//! A [`PromptConfig`] is built once from command-line flags and the optional
//! settings file, then stays fixed for the whole session.

use serde::Deserialize;

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.pipesel/config.yml";

/// Item separator used when none is configured.
#[cfg(windows)]
pub const DEFAULT_SEPARATOR: &str = "\r\n";
/// Item separator used when none is configured.
#[cfg(not(windows))]
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Separator used by `--null`.
pub const NULL_SEPARATOR: &str = "\0";

/// Encoding used for input files when none is configured.
pub const DEFAULT_FILE_ENCODING: &str = "utf8";

/// The five ways of presenting the candidates.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    /// One of N.
    #[default]
    Single,
    /// Checkbox, results in list order.
    Multiple,
    /// Checkbox, results in the order they were checked.
    Ordered,
    /// One of N, narrowed down by typing.
    Autocomplete,
    /// Free text, seeded with a default.
    Input,
}

/// Mode flags as a caller may set them, possibly several at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ModeFlags {
    pub input: bool,
    pub ordered: bool,
    pub multiple: bool,
    pub autocomplete: bool,
}

impl PromptMode {
    /// Picks the mode from a set of flags.
    ///
    /// When several flags are set the first in the order
    /// input, ordered, multiple, autocomplete wins. Returns `None` when no
    /// flag is set.
    #[must_use]
    pub fn from_flags(flags: ModeFlags) -> Option<Self> {
        if flags.input {
            Some(PromptMode::Input)
        } else if flags.ordered {
            Some(PromptMode::Ordered)
        } else if flags.multiple {
            Some(PromptMode::Multiple)
        } else if flags.autocomplete {
            Some(PromptMode::Autocomplete)
        } else {
            None
        }
    }

    #[must_use]
    pub fn default_message(self) -> &'static str {
        match self {
            PromptMode::Single | PromptMode::Autocomplete => "Select an item:",
            PromptMode::Multiple => "Select multiple items:",
            PromptMode::Ordered => "Select multiple items in order:",
            PromptMode::Input => "Enter a value:",
        }
    }
}

/// Everything the selection engine needs to know about one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub mode: PromptMode,
    pub message: String,
    /// Rows of candidates shown at once; the terminal height decides when unset.
    pub page_size: Option<usize>,
    /// Default selection, split on `default_separator` for checkbox modes.
    pub default: Option<String>,
    pub default_separator: String,
    pub trim: bool,
    pub quote_if_whitespace: bool,
    pub extract_path: bool,
}

impl PromptConfig {
    #[must_use]
    pub fn new(mode: PromptMode) -> Self {
        Self {
            mode,
            message: mode.default_message().to_string(),
            page_size: None,
            default: None,
            default_separator: DEFAULT_SEPARATOR.to_string(),
            trim: true,
            quote_if_whitespace: true,
            extract_path: false,
        }
    }

    /// The configured default selection as individual values.
    #[must_use]
    pub fn default_values(&self) -> Vec<String> {
        match &self.default {
            None => Vec::new(),
            Some(default) if self.default_separator.is_empty() => vec![default.clone()],
            Some(default) => default
                .split(self.default_separator.as_str())
                .filter(|value| !value.is_empty())
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self::new(PromptMode::default())
    }
}

/// Contents of the optional settings file.
///
/// Every key is optional; command-line flags take precedence.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub separator: Option<String>,
    pub default_separator: Option<String>,
    pub page_size: Option<usize>,
    pub mode: Option<PromptMode>,
    pub message: Option<String>,
    pub file_encoding: Option<String>,
    pub no_trim: Option<bool>,
    pub unquoted: Option<bool>,
    pub copy: Option<bool>,
    pub extract_path: Option<bool>,
}

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use pipesel_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Expands `~` in a user supplied input path.
pub fn expand_input_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
