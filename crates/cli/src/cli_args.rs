//! Command-line argument parsing and settings resolution.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and merges the parsed flags with the optional settings file into the
//! options one session runs with.

use clap::Parser;
use pipesel_core::config::{
    ModeFlags, PromptConfig, PromptMode, Settings, DEFAULT_FILE_ENCODING, DEFAULT_SEPARATOR,
    NULL_SEPARATOR,
};

/// Command-line arguments for the pipesel CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use pipesel_cli::cli_args::Args;
///
/// let args = Args::parse_from(["pipesel", "-m", "items.txt"]);
/// assert!(args.multiple);
/// assert_eq!(args.path.as_deref(), Some("items.txt"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "pipesel",
    version,
    about = "Interactively pick items from piped or file input",
    disable_version_flag = true,
    term_width = 0 // Just to make testing across clap features easier
)]
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to a file whose items should be listed instead of stdin.
    pub path: Option<String>,

    /// Narrow the list down by typing.
    #[arg(long, short = 'a', action)]
    pub autocomplete: bool,

    /// Copy the selected item(s) to the clipboard.
    #[arg(long, short = 'c', action)]
    pub copy: bool,

    /// Print internal errors and debug logging to stderr.
    #[arg(long, short = 'd', action)]
    pub debug: bool,

    /// Item(s) selected when the prompt opens.
    ///
    /// Several items are separated by the default separator.
    #[arg(long, short = 'D')]
    pub default: Option<String>,

    /// Separator between the items of `--default`.
    ///
    /// Defaults to the item separator.
    #[arg(long, short = 'P')]
    pub default_separator: Option<String>,

    /// Encoding of the input file, `utf8` unless configured otherwise.
    #[arg(long, short = 'e')]
    pub file_encoding: Option<String>,

    /// Ask for free text instead of listing items.
    ///
    /// The first item, or `--default`, is used as the initial value.
    #[arg(long, short = 'i', action)]
    pub input: bool,

    /// Allow selecting multiple items.
    #[arg(long, short = 'm', action)]
    pub multiple: bool,

    /// Allow selecting multiple items, keeping the order they were selected in.
    #[arg(long, short = 'o', action)]
    pub ordered: bool,

    /// Message shown above the list.
    #[arg(long, short = 'M')]
    pub message: Option<String>,

    /// Use NUL as the separator; the output is not newline terminated.
    #[arg(long, short = '0', action)]
    pub null: bool,

    /// Print a path found in each selected item instead of the item itself.
    #[arg(long, short = 'p', action)]
    pub extract_path: bool,

    /// Separator between the input items and between the printed results.
    #[arg(long, short = 's')]
    pub separator: Option<String>,

    /// Number of items shown at once.
    #[arg(long = "size", short = 'S')]
    pub page_size: Option<usize>,

    /// Keep leading and trailing whitespace of the results.
    #[arg(long, short = 't', action)]
    pub no_trim: bool,

    /// Never wrap results containing spaces in quotes.
    #[arg(long, short = 'u', action)]
    pub unquoted: bool,

    /// Print version.
    #[arg(long, short = 'v', action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.pipesel/config.yml`.
    #[arg(long)]
    pub config_path: Option<String>,
}

/// Options of one session after merging flags, settings and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub prompt: PromptConfig,
    /// Splits the input and joins the output.
    pub separator: String,
    pub file_encoding: String,
    pub copy: bool,
    /// Whether the printed output ends with a newline.
    pub newline: bool,
}

impl Args {
    #[must_use]
    pub fn mode_flags(&self) -> ModeFlags {
        ModeFlags {
            input: self.input,
            ordered: self.ordered,
            multiple: self.multiple,
            autocomplete: self.autocomplete,
        }
    }

    /// Resolves every option, a flag winning over the settings file and the
    /// settings file winning over the built-in default.
    #[must_use]
    pub fn resolve(&self, settings: &Settings) -> RunOptions {
        let mode = PromptMode::from_flags(self.mode_flags())
            .or(settings.mode)
            .unwrap_or_default();

        let separator = if self.null {
            NULL_SEPARATOR.to_string()
        } else {
            first_of(&self.separator, &settings.separator)
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string())
        };

        let default_separator = first_of(&self.default_separator, &settings.default_separator)
            .unwrap_or_else(|| separator.clone());

        let prompt = PromptConfig {
            mode,
            message: first_of(&self.message, &settings.message)
                .unwrap_or_else(|| mode.default_message().to_string()),
            page_size: self.page_size.or(settings.page_size),
            default: self.default.clone(),
            default_separator,
            trim: !(self.no_trim || settings.no_trim.unwrap_or(false)),
            quote_if_whitespace: !(self.unquoted || settings.unquoted.unwrap_or(false)),
            extract_path: self.extract_path || settings.extract_path.unwrap_or(false),
        };

        RunOptions {
            prompt,
            separator,
            file_encoding: first_of(&self.file_encoding, &settings.file_encoding)
                .unwrap_or_else(|| DEFAULT_FILE_ENCODING.to_string()),
            copy: self.copy || settings.copy.unwrap_or(false),
            newline: !self.null,
        }
    }
}

fn first_of(flag: &Option<String>, setting: &Option<String>) -> Option<String> {
    flag.as_ref().or(setting.as_ref()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["pipesel"]);

        assert!(args.path.is_none());
        assert!(!args.autocomplete);
        assert!(!args.copy);
        assert!(!args.debug);
        assert!(args.default.is_none());
        assert!(!args.input);
        assert!(!args.multiple);
        assert!(!args.ordered);
        assert!(!args.null);
        assert!(args.page_size.is_none());
        assert!(args.config_path.is_none());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "pipesel", "-a", "-c", "-d", "-D", "foo", "-P", ",", "-e", "latin1", "-i", "-m",
            "-o", "-M", "Pick one", "-0", "-p", "-s", ";", "-S", "7", "-t", "-u", "list.txt",
        ]);

        assert!(args.autocomplete);
        assert!(args.copy);
        assert!(args.debug);
        assert_eq!(args.default, Some("foo".to_string()));
        assert_eq!(args.default_separator, Some(",".to_string()));
        assert_eq!(args.file_encoding, Some("latin1".to_string()));
        assert!(args.input);
        assert!(args.multiple);
        assert!(args.ordered);
        assert_eq!(args.message, Some("Pick one".to_string()));
        assert!(args.null);
        assert!(args.extract_path);
        assert_eq!(args.separator, Some(";".to_string()));
        assert_eq!(args.page_size, Some(7));
        assert!(args.no_trim);
        assert!(args.unquoted);
        assert_eq!(args.path, Some("list.txt".to_string()));
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "pipesel",
            "--autocomplete",
            "--size",
            "3",
            "--config-path",
            "/custom/config.yml",
            "--separator",
            ":",
            "--extract-path",
        ]);

        assert!(args.autocomplete);
        assert_eq!(args.page_size, Some(3));
        assert_eq!(args.config_path, Some("/custom/config.yml".to_string()));
        assert_eq!(args.separator, Some(":".to_string()));
        assert!(args.extract_path);
    }

    #[test]
    fn test_version_flag_exits_early() {
        let error = Args::try_parse_from(["pipesel", "-v"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_resolve_defaults() {
        let options = Args::parse_from(["pipesel"]).resolve(&Settings::default());

        assert_eq!(options.prompt, PromptConfig::default());
        assert_eq!(options.separator, DEFAULT_SEPARATOR);
        assert_eq!(options.file_encoding, "utf8");
        assert!(!options.copy);
        assert!(options.newline);
    }

    #[test]
    fn test_resolve_mode_priority() {
        let options = Args::parse_from(["pipesel", "-a", "-m", "-o"]).resolve(&Settings::default());
        assert_eq!(options.prompt.mode, PromptMode::Ordered);
        assert_eq!(options.prompt.message, "Select multiple items in order:");

        let options = Args::parse_from(["pipesel", "-o", "-i"]).resolve(&Settings::default());
        assert_eq!(options.prompt.mode, PromptMode::Input);
    }

    #[test]
    fn test_resolve_flags_override_settings() {
        let settings = Settings {
            separator: Some(",".to_string()),
            mode: Some(PromptMode::Multiple),
            message: Some("From settings".to_string()),
            page_size: Some(4),
            no_trim: Some(true),
            ..Settings::default()
        };

        let from_settings = Args::parse_from(["pipesel"]).resolve(&settings);
        assert_eq!(from_settings.prompt.mode, PromptMode::Multiple);
        assert_eq!(from_settings.prompt.message, "From settings");
        assert_eq!(from_settings.prompt.page_size, Some(4));
        assert!(!from_settings.prompt.trim);
        assert_eq!(from_settings.separator, ",");
        assert_eq!(from_settings.prompt.default_separator, ",");

        let from_flags = Args::parse_from(["pipesel", "-a", "-s", ";", "-M", "Flag", "-S", "9"])
            .resolve(&settings);
        assert_eq!(from_flags.prompt.mode, PromptMode::Autocomplete);
        assert_eq!(from_flags.prompt.message, "Flag");
        assert_eq!(from_flags.prompt.page_size, Some(9));
        assert_eq!(from_flags.separator, ";");
    }

    #[test]
    fn test_resolve_null_separator() {
        let options = Args::parse_from(["pipesel", "-0", "-s", ","]).resolve(&Settings::default());
        assert_eq!(options.separator, "\0");
        assert_eq!(options.prompt.default_separator, "\0");
        assert!(!options.newline);
    }

    #[test]
    fn test_resolve_default_separator() {
        let options = Args::parse_from(["pipesel", "-m", "-D", "foo|bar", "-P", "|"])
            .resolve(&Settings::default());
        assert_eq!(options.prompt.default_values(), ["foo", "bar"]);
    }
}
