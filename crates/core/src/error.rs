use thiserror::Error;

/// `file_description` of errors about the file holding the items.
pub const INPUT_FILE: &str = "input";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported input: expected text or a list of items, got {}", .0)]
    InputType(String),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Unknown file encoding: \"{}\"", .0)]
    UnknownEncoding(String),

    #[error("Unable to write to the terminal: {}", .0)]
    Render(std::io::Error),

    #[error("Clipboard error: {}", .0)]
    Clipboard(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    /// Whether the error came from reading the items to select from.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        match self {
            Error::Io {
                file_description, ..
            } => file_description == INPUT_FILE,
            Error::InputType(_) | Error::UnknownEncoding(_) | Error::Stdio(_) => true,
            _ => false,
        }
    }
}
