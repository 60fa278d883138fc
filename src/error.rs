use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for translation-assistant operations
#[derive(Debug, Error)]
pub enum AssistError {
    /// No translation dictionaries found in the project
    #[error("No translation dictionaries found.\n\nSearched in: {searched_paths}\n\nTip: Check your project structure or verify translation JSON files exist")]
    NoDictionaries { searched_paths: String },

    /// Failed to parse a JSON dictionary file
    #[error("Failed to parse JSON dictionary {file}:\n{reason}\n\nTip: Verify the JSON syntax is correct")]
    JsonParse { file: PathBuf, reason: String },

    /// An add-key operation targeted a path that is already defined
    #[error("Translation key '{key}' already exists.\n\nTip: Pick a different key or edit the existing entry instead")]
    PathAlreadyExists { key: String },

    /// Failed to write a dictionary file back to disk
    #[error("Failed to write dictionary {file}:\n{reason}")]
    WriteFailed { file: PathBuf, reason: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic assistant error with context
    #[error("{0}")]
    Generic(String),
}

impl AssistError {
    /// Create a NoDictionaries error listing the probed locations
    pub fn no_dictionaries(paths: impl Into<String>) -> Self {
        Self::NoDictionaries {
            searched_paths: paths.into(),
        }
    }

    /// Create a JsonParse error from a file path and reason
    pub fn json_parse(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::JsonParse {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Create a PathAlreadyExists error for a dot-path
    pub fn path_already_exists(key: impl Into<String>) -> Self {
        Self::PathAlreadyExists { key: key.into() }
    }

    /// Create a WriteFailed error from a file path and reason
    pub fn write_failed(file: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::WriteFailed {
            file: file.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for AssistError
pub type Result<T> = std::result::Result<T, AssistError>;
