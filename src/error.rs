//! Error types for theme tooling

use thiserror::Error;

/// Result type for archive and configuration operations
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Archive and configuration errors
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Source is not a directory: {0}")]
    SourceNotDirectory(String),

    #[error("Compression level {0} is out of range (expected 0-9)")]
    InvalidCompressionLevel(i64),

    #[error("File name is not valid UTF-8: {0}")]
    InvalidEntryName(String),

    #[error("Archive verification failed: {0}")]
    VerificationFailed(String),

    #[error("Config file already exists: {0}")]
    ConfigExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Outcome of a failed schema extraction or parse.
///
/// `NotFound` and `Parse` describe the template content; `System` covers
/// everything that went wrong before the content could be inspected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("no schema block found")]
    NotFound,

    #[error("{message}")]
    Parse {
        message: String,
        /// 1-based line within the extracted block
        line: usize,
        context: Option<String>,
    },

    #[error("{message}")]
    System { message: String },
}

impl SchemaError {
    pub fn system(err: impl std::fmt::Display) -> Self {
        SchemaError::System {
            message: err.to_string(),
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, SchemaError::System { .. })
    }
}
