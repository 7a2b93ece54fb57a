//! Error types for yang2cpp-core

use thiserror::Error;

/// Result type alias for yang2cpp-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in yang2cpp-core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Malformed YIN document
    #[error("invalid YIN document: {message}")]
    Xml {
        /// Description of what went wrong, with position when known
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn xml(message: impl Into<String>) -> Self {
        Error::Xml {
            message: message.into(),
        }
    }
}
