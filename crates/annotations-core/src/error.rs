//! Error types for the public annotations API.

use thiserror::Error;

/// Result type alias using the annotations Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for annotation retrieval operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Graph store query failed or reported an error
    #[error("Store error: {0}")]
    Store(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
