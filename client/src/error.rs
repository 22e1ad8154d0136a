//! Client-specific error types

use shared::SharedError;
use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Stream failed: {message}")]
    Stream { message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid form: {message}")]
    InvalidForm { message: String },

    #[error("Failed to import meanings from {path}: {message}")]
    FileImport { path: String, message: String },

    #[error("Clipboard write failed: {message}")]
    Clipboard { message: String },

    #[error("Shared component error")]
    Shared(#[from] SharedError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
