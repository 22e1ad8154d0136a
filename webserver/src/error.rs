//! WebServer-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("Invalid request parameters: {details}")]
    InvalidParams { details: String },

    #[error("Name generation failed: {message}")]
    Generator { message: String },

    #[error("Provider request failed: {message}")]
    Upstream { message: String },

    #[error("Provider response carried no content")]
    EmptyResponse,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Shared component error")]
    Shared(#[from] SharedError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebServerError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        WebServerError::Config { message: message.into() }
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
