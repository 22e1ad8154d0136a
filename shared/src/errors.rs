//! Shared error types for the name suggestion system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Serialization failed: {message}")]
    SerializationError { message: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },

    #[error("Invalid request: {field} - {message}")]
    InvalidRequest { field: String, message: String },

    #[error("Invalid URL: {message}")]
    InvalidUrl { message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
