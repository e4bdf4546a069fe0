//! Error types for calls to the schema service

use thiserror::Error;

/// The one failure class the console recognizes: a remote call that did not
/// produce a usable answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Connection refused, timeout, or any other transport failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("Schema service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Dictionary does not exist
    #[error("Dictionary not found: '{0}'")]
    NotFound(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
