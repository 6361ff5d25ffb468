//! Session cache error types

use thiserror::Error;

/// Errors reading or writing the session cache
#[derive(Error, Debug)]
pub enum SessionError {
    /// Backing key-value store rejected the operation
    #[error("Cache error: {0}")]
    Cache(String),

    /// Cached entry could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Serialization(err.to_string())
    }
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
