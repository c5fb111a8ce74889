//! Unified error types for the gallery data layer.
//!
//! Only the single-record fetch surfaces these to callers; list, aggregate and
//! counter operations log and absorb them.

use rmcp::model::{ErrorCode, ErrorData as McpError};
use tokio_rusqlite::rusqlite;

/// Unified error type for the gallery crates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., unknown sort mode).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// No website record exists for the given id.
    #[error("NOT_FOUND: {0}")]
    NotFound(String),

    /// Pagination cursor could not be decoded or does not match the query order.
    #[error("INVALID_CURSOR: {0}")]
    InvalidCursor(String),

    /// The document store rejected or failed a request.
    #[error("STORE_UNAVAILABLE: {0}")]
    StoreUnavailable(String),

    /// Database operation failed.
    #[error("STORE_ERROR: {0}")]
    Database(tokio_rusqlite::Error),

    /// Migration failed to apply.
    #[error("STORE_ERROR: migration failed: {0}")]
    MigrationFailed(String),

    /// Stored document payload could not be (de)serialized.
    #[error("STORE_ERROR: malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Seed file could not be read.
    #[error("SEED_ERROR: {0}")]
    Seed(String),
}

impl From<tokio_rusqlite::Error<Error>> for Error {
    fn from(err: tokio_rusqlite::Error<Error>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => connection_closed(),
            tokio_rusqlite::Error::Close(c) => Error::Database(tokio_rusqlite::Error::Close(c)),
            _ => connection_closed(),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for Error {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        match err {
            tokio_rusqlite::Error::ConnectionClosed => connection_closed(),
            other => Error::Database(other),
        }
    }
}

fn connection_closed() -> Error {
    Error::StoreUnavailable("database connection closed".to_string())
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(tokio_rusqlite::Error::Error(err))
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::InvalidCursor(msg) => (-32602, msg.clone()),
            Error::NotFound(id) => (-32001, format!("website not found: {id}")),
            Error::StoreUnavailable(msg) => (-32002, msg.clone()),
            Error::Database(e) => (-32002, e.to_string()),
            Error::MigrationFailed(msg) => (-32002, msg.clone()),
            Error::Payload(e) => (-32002, e.to_string()),
            Error::Seed(msg) => (-32003, msg.clone()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
