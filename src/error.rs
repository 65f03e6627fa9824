//! Error types for the Wordwalk library.
//!
//! All errors are represented by the [`WordwalkError`] enum, which provides
//! detailed information about what went wrong. Operations that can fail
//! return the crate-wide [`Result`] alias.

use std::io;

use thiserror::Error;

/// The main error type for Wordwalk operations.
///
/// This enum represents all possible errors that can occur in the library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum WordwalkError {
    /// I/O errors (file operations, stream reads/writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Graph-related errors
    #[error("Graph error: {0}")]
    Graph(String),

    /// Serialized-record parse errors (wrong field count, bad weight, etc.)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Corpus ingestion errors (malformed ngram lines, etc.)
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// Walk generation errors
    #[error("Walk error: {0}")]
    Walk(String),

    /// Thread join errors
    #[error("Thread join error: {0}")]
    ThreadJoinError(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with WordwalkError.
pub type Result<T> = std::result::Result<T, WordwalkError>;

impl WordwalkError {
    /// Create a new graph error.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        WordwalkError::Graph(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        WordwalkError::Parse(msg.into())
    }

    /// Create a new ingest error.
    pub fn ingest<S: Into<String>>(msg: S) -> Self {
        WordwalkError::Ingest(msg.into())
    }

    /// Create a new walk error.
    pub fn walk<S: Into<String>>(msg: S) -> Self {
        WordwalkError::Walk(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordwalkError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordwalkError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
