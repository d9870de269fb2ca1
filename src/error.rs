//! Error types for the engine.
//!
//! Every error here is local: a load failure falls back to an empty document
//! and is reported through the event stream, never propagated as a panic.

use thiserror::Error;

/// Errors that can occur while loading or exporting documents.
#[derive(Error, Debug)]
pub enum PadError {
    /// The starting content could not be parsed as a snapshot.
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// The snapshot parsed but carries a version this engine does not speak.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations.
pub type PadResult<T> = Result<T, PadError>;
