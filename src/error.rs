// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LensError>;

/// Errors raised at the crate's I/O boundaries.
///
/// Normalization itself never fails: missing fields resolve to defaults and
/// malformed sections degrade to a raw-text fallback. These variants cover
/// loading records, talking to the backend, and writing exports.
#[derive(Error, Debug)]
pub enum LensError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Backend request failed: {0}")]
    Http(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Operation cancelled")]
    Cancelled,
}
