//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using ImportError.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors that can occur while reading a word list.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid word list JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word list must be a JSON array of entries")]
    NotAnArray,
}
