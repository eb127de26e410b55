//! Error types for the conversion boundary.
//!
//! The engine itself is total: malformed markup degrades to documented
//! defaults and never errors. [`ConvertError`] covers only the ingestion
//! boundary where an input tree is deserialized from JSON.

use thiserror::Error;

/// Result type for fallible conversion-boundary operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur at the conversion boundary.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input tree serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
