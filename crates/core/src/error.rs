//! Error types for the dynamic value tree
//!
//! Only the explicit-error operations (`safe_get`, `safe_index`,
//! `init_by_json`, `init_by_object`, `conv_to`) return these. The plain
//! accessors never fail; they fall back to zero values instead.

use crate::kind::Kind;
use thiserror::Error;

/// Errors surfaced by the explicit-error accessors and conversions.
#[derive(Debug, Error)]
pub enum Error {
    /// The node is bound to a different kind than the operation needs
    #[error("wrong type: expected {expected}, found {actual}")]
    WrongType {
        /// Kind the operation requires
        expected: Kind,
        /// Kind the node is bound to
        actual: Kind,
    },

    /// Map lookup found no entry for the key
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// List lookup was outside `0..len`
    #[error("index {index} out of bounds (len={len})")]
    IndexOutOfBounds {
        /// Requested position
        index: usize,
        /// Length of the list at lookup time
        len: usize,
    },

    /// JSON text could not be decoded, or a value could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// NaN and the infinities have no JSON representation
    #[error("cannot encode non-finite number {0} as JSON")]
    NonFiniteNumber(f64),
}

impl Error {
    /// Check if this is a wrong-container / wrong-kind error.
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Error::WrongType { .. })
    }

    /// Check if this is an absent key or index.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound(_) | Error::IndexOutOfBounds { .. })
    }

    /// Check if this is a malformed-input or encoding failure.
    pub fn is_json(&self) -> bool {
        matches!(self, Error::Json(_) | Error::NonFiniteNumber(_))
    }
}

/// Result type for dynamic value operations.
pub type Result<T> = std::result::Result<T, Error>;
