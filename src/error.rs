//! Unified error type for dynjson.
//!
//! This wraps the member crates' errors so callers mixing value accessors
//! and codec helpers can use one `Result`.

use thiserror::Error;

/// All dynjson errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Key or index absent
    #[error("not found: {0}")]
    NotFound(String),

    /// Node bound to a different kind than the operation needs
    #[error("wrong type: expected {expected}, got {actual}")]
    WrongType {
        /// Expected kind
        expected: String,
        /// Actual kind found
        actual: String,
    },

    /// Malformed JSON text, or a value the codec could not encode
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Stored text is not valid base64
    #[error("invalid base64: {0}")]
    InvalidBase64(String),
}

/// Result type for dynjson operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a wrong-type error.
    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Error::WrongType { .. })
    }

    /// Check if the input or output could not go through the codec.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization(_) | Error::InvalidBase64(_))
    }
}

// Convert from core value errors
impl From<dynjson_core::Error> for Error {
    fn from(e: dynjson_core::Error) -> Self {
        use dynjson_core::Error as CoreError;
        match e {
            CoreError::WrongType { expected, actual } => Error::WrongType {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
            CoreError::KeyNotFound(key) => Error::NotFound(format!("key {:?}", key)),
            CoreError::IndexOutOfBounds { index, len } => {
                Error::NotFound(format!("index {} (len {})", index, len))
            }
            CoreError::Json(e) => Error::Serialization(e.to_string()),
            CoreError::NonFiniteNumber(n) => {
                Error::Serialization(format!("non-finite number {}", n))
            }
        }
    }
}

// Convert from wire errors
impl From<dynjson_wire::WireError> for Error {
    fn from(e: dynjson_wire::WireError) -> Self {
        use dynjson_wire::WireError;
        match e {
            WireError::Json(e) => Error::Serialization(e.to_string()),
            WireError::InvalidBase64(e) => Error::InvalidBase64(e.to_string()),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
