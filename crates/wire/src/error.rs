//! Error types for the codec boundary

use thiserror::Error;

/// Errors from the codec wrappers and the byte helpers
#[derive(Debug, Error)]
pub enum WireError {
    /// The codec failed to encode or decode
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored text is not valid standard base64
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Result type for wire operations
pub type Result<T> = std::result::Result<T, WireError>;
