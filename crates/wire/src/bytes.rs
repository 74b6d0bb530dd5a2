//! Binary fields stored as base64 strings
//!
//! JSON has no byte type, so buffers travel as standard (padded) base64
//! text under a map key.

use crate::error::Result;
use base64::Engine;
use dynjson_core::Node;

/// Byte-buffer access on map nodes.
pub trait Base64Fields {
    /// Store `bytes` as base64 text under `key`.
    fn set_bytes(&self, key: impl Into<String>, bytes: &[u8]);

    /// Decode the base64 text under `key`.
    ///
    /// An absent key or non-string entry reads as `""` and decodes to an
    /// empty buffer, following the silent accessors.
    ///
    /// # Errors
    ///
    /// [`WireError::InvalidBase64`](crate::WireError::InvalidBase64) if the
    /// stored text is not valid base64.
    fn get_bytes(&self, key: &str) -> Result<Vec<u8>>;
}

impl Base64Fields for Node {
    fn set_bytes(&self, key: impl Into<String>, bytes: &[u8]) {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        self.set_key(key, encoded);
    }

    fn get_bytes(&self, key: &str) -> Result<Vec<u8>> {
        let text = self.get(key).map(|n| n.get_string()).unwrap_or_default();
        Ok(base64::engine::general_purpose::STANDARD.decode(text)?)
    }
}
