//! Pass-through wrappers around the JSON codec
//!
//! These carry no semantics of their own beyond what `serde_json` does; they
//! exist so callers of the dynamic value API have one place to reach for
//! static encode/decode as well.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Formatting options for [`marshal_indent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentStyle {
    /// Written at the start of every line after the first
    pub prefix: String,
    /// Written once per nesting level
    pub indent: String,
}

impl IndentStyle {
    /// Create a style from a prefix and a per-level indent
    pub fn new(prefix: impl Into<String>, indent: impl Into<String>) -> Self {
        IndentStyle {
            prefix: prefix.into(),
            indent: indent.into(),
        }
    }
}

impl Default for IndentStyle {
    /// No prefix, two-space indent
    fn default() -> Self {
        IndentStyle::new("", "  ")
    }
}

/// Encode `value` as compact JSON bytes.
pub fn marshal<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Encode `value` as indented JSON bytes.
///
/// ```
/// use dynjson_wire::{marshal_indent, IndentStyle};
///
/// let out = marshal_indent(&vec![1, 2], &IndentStyle::new("> ", "\t")).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "[\n> \t1,\n> \t2\n> ]");
/// ```
pub fn marshal_indent<T: Serialize + ?Sized>(value: &T, style: &IndentStyle) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(style.indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;

    if style.prefix.is_empty() {
        return Ok(out);
    }
    // Newlines inside strings are escaped, so every raw '\n' is a line break.
    let mut prefixed = Vec::with_capacity(out.len());
    for byte in out {
        prefixed.push(byte);
        if byte == b'\n' {
            prefixed.extend_from_slice(style.prefix.as_bytes());
        }
    }
    Ok(prefixed)
}

/// Decode JSON bytes into `T`.
pub fn unmarshal<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode JSON text into `T`.
pub fn unmarshal_string<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}
