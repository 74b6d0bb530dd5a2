//! Numbers carried as JSON strings
//!
//! Some payloads quote their numbers (`{"id": "9007199254740993"}`) to keep
//! them out of the float slot. These helpers read such strings with the
//! standard parsers and write numbers back in their canonical text form.

use dynjson_core::Node;
use std::fmt::Display;
use std::str::FromStr;

/// Numeric views over string-bound nodes.
///
/// Each getter requires the node to be (or become) a string, then parses it.
/// A kind mismatch or malformed text both give zero.
pub trait TextNumbers {
    /// Parse the string as `T`, or `T::default()` on any failure.
    fn parse_string<T: FromStr + Default>(&self) -> T;

    /// Store `number`'s `Display` text under `key` of a map node.
    fn set_number_by_string(&self, key: impl Into<String>, number: impl Display);

    /// The string parsed as `f32`. Text beyond the `f32` range gives 0.
    fn get_float32_by_string(&self) -> f32 {
        self.parse_string()
    }

    /// The string parsed as `f64`. Text beyond the `f64` range gives 0.
    fn get_float64_by_string(&self) -> f64 {
        self.parse_string()
    }

    /// The string parsed as `i32`.
    fn get_int32_by_string(&self) -> i32 {
        self.parse_string()
    }

    /// The string parsed as `isize`.
    fn get_int_by_string(&self) -> isize {
        self.parse_string()
    }

    /// The string parsed as `i64`.
    fn get_int64_by_string(&self) -> i64 {
        self.parse_string()
    }

    /// The string parsed as `u32`.
    ///
    /// Parsed as unsigned directly, so `"-1"` gives 0 rather than wrapping
    /// to `u32::MAX`.
    fn get_uint32_by_string(&self) -> u32 {
        self.parse_string()
    }

    /// The string parsed as `usize`.
    fn get_uint_by_string(&self) -> usize {
        self.parse_string()
    }

    /// The string parsed as `u64`.
    fn get_uint64_by_string(&self) -> u64 {
        self.parse_string()
    }
}

impl TextNumbers for Node {
    // A non-string node reads as "", which no numeric parser accepts.
    fn parse_string<T: FromStr + Default>(&self) -> T {
        self.get_string().parse().unwrap_or_default()
    }

    fn set_number_by_string(&self, key: impl Into<String>, number: impl Display) {
        self.set_key(key, number.to_string());
    }

    fn get_float32_by_string(&self) -> f32 {
        let text = self.get_string();
        match text.parse::<f32>() {
            Ok(n) if n.is_finite() || names_non_finite(&text) => n,
            _ => 0.0,
        }
    }

    fn get_float64_by_string(&self) -> f64 {
        let text = self.get_string();
        match text.parse::<f64>() {
            Ok(n) if n.is_finite() || names_non_finite(&text) => n,
            _ => 0.0,
        }
    }
}

/// Check for the `inf`/`infinity`/`nan` spellings, any case, optional sign.
///
/// Overflowing digits also parse as infinity; only these literals may.
fn names_non_finite(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|name| unsigned.eq_ignore_ascii_case(name))
}
