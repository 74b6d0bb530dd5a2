//! Dynamic Value Comprehensive Test Suite
//!
//! Tests organized by functionality:
//! - lazy_binding: first-use kind binding and mismatch silence
//! - map_ops: get/set/remove/has/confirm on maps
//! - list_ops: index/set/append/remove on lists
//! - path_ops: nested navigation
//! - scalars: numeric widening and narrowing
//! - conversion: JSON text, native objects, typed records
//! - helpers: numeric strings, base64 bytes, codec wrappers
//! - roundtrip: decode/encode property tests

use dynjson::prelude::*;

mod conversion;
mod map_ops;
mod path_ops;
mod roundtrip;
mod scalars;

/// Parse a fixture document, panicking on malformed test input.
pub fn doc(text: &str) -> Node {
    Node::from_json(text).expect("fixture must be valid JSON")
}
