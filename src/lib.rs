//! # dynjson
//!
//! Schema-less JSON values with lazy type binding.
//!
//! dynjson provides one recursive value type, [`Node`], that can hold any
//! JSON document and be read, mutated and navigated without declaring a
//! record shape ahead of time. It suits loosely structured or evolving
//! payloads: configuration blobs, RPC bodies, ad hoc records.
//!
//! ## Quick Start
//!
//! ```
//! use dynjson::prelude::*;
//!
//! // Parse a document
//! let doc = Node::from_json(r#"{"user": {"name": "ann", "id": "42"}}"#).unwrap();
//!
//! // Navigate and read
//! let name = doc.get_path(&["user", "name"]).unwrap().get_string();
//! assert_eq!(name, "ann");
//! assert_eq!(doc.get_path(&["user", "id"]).unwrap().get_int64_by_string(), 42);
//!
//! // Required fields
//! let (missing, ok) = doc.get("user").unwrap().confirm(&["name", "email"]);
//! assert!(!ok);
//! assert_eq!(missing, "email");
//!
//! // Mutate in place and write back out
//! doc.get("user").unwrap().set_key("active", true);
//! assert!(doc.to_json().contains(r#""active":true"#));
//! ```
//!
//! ## Crates
//!
//! - [`dynjson_core`]: the [`Node`] type, its accessors and conversions
//! - [`dynjson_wire`]: codec wrappers, numeric-string and base64 helpers
//!
//! ## Threading
//!
//! [`Node`] is a shared, mutable handle and is neither `Send` nor `Sync`.
//! Move data between threads as JSON text or `serde_json::Value`.

#![warn(missing_docs)]

mod error;

pub mod prelude;

// Re-export main entry points
pub use dynjson_core::{Kind, Node, NOT_A_MAP};
pub use error::{Error, Result};

// Re-export codec helpers
pub use dynjson_wire::{
    marshal, marshal_indent, unmarshal, unmarshal_string, Base64Fields, IndentStyle, TextNumbers,
};

// Re-export the member crates for their own error types
pub use dynjson_core;
pub use dynjson_wire;
