//! Codec boundary for dynjson
//!
//! This crate layers the thin helpers that sit on top of the core value
//! contract:
//!
//! - [`marshal`], [`marshal_indent`], [`unmarshal`], [`unmarshal_string`]:
//!   pass-through wrappers over `serde_json`
//! - [`TextNumbers`]: numbers carried as JSON strings
//! - [`Base64Fields`]: byte buffers carried as base64 strings
//!
//! ## Examples
//!
//! ```
//! use dynjson_core::Node;
//! use dynjson_wire::{Base64Fields, TextNumbers};
//!
//! let doc = Node::new();
//! doc.set_number_by_string("id", 12345_u64);
//! doc.set_bytes("blob", &[1, 2, 3]);
//!
//! assert_eq!(doc.get("id").unwrap().get_uint64_by_string(), 12345);
//! assert_eq!(doc.get_bytes("blob").unwrap(), vec![1, 2, 3]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod bytes;
mod codec;
mod error;
mod text;

pub use bytes::Base64Fields;
pub use codec::{marshal, marshal_indent, unmarshal, unmarshal_string, IndentStyle};
pub use error::{Result, WireError};
pub use text::TextNumbers;
