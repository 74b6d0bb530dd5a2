//! Convenient imports for dynjson.
//!
//! This module re-exports the most commonly used types and helper traits so
//! you can get started with a single import:
//!
//! ```
//! use dynjson::prelude::*;
//!
//! let doc = Node::new();
//! doc.set_bytes("blob", &[1, 2, 3]);
//! assert_eq!(doc.get_bytes("blob").unwrap(), vec![1, 2, 3]);
//! ```

// Value type
pub use crate::{Kind, Node};

// Error handling
pub use crate::error::{Error, Result};

// Helper traits
pub use dynjson_wire::{Base64Fields, TextNumbers};

// Codec wrappers
pub use dynjson_wire::{marshal, marshal_indent, unmarshal, unmarshal_string, IndentStyle};

// Re-export serde_json for convenience
pub use serde_json::json;
