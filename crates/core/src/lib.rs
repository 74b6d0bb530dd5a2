//! Dynamic JSON values for dynjson
//!
//! This crate defines [`Node`], a single recursive value that can hold any
//! JSON document without a schema declared up front.
//!
//! ## Lazy Type Binding
//!
//! A fresh node is [`Kind::Unbound`]. The first accessor or mutator that
//! touches it fixes its kind for good:
//!
//! ```
//! use dynjson_core::{Kind, Node};
//!
//! let doc = Node::new();
//! doc.set_key("a", 1);          // binds to Map
//! assert_eq!(doc.kind(), Kind::Map);
//!
//! doc.append(2);                // Map is not List: ignored
//! assert_eq!(doc.len(), 1);
//! ```
//!
//! ## Two Error Styles
//!
//! - Plain accessors (`get`, `index`, `get_int`, ...) never fail. A kind
//!   mismatch or absent entry gives a zero value or `None`, and mutators
//!   become no-ops.
//! - Safe accessors (`safe_get`, `safe_index`) and conversions
//!   (`init_by_json`, `init_by_object`, `conv_to`) return [`Error`].
//!
//! ## Aliasing
//!
//! [`Node`] is a shared handle. Children returned by `get`/`index` alias
//! the tree, so writes through them are visible from the root:
//!
//! ```
//! use dynjson_core::Node;
//!
//! let m = Node::from_json(r#"{"a": "x"}"#).unwrap();
//! m.get("a").unwrap().set_string("y");
//! assert_eq!(m.get("a").unwrap().get_string(), "y");
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod kind;
pub mod map;
pub mod node;

mod convert;
mod list;
mod path;
mod scalar;

pub use error::{Error, Result};
pub use kind::Kind;
pub use map::NOT_A_MAP;
pub use node::Node;
