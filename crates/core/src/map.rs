//! Map accessors
//!
//! Every operation here starts with `ensure(Map)`: an unbound node becomes
//! an empty map, a node of another kind makes the operation a no-op.

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::node::Node;
use std::collections::HashMap;

/// Reported by [`Node::confirm`] when the receiver cannot be a map.
pub const NOT_A_MAP: &str = "not-map";

impl Node {
    /// Child under `key`, or `None` if absent or the node is not a map.
    ///
    /// The returned node aliases the child in place.
    pub fn get(&self, key: &str) -> Option<Node> {
        self.with_map(|entries| entries.get(key).cloned()).flatten()
    }

    /// Like [`Node::get`], but tells "not a map" apart from "key absent".
    ///
    /// # Errors
    ///
    /// - [`Error::WrongType`] if the node is bound to another kind
    /// - [`Error::KeyNotFound`] if the map has no entry for `key`
    pub fn safe_get(&self, key: &str) -> Result<Node> {
        self.with_map(|entries| entries.get(key).cloned())
            .ok_or_else(|| Error::WrongType {
                expected: Kind::Map,
                actual: self.kind(),
            })?
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Insert or overwrite `key`.
    ///
    /// Raw values are wrapped in a new node; a [`Node`] is stored by
    /// reference, not copied.
    pub fn set_key(&self, key: impl Into<String>, value: impl Into<Node>) {
        let value = value.into();
        self.with_map(|entries| entries.insert(key.into(), value));
    }

    /// Delete `key` if present.
    pub fn remove_key(&self, key: &str) {
        self.with_map(|entries| entries.remove(key));
    }

    /// Check if the map has an entry for `key`. False if not a map.
    pub fn has_key(&self, key: &str) -> bool {
        self.with_map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }

    /// Required-field check.
    ///
    /// Returns the missing keys joined with `", "` and whether all were
    /// present. A node that cannot be a map yields `("not-map", false)`.
    ///
    /// ```
    /// use dynjson_core::Node;
    ///
    /// let doc = Node::new();
    /// doc.set_key("a", 1);
    /// doc.set_key("b", 2);
    /// assert_eq!(doc.confirm(&["a", "b", "c"]), ("c".to_string(), false));
    /// assert_eq!(doc.confirm(&["a"]), (String::new(), true));
    /// ```
    pub fn confirm<K: AsRef<str>>(&self, keys: &[K]) -> (String, bool) {
        let missing = self.with_map(|entries| {
            keys.iter()
                .map(AsRef::as_ref)
                .filter(|k| !entries.contains_key(*k))
                .collect::<Vec<_>>()
                .join(", ")
        });
        match missing {
            None => (NOT_A_MAP.to_string(), false),
            Some(missing) if missing.is_empty() => (missing, true),
            Some(missing) => (missing, false),
        }
    }

    /// Snapshot of the entries. Values alias the children in place.
    ///
    /// Empty if the node is not a map.
    pub fn map(&self) -> HashMap<String, Node> {
        self.with_map(|entries| entries.clone()).unwrap_or_default()
    }

    /// Keys of the map, unordered. Empty if the node is not a map.
    pub fn keys(&self) -> Vec<String> {
        self.with_map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }
}
