//! List accessors
//!
//! Every operation here starts with `ensure(List)`. All positions are
//! checked against `0 <= id < len`; out-of-range reads give `None`, and
//! out-of-range writes and removals do nothing.

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::node::Node;

impl Node {
    /// Element at `id`, or `None` if out of range or the node is not a list.
    ///
    /// The returned node aliases the element in place.
    pub fn index(&self, id: usize) -> Option<Node> {
        self.with_list(|items| items.get(id).cloned()).flatten()
    }

    /// Like [`Node::index`], but tells "not a list" apart from "out of range".
    ///
    /// # Errors
    ///
    /// - [`Error::WrongType`] if the node is bound to another kind
    /// - [`Error::IndexOutOfBounds`] if `id >= len`
    pub fn safe_index(&self, id: usize) -> Result<Node> {
        self.with_list(|items| {
            items.get(id).cloned().ok_or(Error::IndexOutOfBounds {
                index: id,
                len: items.len(),
            })
        })
        .ok_or_else(|| Error::WrongType {
            expected: Kind::List,
            actual: self.kind(),
        })?
    }

    /// Overwrite element `id`. No-op if `id >= len`.
    pub fn set_index(&self, id: usize, value: impl Into<Node>) {
        let value = value.into();
        self.with_list(|items| {
            if let Some(slot) = items.get_mut(id) {
                *slot = value;
            }
        });
    }

    /// Push to the end. Raw values are wrapped, nodes stored by reference.
    pub fn append(&self, value: impl Into<Node>) {
        let value = value.into();
        self.with_list(|items| items.push(value));
    }

    /// Remove element `id`, keeping the order of the rest. No-op if out of range.
    pub fn remove_id(&self, id: usize) {
        self.with_list(|items| {
            if id < items.len() {
                items.remove(id);
            }
        });
    }

    /// Snapshot of the elements. Each aliases the element in place.
    ///
    /// Empty if the node is not a list.
    pub fn list(&self) -> Vec<Node> {
        self.with_list(|items| items.clone()).unwrap_or_default()
    }
}
