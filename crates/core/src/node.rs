//! The dynamic value node
//!
//! [`Node`] is a handle onto one position of a JSON-shaped tree. The handle
//! is reference counted: cloning it does NOT copy the tree, it aliases the
//! same node. Accessors that return children (`get`, `index`, `get_path`)
//! hand back such aliases, so writing through a returned child writes into
//! the parent's tree.
//!
//! ## Lazy Type Binding
//!
//! A node starts [`Kind::Unbound`]. Every accessor first calls `ensure` with
//! the kind it needs:
//!
//! - `Unbound` binds to the requested kind, payload set to its zero value
//! - any other kind succeeds only if it equals the requested kind
//!
//! The bind is irreversible. A mismatch makes plain accessors return zero
//! values and mutators do nothing.
//!
//! ## Thread Safety
//!
//! `Node` uses `Rc<RefCell<..>>` internally and is **not** `Send` or `Sync`.
//! Callers that need to share a tree across threads must convert it
//! (`to_json`, `to_object`) and rebuild it on the other side.

use crate::kind::Kind;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Shared list storage.
pub(crate) type Items = Rc<RefCell<Vec<Node>>>;

/// Shared map storage.
pub(crate) type Entries = Rc<RefCell<HashMap<String, Node>>>;

/// Storage for one node. The variant is the node's kind.
///
/// Containers sit behind their own handle, so cloning a payload shares the
/// list or map itself rather than copying it.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum Payload {
    #[default]
    Unbound,
    Bool(bool),
    String(String),
    Number(f64),
    List(Items),
    Map(Entries),
}

impl Payload {
    pub(crate) fn list(items: Vec<Node>) -> Payload {
        Payload::List(Rc::new(RefCell::new(items)))
    }

    pub(crate) fn map(entries: HashMap<String, Node>) -> Payload {
        Payload::Map(Rc::new(RefCell::new(entries)))
    }

    /// Zero value of a kind: `false`, `""`, `0.0`, empty list, empty map.
    pub(crate) fn zero(kind: Kind) -> Payload {
        match kind {
            Kind::Unbound => Payload::Unbound,
            Kind::Bool => Payload::Bool(false),
            Kind::String => Payload::String(String::new()),
            Kind::Number => Payload::Number(0.0),
            Kind::List => Payload::list(Vec::new()),
            Kind::Map => Payload::map(HashMap::new()),
        }
    }

    pub(crate) fn kind(&self) -> Kind {
        match self {
            Payload::Unbound => Kind::Unbound,
            Payload::Bool(_) => Kind::Bool,
            Payload::String(_) => Kind::String,
            Payload::Number(_) => Kind::Number,
            Payload::List(_) => Kind::List,
            Payload::Map(_) => Kind::Map,
        }
    }

    /// Bind `Unbound` to `kind`, or check an existing binding.
    ///
    /// Returns true iff the payload is of `kind` afterwards.
    pub(crate) fn ensure(&mut self, kind: Kind) -> bool {
        if let Payload::Unbound = self {
            if kind != Kind::Unbound {
                trace!(kind = kind.name(), "binding unbound value");
                *self = Payload::zero(kind);
            }
            return true;
        }
        self.kind() == kind
    }
}

/// A dynamic JSON value.
///
/// # Examples
///
/// ```
/// use dynjson_core::{Kind, Node};
///
/// let root = Node::new();
/// root.set_key("a", 1);
/// assert_eq!(root.kind(), Kind::Map);
/// assert_eq!(root.get("a").map(|a| a.get_int()), Some(1));
/// ```
#[derive(Clone, Default)]
pub struct Node {
    inner: Rc<RefCell<Payload>>,
}

impl Node {
    /// Create an unbound node
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node already bound to `kind`, holding the kind's zero value.
    ///
    /// `Node::with_kind(Kind::Unbound)` is the same as [`Node::new`].
    pub fn with_kind(kind: Kind) -> Self {
        Self::from_payload(Payload::zero(kind))
    }

    pub(crate) fn from_payload(payload: Payload) -> Self {
        Node {
            inner: Rc::new(RefCell::new(payload)),
        }
    }

    /// Current kind. Never binds.
    pub fn kind(&self) -> Kind {
        self.inner.borrow().kind()
    }

    /// Check if the node has not been bound yet
    pub fn is_unbound(&self) -> bool {
        self.kind().is_unbound()
    }

    /// Number of entries of a list or map; `0` for every other kind.
    ///
    /// Never binds.
    pub fn len(&self) -> usize {
        match &*self.inner.borrow() {
            Payload::List(items) => items.borrow().len(),
            Payload::Map(entries) => entries.borrow().len(),
            _ => 0,
        }
    }

    /// Check if [`Node::len`] is zero
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if both handles alias the same node
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Copy the whole subtree into fresh nodes that share nothing with `self`.
    pub fn deep_clone(&self) -> Node {
        let payload = match &*self.inner.borrow() {
            Payload::List(items) => {
                Payload::list(items.borrow().iter().map(Node::deep_clone).collect())
            }
            Payload::Map(entries) => Payload::map(
                entries
                    .borrow()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.deep_clone()))
                    .collect(),
            ),
            scalar => scalar.clone(),
        };
        Node::from_payload(payload)
    }

    pub(crate) fn ensure(&self, kind: Kind) -> bool {
        self.inner.borrow_mut().ensure(kind)
    }

    pub(crate) fn payload(&self) -> Ref<'_, Payload> {
        self.inner.borrow()
    }

    pub(crate) fn payload_mut(&self) -> RefMut<'_, Payload> {
        self.inner.borrow_mut()
    }

    /// Overwrite the payload wholesale, bypassing the bind check.
    ///
    /// Only the `init_by_*` family uses this; it re-materializes a node.
    pub(crate) fn replace(&self, payload: Payload) {
        *self.inner.borrow_mut() = payload;
    }

    /// Run `f` on the map entries after `ensure(Map)`.
    ///
    /// The node's own cell is released before `f` runs; only the shared
    /// map is borrowed.
    pub(crate) fn with_map<R>(&self, f: impl FnOnce(&mut HashMap<String, Node>) -> R) -> Option<R> {
        let entries = {
            let mut payload = self.payload_mut();
            if !payload.ensure(Kind::Map) {
                return None;
            }
            match &*payload {
                Payload::Map(entries) => Rc::clone(entries),
                _ => return None,
            }
        };
        let mut guard = entries.borrow_mut();
        let out = f(&mut guard);
        Some(out)
    }

    /// Run `f` on the list items after `ensure(List)`.
    pub(crate) fn with_list<R>(&self, f: impl FnOnce(&mut Vec<Node>) -> R) -> Option<R> {
        let items = {
            let mut payload = self.payload_mut();
            if !payload.ensure(Kind::List) {
                return None;
            }
            match &*payload {
                Payload::List(items) => Rc::clone(items),
                _ => return None,
            }
        };
        let mut guard = items.borrow_mut();
        let out = f(&mut guard);
        Some(out)
    }
}

/// Deep structural equality. Two handles onto the same node are always equal.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        *self.payload() == *other.payload()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.payload() {
            Payload::Unbound => f.write_str("Unbound"),
            Payload::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Payload::String(s) => f.debug_tuple("String").field(s).finish(),
            Payload::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Payload::List(items) => f.debug_list().entries(items.borrow().iter()).finish(),
            Payload::Map(entries) => f.debug_map().entries(entries.borrow().iter()).finish(),
        }
    }
}
