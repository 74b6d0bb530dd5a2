//! Conversion between dynamic values, native values and JSON text
//!
//! `serde_json` is the codec at both boundaries. Its generic tree,
//! [`serde_json::Value`], is the "native object" form:
//!
//! | Native                         | Node kind |
//! |--------------------------------|-----------|
//! | `null` / `None`                | Unbound   |
//! | `bool`                         | Bool      |
//! | any integer or float           | Number    |
//! | `String` / `&str`              | String    |
//! | array / `Vec<T>`               | List      |
//! | object / `HashMap<String, T>`  | Map       |
//!
//! Anything else that implements `Serialize` is first encoded by the codec
//! and then materialized from the resulting tree.
//!
//! ## Number Output
//!
//! Integral numbers within ±2^53 are emitted as JSON integers (`7`, not
//! `7.0`); everything else uses the codec's float formatting. NaN and the
//! infinities have no JSON form: [`Node::to_object`] maps them to `null`,
//! the strict paths ([`Node::try_to_object`], [`Node::to_json`],
//! [`Node::conv_to`]) reject them.

use crate::error::{Error, Result};
use crate::node::{Node, Payload};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Largest magnitude up to which every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn number_to_json(n: f64) -> Option<Number> {
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        Some(Number::from(n as i64))
    } else {
        Number::from_f64(n)
    }
}

impl Node {
    /// Materialize a node from JSON text.
    ///
    /// Returns `None` if the text is not well-formed JSON, so that "document
    /// failed to parse" stays distinguishable from a field of the wrong shape.
    pub fn from_json(text: &str) -> Option<Node> {
        let node = Node::new();
        match node.init_by_json(text) {
            Ok(()) => Some(node),
            Err(e) => {
                debug!(error = %e, "JSON text did not decode into a value");
                None
            }
        }
    }

    /// Materialize a node from any serializable value.
    ///
    /// Returns `None` if the codec cannot encode `obj` (for example a map
    /// with non-string keys).
    pub fn from_object<T: Serialize + ?Sized>(obj: &T) -> Option<Node> {
        let node = Node::new();
        match node.init_by_object(obj) {
            Ok(()) => Some(node),
            Err(e) => {
                debug!(error = %e, "object did not convert into a value");
                None
            }
        }
    }

    /// Replace this node's contents with the decoded JSON text.
    ///
    /// Unlike the accessors this ignores the current binding: the node takes
    /// whatever kind the document has.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] if the text is not well-formed JSON. The node is left
    /// untouched in that case.
    pub fn init_by_json(&self, text: &str) -> Result<()> {
        let tree: JsonValue = serde_json::from_str(text)?;
        self.init_by_value(tree);
        Ok(())
    }

    /// Replace this node's contents with `obj`, encoded through the codec.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] if the codec cannot encode `obj`.
    pub fn init_by_object<T: Serialize + ?Sized>(&self, obj: &T) -> Result<()> {
        trace!("encoding object through codec");
        let tree = serde_json::to_value(obj)?;
        self.init_by_value(tree);
        Ok(())
    }

    /// Replace this node's contents with a directly convertible value.
    ///
    /// A [`Node`] argument is copied shallowly: this node takes its kind and
    /// a reference to its payload. A list or map is then the same container
    /// seen through two nodes, so `set_key`/`set_index`/`append` on either
    /// shows up in both. Use [`Node::deep_clone`] for an independent copy.
    pub fn init_by_value(&self, value: impl Into<Node>) {
        let source = value.into();
        let payload = source.payload().clone();
        self.replace(payload);
    }

    /// Project the tree onto the codec's generic value.
    ///
    /// Unbound nodes become `null`, as do NaN and infinite numbers.
    pub fn to_object(&self) -> JsonValue {
        match &*self.payload() {
            Payload::Unbound => JsonValue::Null,
            Payload::Bool(b) => JsonValue::Bool(*b),
            Payload::String(s) => JsonValue::String(s.clone()),
            Payload::Number(n) => number_to_json(*n).map_or(JsonValue::Null, JsonValue::Number),
            Payload::List(items) => {
                JsonValue::Array(items.borrow().iter().map(Node::to_object).collect())
            }
            Payload::Map(entries) => JsonValue::Object(
                entries
                    .borrow()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_object()))
                    .collect(),
            ),
        }
    }

    /// Like [`Node::to_object`], but fails on numbers JSON cannot carry.
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteNumber`] for NaN or ±infinity anywhere in the tree.
    pub fn try_to_object(&self) -> Result<JsonValue> {
        let value = match &*self.payload() {
            Payload::Unbound => JsonValue::Null,
            Payload::Bool(b) => JsonValue::Bool(*b),
            Payload::String(s) => JsonValue::String(s.clone()),
            Payload::Number(n) => {
                JsonValue::Number(number_to_json(*n).ok_or(Error::NonFiniteNumber(*n))?)
            }
            Payload::List(items) => JsonValue::Array(
                items
                    .borrow()
                    .iter()
                    .map(Node::try_to_object)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Payload::Map(entries) => {
                let entries = entries.borrow();
                let mut object = JsonMap::with_capacity(entries.len());
                for (k, v) in entries.iter() {
                    object.insert(k.clone(), v.try_to_object()?);
                }
                JsonValue::Object(object)
            }
        };
        Ok(value)
    }

    /// Encode the tree as compact JSON text.
    ///
    /// Returns an empty string if the tree cannot be encoded.
    pub fn to_json(&self) -> String {
        let encoded = self
            .try_to_object()
            .and_then(|tree| serde_json::to_string(&tree).map_err(Error::from));
        match encoded {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "value did not encode as JSON");
                String::new()
            }
        }
    }

    /// Decode the tree into a statically typed record.
    ///
    /// Goes through JSON text, so `T` sees exactly what [`Node::to_json`]
    /// would produce.
    ///
    /// ```
    /// use dynjson_core::Node;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Point {
    ///     x: i32,
    ///     y: i32,
    /// }
    ///
    /// let node = Node::from_json(r#"{"x": 1, "y": 2}"#).unwrap();
    /// let point: Point = node.conv_to().unwrap();
    /// assert_eq!((point.x, point.y), (1, 2));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteNumber`] if the tree cannot be encoded, or
    /// [`Error::Json`] if the text does not fit `T`.
    pub fn conv_to<T: DeserializeOwned>(&self) -> Result<T> {
        let text = serde_json::to_string(&self.try_to_object()?)?;
        Ok(serde_json::from_str(&text)?)
    }
}

// ============================================================================
// Native -> Node
// ============================================================================

impl From<JsonValue> for Node {
    fn from(v: JsonValue) -> Self {
        let payload = match v {
            JsonValue::Null => Payload::Unbound,
            JsonValue::Bool(b) => Payload::Bool(b),
            JsonValue::Number(n) => Payload::Number(n.as_f64().unwrap_or(0.0)),
            JsonValue::String(s) => Payload::String(s),
            JsonValue::Array(items) => Payload::list(items.into_iter().map(Node::from).collect()),
            JsonValue::Object(entries) => Payload::map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Node::from(v)))
                    .collect(),
            ),
        };
        Node::from_payload(payload)
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::from_payload(Payload::Bool(v))
    }
}

impl From<i32> for Node {
    fn from(v: i32) -> Self {
        Node::from_payload(Payload::Number(v as f64))
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Node::from_payload(Payload::Number(v as f64))
    }
}

impl From<isize> for Node {
    fn from(v: isize) -> Self {
        Node::from_payload(Payload::Number(v as f64))
    }
}

impl From<u32> for Node {
    fn from(v: u32) -> Self {
        Node::from_payload(Payload::Number(v as f64))
    }
}

impl From<u64> for Node {
    fn from(v: u64) -> Self {
        Node::from_payload(Payload::Number(v as f64))
    }
}

impl From<usize> for Node {
    fn from(v: usize) -> Self {
        Node::from_payload(Payload::Number(v as f64))
    }
}

impl From<f32> for Node {
    fn from(v: f32) -> Self {
        Node::from_payload(Payload::Number(v as f64))
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::from_payload(Payload::Number(v))
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::from_payload(Payload::String(v))
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::from_payload(Payload::String(v.to_string()))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(v: Option<T>) -> Self {
        v.map_or_else(Node::new, Into::into)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(v: Vec<T>) -> Self {
        Node::from_payload(Payload::list(v.into_iter().map(Into::into).collect()))
    }
}

impl<T: Into<Node>> From<HashMap<String, T>> for Node {
    fn from(v: HashMap<String, T>) -> Self {
        Node::from_payload(Payload::map(
            v.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }
}

impl<T: Into<Node>> From<BTreeMap<String, T>> for Node {
    fn from(v: BTreeMap<String, T>) -> Self {
        Node::from_payload(Payload::map(
            v.into_iter().map(|(k, v)| (k, v.into())).collect(),
        ))
    }
}

// ============================================================================
// Codec hooks: a Node can sit inside any serde-derived record
// ============================================================================

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let tree = self
            .try_to_object()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        tree.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Node::from)
    }
}

impl FromStr for Node {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let node = Node::new();
        node.init_by_json(s)?;
        Ok(node)
    }
}

/// Compact JSON; empty if the tree holds a non-finite number.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}
