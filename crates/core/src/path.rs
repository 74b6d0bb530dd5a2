//! Path navigation over nested maps

use crate::node::Node;

impl Node {
    /// Follow `path` through nested maps with [`Node::get`].
    ///
    /// Returns `None` for an empty path, or as soon as one segment is absent
    /// or lands on something that is not a map. Intermediate unbound nodes
    /// are bound to maps along the way, exactly as `get` would.
    ///
    /// ```
    /// use dynjson_core::Node;
    ///
    /// let doc = Node::from_json(r#"{"a": {"b": {"c": 5}}}"#).unwrap();
    /// assert_eq!(doc.get_path(&["a", "b", "c"]).unwrap().get_float64(), 5.0);
    /// assert!(doc.get_path(&["a", "z"]).is_none());
    /// ```
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<Node> {
        let (first, rest) = path.split_first()?;
        let mut cursor = self.get(first.as_ref())?;
        for segment in rest {
            cursor = cursor.get(segment.as_ref())?;
        }
        Some(cursor)
    }
}
