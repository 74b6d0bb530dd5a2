//! Kind tags for dynamic values
//!
//! A node's kind starts as [`Kind::Unbound`] and is fixed by the first
//! accessor or mutator that touches it. After that it never changes.

use std::fmt;

/// The six kinds a dynamic value can take.
///
/// ## Numbers
///
/// There is a single `Number` kind. Every integer width and both float
/// widths are stored as one `f64`, so integers beyond ±2^53 lose precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Not bound yet; also what JSON `null` materializes as
    #[default]
    Unbound,
    /// Boolean true or false
    Bool,
    /// UTF-8 string
    String,
    /// 64-bit IEEE-754 float
    Number,
    /// Ordered sequence of child values
    List,
    /// String-keyed map of child values
    Map,
}

impl Kind {
    /// All kinds, in tag order.
    pub const ALL: [Kind; 6] = [
        Kind::Unbound,
        Kind::Bool,
        Kind::String,
        Kind::Number,
        Kind::List,
        Kind::Map,
    ];

    /// Returns the kind name as a string (for error messages)
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Unbound => "Unbound",
            Kind::Bool => "Bool",
            Kind::String => "String",
            Kind::Number => "Number",
            Kind::List => "List",
            Kind::Map => "Map",
        }
    }

    /// Check if this kind has not been bound yet
    pub fn is_unbound(&self) -> bool {
        matches!(self, Kind::Unbound)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
