use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A scalar property value of a previewed node.
///
/// RDF literals are coerced into the native type their datatype calls for;
/// anything that is not numeric or boolean ends up as a string.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Integer(i64),
    Double(f64),
    Boolean(bool),
    String(String),
}

impl From<i64> for PropertyValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for PropertyValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for PropertyValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for PropertyValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => value.fmt(f),
            Self::Double(value) => value.fmt(f),
            Self::Boolean(value) => value.fmt(f),
            Self::String(value) => value.fmt(f),
        }
    }
}

/// A node of the previewed graph.
///
/// The label set always contains `Resource` and the property map always
/// contains `uri`, the resource's own URI.
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualNode {
    /// The node's labels.
    pub labels: BTreeSet<String>,
    /// The node's properties.
    pub properties: HashMap<String, PropertyValue>,
}

/// A relationship of the previewed graph.
///
/// Endpoints reference nodes by URI, the keys of [`GraphPreview::nodes`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VirtualRelationship {
    /// URI of the start node.
    pub start: String,
    /// URI of the end node.
    pub end: String,
    /// The relationship type, a shortened predicate IRI.
    pub rel_type: String,
}

/// The materialized preview of one import run.
///
/// Nothing in here is persisted; the caller inspects and discards it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphPreview {
    /// All previewed nodes, keyed by the resource URI.
    pub nodes: HashMap<String, VirtualNode>,
    /// All previewed relationships, in statement arrival order.
    pub relationships: Vec<VirtualRelationship>,
}
