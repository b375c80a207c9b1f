//! Attribute values shared by source and target nodes.
//!
//! Nested arrays and objects are reference-counted, so copying a [`Props`]
//! mapping is shallow: the copy points at the same nested allocations as the
//! original.

use std::sync::Arc;

use indexmap::IndexMap;

/// Insertion-ordered attribute mapping
pub type Props = IndexMap<String, PropValue>;

/// The reserved props key holding an element's children
pub const CHILDREN_KEY: &str = "children";

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Shared array value
    Array(Arc<Vec<PropValue>>),
    /// Shared object value
    Object(Arc<IndexMap<String, PropValue>>),
}

impl PropValue {
    /// Build an object value from key/value pairs
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<PropValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        PropValue::Object(Arc::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Build an array value
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<PropValue>,
        I: IntoIterator<Item = V>,
    {
        PropValue::Array(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value.into())
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Number(value as f64)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropValue::Null, Into::into)
    }
}

/// Build a [`Props`] mapping from key/value pairs
pub fn props<K, V, I>(entries: I) -> Props
where
    K: Into<String>,
    V: Into<PropValue>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_keeps_insertion_order() {
        let value = PropValue::object([("b", 1), ("a", 2)]);
        let PropValue::Object(map) = value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_clone_shares_nested_values() {
        let original = props([("baz", PropValue::object([("hello", "world")]))]);
        let copy = original.clone();

        match (&original["baz"], &copy["baz"]) {
            (PropValue::Object(a), PropValue::Object(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected objects"),
        }
    }

    #[test]
    fn test_scalar_accessors() {
        assert_eq!(PropValue::from(true).as_bool(), Some(true));
        assert_eq!(PropValue::from(42).as_f64(), Some(42.0));
        assert_eq!(PropValue::from(1.5).as_f64(), Some(1.5));
        assert_eq!(PropValue::from("x").as_bool(), None);
        assert_eq!(PropValue::from(false).as_f64(), None);
        assert!(PropValue::Null.as_str().is_none());
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(PropValue::from(None::<&str>), PropValue::Null);
        assert_eq!(PropValue::from(Some("x")).as_str(), Some("x"));
    }
}
