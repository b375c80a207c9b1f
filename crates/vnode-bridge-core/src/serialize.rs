//! JSON serialization of target trees
//!
//! Elements serialize to the object shape the target framework expects:
//! `{"type": .., "key": null, "props": {.., "children": ..}}`.

use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;

use crate::props::{PropValue, Props, CHILDREN_KEY};
use crate::target::{TargetElement, TargetNode};

/// Largest integer magnitude an f64 represents exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Convert a target tree into a `serde_json::Value`
pub fn to_json_value(node: &TargetNode) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(node)
}

/// Render a target tree as a pretty-printed JSON string
pub fn to_json_string(node: &TargetNode) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

/// Integral values as integers, non-finite values as null
fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !n.is_finite() {
        serializer.serialize_unit()
    } else if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Null => serializer.serialize_unit(),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            PropValue::Number(n) => serialize_number(*n, serializer),
            PropValue::String(s) => serializer.serialize_str(s),
            PropValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            PropValue::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for TargetNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TargetNode::Null => serializer.serialize_unit(),
            TargetNode::Text(text) => serializer.serialize_str(text),
            TargetNode::Number(n) => serialize_number(*n, serializer),
            TargetNode::Bool(b) => serializer.serialize_bool(*b),
            TargetNode::List(nodes) => {
                let mut seq = serializer.serialize_seq(Some(nodes.len()))?;
                for node in nodes {
                    seq.serialize_element(node)?;
                }
                seq.end()
            }
            TargetNode::Element(element) => element.serialize(serializer),
        }
    }
}

impl Serialize for TargetElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", &self.element_type)?;
        map.serialize_entry("key", &self.key)?;
        map.serialize_entry(
            "props",
            &PropsWithChildren {
                props: &self.props,
                children: &self.children,
            },
        )?;
        map.end()
    }
}

/// Attributes followed by the `children` entry
struct PropsWithChildren<'a> {
    props: &'a Props,
    children: &'a TargetNode,
}

impl Serialize for PropsWithChildren<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.props.len() + 1))?;
        for (key, value) in self.props.iter().filter(|(k, _)| *k != CHILDREN_KEY) {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(CHILDREN_KEY, self.children)?;
        map.end()
    }
}
