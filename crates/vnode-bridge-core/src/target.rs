//! Target virtual-node model
//!
//! These are the nodes handed to the target framework: primitive leaves,
//! lists, and `{ type, props, key }` elements.

use crate::props::{PropValue, Props, CHILDREN_KEY};

/// A converted node
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TargetNode {
    /// Renders nothing
    #[default]
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Sibling nodes
    List(Vec<TargetNode>),
    Element(TargetElement),
}

/// A structured target element
#[derive(Debug, Clone, PartialEq)]
pub struct TargetElement {
    /// Tag identifier, e.g. "div"
    pub element_type: String,

    /// Attributes, never containing a `children` entry
    pub props: Props,

    /// Value of `props.children`
    pub children: Box<TargetNode>,

    /// Identity hint, always `None` for converted nodes
    pub key: Option<String>,
}

impl TargetElement {
    /// Create an element without attributes and with an empty children list
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            props: Props::new(),
            children: Box::new(TargetNode::List(Vec::new())),
            key: None,
        }
    }

    /// Create an element, collapsing `children` to the single node when there
    /// is exactly one and keeping the list otherwise.
    pub fn with_children(
        element_type: impl Into<String>,
        mut props: Props,
        mut children: Vec<TargetNode>,
    ) -> Self {
        props.shift_remove(CHILDREN_KEY);

        let children = if children.len() == 1 {
            children.pop().unwrap_or_default()
        } else {
            TargetNode::List(children)
        };

        Self {
            element_type: element_type.into(),
            props,
            children: Box::new(children),
            key: None,
        }
    }

    /// Get an attribute value by name
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    pub fn children(&self) -> &TargetNode {
        &self.children
    }
}

impl TargetNode {
    pub fn is_null(&self) -> bool {
        matches!(self, TargetNode::Null)
    }

    pub fn as_element(&self) -> Option<&TargetElement> {
        match self {
            TargetNode::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[TargetNode]> {
        match self {
            TargetNode::List(nodes) => Some(nodes),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TargetNode::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<TargetElement> for TargetNode {
    fn from(element: TargetElement) -> Self {
        TargetNode::Element(element)
    }
}

impl From<&str> for TargetNode {
    fn from(value: &str) -> Self {
        TargetNode::Text(value.to_string())
    }
}

impl From<f64> for TargetNode {
    fn from(value: f64) -> Self {
        TargetNode::Number(value)
    }
}

impl From<bool> for TargetNode {
    fn from(value: bool) -> Self {
        TargetNode::Bool(value)
    }
}

impl From<Vec<TargetNode>> for TargetNode {
    fn from(nodes: Vec<TargetNode>) -> Self {
        TargetNode::List(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::props;

    #[test]
    fn test_single_child_collapses() {
        let el = TargetElement::with_children("div", Props::new(), vec!["foo".into()]);
        assert_eq!(el.children(), &TargetNode::Text("foo".to_string()));
    }

    #[test]
    fn test_no_children_is_empty_list() {
        let el = TargetElement::with_children("div", Props::new(), Vec::new());
        assert_eq!(el.children().as_list(), Some(&[][..]));
    }

    #[test]
    fn test_many_children_stay_a_list() {
        let el = TargetElement::with_children(
            "div",
            Props::new(),
            vec!["foo".into(), 42.0.into(), "bar".into()],
        );
        assert_eq!(el.children().as_list().map(|nodes| nodes.len()), Some(3));
    }

    #[test]
    fn test_children_prop_is_dropped() {
        let el = TargetElement::with_children(
            "div",
            props([("id", "foo"), ("children", "stale")]),
            vec!["fresh".into()],
        );
        assert!(el.prop("children").is_none());
        assert_eq!(el.prop("id").and_then(PropValue::as_str), Some("foo"));
        assert_eq!(el.children().as_text(), Some("fresh"));
    }

    #[test]
    fn test_key_is_none() {
        assert_eq!(TargetElement::new("span").key, None);
    }
}
