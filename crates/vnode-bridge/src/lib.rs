//! # vnode-bridge
//!
//! Convert JSX-style component trees into React-style virtual nodes.
//!
//! Source trees are built from host elements (markup tags), component
//! elements (render functions), fragments, lists and primitive leaves. The
//! converter renders every component, converts children depth-first and
//! emits `{ type, props, key }` elements the target framework can mount.
//!
//! ## Design
//!
//! - **Components are resolved eagerly**: a component never appears in the
//!   output, only what it renders
//! - **Single children collapse**: an element with exactly one child gets
//!   that child as `props.children`, otherwise a list
//! - **Shallow props**: nested prop values are shared with the source tree
//! - **No async**: deferred nodes fail with [`ConvertError::UnsupportedDeferredNode`]
//!
//! ## Example
//!
//! ```rust
//! use vnode_bridge::{Converter, Element, SourceNode};
//!
//! let converter = Converter::new();
//!
//! let mut div = Element::host("div").with_prop("id", "foo");
//! div.add_child("Hello World");
//!
//! let node = converter.convert(&SourceNode::from(div)).unwrap();
//! let element = node.as_element().unwrap();
//! assert_eq!(element.element_type, "div");
//! assert_eq!(element.children().as_text(), Some("Hello World"));
//! ```

mod convert;
pub mod node;
mod service;

pub use node::{Component, ComponentProps, Deferred, DeferredFuture, Element, SourceNode, Tag};
pub use service::Converter;
pub use vnode_bridge_core::{
    props, to_json_string, to_json_value, ConvertOptions, FalsyLeaves, PropValue, Props,
    TargetElement, TargetNode,
};

/// Error type for conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("asynchronous components are not supported")]
    UnsupportedDeferredNode,

    #[error("nesting depth exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Convert a source node with default options
pub fn convert(node: &SourceNode) -> Result<TargetNode> {
    Converter::new().convert(node)
}
