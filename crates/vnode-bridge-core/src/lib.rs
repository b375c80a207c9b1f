//! vnode-bridge-core - target node model and serialization
//!
//! This crate provides the output side of the conversion: the attribute
//! values shared with source trees, the `{ type, props, key }` element shape
//! expected by the target framework, conversion options, and JSON
//! serialization. It is used by `vnode-bridge`, which owns the source model
//! and the conversion walk.
//!
//! # Architecture
//!
//! ```text
//!                       ┌────────────────┐
//! SourceNode tree ────▶ │  vnode-bridge  │ ──▶ TargetNode tree ──▶ JSON
//!  (components,         │  (convert)     │      (this crate)
//!   host elements)      └────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use vnode_bridge_core::{props, to_json_value, TargetElement, TargetNode};
//!
//! let node = TargetNode::Element(TargetElement::with_children(
//!     "div",
//!     props([("id", "foo")]),
//!     vec![TargetNode::from("hello")],
//! ));
//!
//! let json = to_json_value(&node).unwrap();
//! assert_eq!(json["props"]["children"], "hello");
//! ```

mod options;
mod props;
mod serialize;
mod target;

pub use options::{ConvertOptions, FalsyLeaves};
pub use props::{props, PropValue, Props, CHILDREN_KEY};
pub use serialize::{to_json_string, to_json_value};
pub use target::{TargetElement, TargetNode};
