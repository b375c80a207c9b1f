//! Convert a source tree to target nodes
//!
//! A single depth-first walk. Components are rendered and replaced by what
//! they return, fragments and lists become target lists, and host elements
//! become `{ type, props, key }` elements with their children converted.

use tracing::{debug, trace};
use vnode_bridge_core::{ConvertOptions, FalsyLeaves, TargetElement, TargetNode};

use crate::node::{ComponentProps, Element, SourceNode, Tag};
use crate::{ConvertError, Result};

/// Convert a source node to a target node
pub fn convert(node: &SourceNode, options: &ConvertOptions) -> Result<TargetNode> {
    convert_node(node, &Context::new(options))
}

/// Convert a sequence of source nodes element-wise
pub fn convert_all(nodes: &[SourceNode], options: &ConvertOptions) -> Result<Vec<TargetNode>> {
    convert_list(nodes, &Context::new(options))
}

/// Conversion context (tracks nesting depth)
#[derive(Clone, Copy)]
struct Context<'a> {
    options: &'a ConvertOptions,
    depth: usize,
}

impl<'a> Context<'a> {
    fn new(options: &'a ConvertOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Context for the nodes one level below this one
    fn child(&self) -> Self {
        Self {
            options: self.options,
            depth: self.depth + 1,
        }
    }

    fn check_depth(&self) -> Result<()> {
        match self.options.max_depth {
            Some(limit) if self.depth > limit => Err(ConvertError::DepthLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    fn renders_nothing(&self, node: &SourceNode) -> bool {
        match self.options.falsy_leaves {
            FalsyLeaves::Keep => node.is_absent(),
            FalsyLeaves::Suppress => node.is_falsy(),
        }
    }
}

fn convert_node(node: &SourceNode, ctx: &Context) -> Result<TargetNode> {
    ctx.check_depth()?;

    if ctx.renders_nothing(node) {
        return Ok(TargetNode::Null);
    }

    match node {
        SourceNode::Absent => Ok(TargetNode::Null),
        SourceNode::Text(text) => Ok(TargetNode::Text(text.clone())),
        SourceNode::Number(n) => Ok(TargetNode::Number(*n)),
        SourceNode::Bool(b) => Ok(TargetNode::Bool(*b)),
        SourceNode::List(nodes) => convert_list(nodes, ctx).map(TargetNode::List),
        SourceNode::Deferred(_) => {
            debug!(depth = ctx.depth, "rejecting deferred node");
            Err(ConvertError::UnsupportedDeferredNode)
        }
        SourceNode::Element(element) => convert_element(element, ctx),
    }
}

fn convert_list(nodes: &[SourceNode], ctx: &Context) -> Result<Vec<TargetNode>> {
    let ctx = ctx.child();
    nodes.iter().map(|node| convert_node(node, &ctx)).collect()
}

fn convert_element(element: &Element, ctx: &Context) -> Result<TargetNode> {
    match &element.tag {
        Tag::Component(component) => {
            trace!(component = component.name(), depth = ctx.depth, "rendering component");
            let rendered = component.render(ComponentProps::new(
                element.props.clone(),
                element.children.clone(),
            ));
            // A fragment result is tagless, so only its children are emitted
            convert_node(&rendered, &ctx.child())
        }

        Tag::Fragment => convert_list(&element.children, ctx).map(TargetNode::List),

        Tag::Host(tag) => {
            let children = convert_list(&element.children, ctx)?;
            Ok(TargetElement::with_children(tag.as_str(), element.props.clone(), children).into())
        }
    }
}
