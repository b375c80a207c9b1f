//! Converter - the main entry point for source to target conversion.

use tracing::instrument;

use crate::convert::{convert, convert_all};
use crate::node::SourceNode;
use crate::Result;
use vnode_bridge_core::{ConvertOptions, TargetNode};

/// The main service for converting source trees to target nodes
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a new Converter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Converter with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert a source tree to a target tree
    #[instrument(level = "debug", skip_all)]
    pub fn convert(&self, node: &SourceNode) -> Result<TargetNode> {
        convert(node, &self.options)
    }

    /// Convert a sequence of source nodes, preserving length and order
    #[instrument(level = "debug", skip_all, fields(len = nodes.len()))]
    pub fn convert_all(&self, nodes: &[SourceNode]) -> Result<Vec<TargetNode>> {
        convert_all(nodes, &self.options)
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }
}
