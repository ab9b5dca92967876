//! GraphViz export of binary tree shapes for visual debugging.
//!
//! Nodes are numbered positionally: the root is `node1` and the children of `nodeP` are
//! `node2P` and `node2P+1`. The output is deterministic for a given tree shape.
//!
//! # Examples
//! ```
//! use ordered_collections::avl_tree::AvlSet;
//! use ordered_collections::GraphvizExport;
//!
//! let mut set = AvlSet::new();
//! set.insert(2);
//! set.insert(1);
//! let dot = set.graphviz().unwrap();
//! assert!(dot.contains("node1 [label=\"2\"];\nnode1 -> node2;\nnode2 [label=\"1\"];\n"));
//! ```

use crate::error::{Error, Result};
use std::fmt::Display;

/// Read-only view of a binary tree node consumed by the exporter.
pub trait GraphvizNode {
    type Key: Display;

    fn key(&self) -> &Self::Key;

    fn left(&self) -> Option<&Self>;

    fn right(&self) -> Option<&Self>;

    /// The cached height of the node, if the tree maintains one.
    fn height(&self) -> Option<i32> {
        None
    }
}

/// Trait for containers that can describe their shape as a GraphViz `digraph`.
pub trait GraphvizExport {
    /// Renders the container using the given configuration.
    fn graphviz_with(&self, config: &GraphvizConfig) -> Result<String>;

    /// Renders the container using the default configuration.
    fn graphviz(&self) -> Result<String> {
        self.graphviz_with(&GraphvizConfig::default())
    }
}

/// Header attributes and labelling options for the exported graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphvizConfig {
    pub dpi: u32,
    pub node_sep: f32,
    pub rank_sep: f32,
    pub margin: f32,
    /// Appends the cached height to each label as `key-height` when the tree maintains heights.
    pub show_height: bool,
}

impl GraphvizConfig {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn node_sep(mut self, node_sep: f32) -> Self {
        self.node_sep = node_sep;
        self
    }

    pub fn rank_sep(mut self, rank_sep: f32) -> Self {
        self.rank_sep = rank_sep;
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn show_height(mut self, show_height: bool) -> Self {
        self.show_height = show_height;
        self
    }
}

impl Default for GraphvizConfig {
    fn default() -> Self {
        GraphvizConfig {
            dpi: 70,
            node_sep: 0.3,
            rank_sep: 0.2,
            margin: 0.1,
            show_height: false,
        }
    }
}

/// Renders the tree rooted at `root` as a GraphViz `digraph`.
///
/// Fails with `ExportTooDeep` if positional identifiers of the deepest node do not fit in a
/// `u128`.
pub fn render<N>(root: Option<&N>, config: &GraphvizConfig) -> Result<String>
where
    N: GraphvizNode,
{
    let mut repr = String::new();
    repr.push_str("digraph G {\n");
    repr.push_str(&format!("graph [ dpi = {} ]\n", config.dpi));
    repr.push_str(&format!("nodesep={};\n", config.node_sep));
    repr.push_str(&format!("ranksep={};\n", config.rank_sep));
    repr.push_str(&format!("margin={};\n", config.margin));
    repr.push_str("node [shape=circle];\n");
    repr.push_str("edge [arrowsize=0.8];\n");

    if let Some(node) = root {
        render_node(&mut repr, node, 1, 0, config)?;
    }

    repr.push('}');
    Ok(repr)
}

fn render_node<N>(
    repr: &mut String,
    node: &N,
    base: u128,
    depth: usize,
    config: &GraphvizConfig,
) -> Result<()>
where
    N: GraphvizNode,
{
    match (config.show_height, node.height()) {
        (true, Some(height)) => {
            repr.push_str(&format!("node{} [label=\"{}-{}\"];\n", base, node.key(), height))
        },
        _ => repr.push_str(&format!("node{} [label=\"{}\"];\n", base, node.key())),
    }

    let children = [(node.left(), 0), (node.right(), 1)];
    for (child, offset) in children.iter() {
        if let Some(child) = child {
            let id = base
                .checked_mul(2)
                .and_then(|id| id.checked_add(*offset))
                .ok_or(Error::ExportTooDeep { depth: depth + 1 })?;
            repr.push_str(&format!("node{} -> node{};\n", base, id));
            render_node(repr, *child, id, depth + 1, config)?;
        }
    }

    Ok(())
}
