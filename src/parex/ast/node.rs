//! Tree node type definitions and trait implementations
//!
//! This module defines the two node kinds of a parsed expression — single
//! characters and nested groups — and the ordered tree that holds them.
//! Trees are plain value types: every transform returns a new tree, nothing
//! is shared or mutated in place, and equality is structural.
//!
//! Rendering is the `Display` implementation: a leaf renders as its
//! character, a group as `(` + inner tree + `)`. For balanced input this is
//! the exact inverse of parsing.

use serde::Serialize;
use std::fmt;

/// A single element of an expression tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    /// One non-structural character
    Leaf(char),
    /// A nested subtree from one matched parenthesis pair
    Group(Tree),
}

/// An ordered sequence of nodes; order is the left-to-right reading order
/// of the original text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Node {
    /// Node kind as a static label, used by the treeviz formatter
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Leaf(_) => "leaf",
            Node::Group(_) => "group",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group(_))
    }

    pub fn as_group(&self) -> Option<&Tree> {
        match self {
            Node::Leaf(_) => None,
            Node::Group(tree) => Some(tree),
        }
    }
}

impl Tree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn iter_groups(&self) -> impl Iterator<Item = &Tree> {
        self.nodes.iter().filter_map(|node| node.as_group())
    }

    /// Count of leaf characters at all depths
    ///
    /// Walks with an explicit worklist, like every traversal in this crate:
    /// nesting depth is bounded only by the input, so it must not consume
    /// call stack.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&Node> = self.nodes.iter().collect();
        while let Some(node) = pending.pop() {
            match node {
                Node::Leaf(_) => count += 1,
                Node::Group(tree) => pending.extend(tree.nodes.iter()),
            }
        }
        count
    }

    /// True when no group remains at any depth
    pub fn is_flat(&self) -> bool {
        self.nodes.iter().all(|node| node.is_leaf())
    }

    /// Serialize the tree back to its parenthesized string form
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<Node> for Tree {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(c) => write!(f, "{}", c),
            // Delegates to the tree renderer, which walks iteratively.
            Node::Group(tree) => write!(f, "({})", tree),
        }
    }
}

/// Step on the renderer's stack: a node still to emit, or the closing
/// parenthesis of a group already opened
enum RenderStep<'a> {
    Emit(&'a Node),
    CloseGroup,
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut steps: Vec<RenderStep> = self.nodes.iter().rev().map(RenderStep::Emit).collect();
        while let Some(step) = steps.pop() {
            match step {
                RenderStep::Emit(Node::Leaf(c)) => write!(f, "{}", c)?,
                RenderStep::Emit(Node::Group(tree)) => {
                    write!(f, "(")?;
                    steps.push(RenderStep::CloseGroup);
                    steps.extend(tree.nodes.iter().rev().map(RenderStep::Emit));
                }
                RenderStep::CloseGroup => write!(f, ")")?,
            }
        }
        Ok(())
    }
}
