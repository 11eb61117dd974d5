//! Full flattening of expression trees

use crate::parex::ast::{Node, Tree};

impl Node {
    /// Expand this node into a flat leaf sequence
    ///
    /// A leaf expands to itself; a group expands to the in-order leaves of
    /// its fully flattened subtree.
    pub fn flattened(&self) -> Vec<Node> {
        match self {
            Node::Leaf(c) => vec![Node::Leaf(*c)],
            Node::Group(tree) => tree.flattened().nodes,
        }
    }
}

impl Tree {
    /// Collapse every group at every depth into its leaf sequence
    ///
    /// The result contains only leaves, in the left-to-right order of the
    /// original text. Idempotent: flattening a flat tree is a no-op.
    ///
    /// Uses an explicit worklist; nesting depth is bounded only by the
    /// input, so the walk must not consume call stack.
    pub fn flattened(&self) -> Tree {
        let mut leaves = Vec::new();
        let mut pending: Vec<&Node> = self.nodes.iter().rev().collect();
        while let Some(node) = pending.pop() {
            match node {
                Node::Leaf(c) => leaves.push(Node::Leaf(*c)),
                Node::Group(tree) => pending.extend(tree.nodes.iter().rev()),
            }
        }
        Tree::from_nodes(leaves)
    }
}
