//! Testing utilities for tree assertions
//!
//! Unit tests build expected trees with the `leaf`/`group`/`tree` helpers
//! instead of spelling out `Node::Group(Tree::from_nodes(...))` chains, and
//! check transform results through `assert_render` so failures show the
//! rendered string forms side by side.

use crate::parex::ast::{Node, Tree};

/// Build a leaf node
pub fn leaf(c: char) -> Node {
    Node::Leaf(c)
}

/// Build a group node from child nodes
pub fn group(nodes: Vec<Node>) -> Node {
    Node::Group(Tree::from_nodes(nodes))
}

/// Build a tree from top-level nodes
pub fn tree(nodes: Vec<Node>) -> Tree {
    Tree::from_nodes(nodes)
}

/// Assert that a tree renders to the expected string form
pub fn assert_render(tree: &Tree, expected: &str) {
    let rendered = tree.render();
    assert_eq!(
        rendered, expected,
        "tree rendered as {:?}, expected {:?}",
        rendered, expected
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_match_parser_output() {
        let built = tree(vec![group(vec![leaf('A'), leaf('B')]), leaf('C')]);
        assert_eq!(built, crate::parex::parser::parse("(AB)C"));
    }

    #[test]
    fn test_assert_render() {
        assert_render(&tree(vec![leaf('X')]), "X");
    }
}
