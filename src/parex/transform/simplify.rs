//! One-layer, left-biased collapse of expression trees
//!
//! `simplified` is deliberately asymmetric. The first top-level node, if it
//! is a group, is fully flattened and spliced into the top-level sequence in
//! place of its parentheses. Every later top-level group keeps its
//! parentheses but has its interior fully flattened. Top-level leaves pass
//! through unchanged.
//!
//! So `(AB)(CD(EF))` simplifies to `AB(CDEF)`: the first group is inlined,
//! the second stays wrapped with a collapsed interior. Applying it again
//! changes nothing here, because the first node is now a leaf.
//!
//! The rule is an artifact of the format's left-to-right processing history
//! rather than a designed semantic; the scenario tables in the integration
//! suites are its source of truth.

use crate::parex::ast::{Node, Tree};

impl Tree {
    /// Collapse one layer of parentheses from the left
    pub fn simplified(&self) -> Tree {
        let Some((first, tail)) = self.nodes.split_first() else {
            return self.clone();
        };

        // The head is spliced in flat; later groups stay wrapped.
        let mut nodes = first.flattened();
        nodes.extend(tail.iter().map(|node| match node {
            Node::Leaf(c) => Node::Leaf(*c),
            Node::Group(tree) => Node::Group(tree.flattened()),
        }));

        Tree::from_nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use crate::parex::parser::parse;
    use crate::parex::testing::assert_render;

    #[test]
    fn test_simplify_empty_tree() {
        assert_render(&parse("").simplified(), "");
    }

    #[test]
    fn test_simplify_empty_group() {
        assert_render(&parse("()").simplified(), "");
    }

    #[test]
    fn test_simplify_inlines_first_group() {
        assert_render(&parse("(AB)").simplified(), "AB");
    }

    #[test]
    fn test_simplify_keeps_later_groups_wrapped() {
        assert_render(&parse("(AB)(CD(EF))").simplified(), "AB(CDEF)");
    }

    #[test]
    fn test_simplify_leaf_head_passes_through() {
        assert_render(&parse("A(B(C))").simplified(), "A(BC)");
    }

    #[test]
    fn test_simplify_deep_first_group_fully_flattens() {
        assert_render(&parse("((((AB)C)D)E)F").simplified(), "ABCDEF");
    }

    #[test]
    fn test_simplify_deeply_nested_first_group() {
        let depth = 10_000;
        let source = format!("{}AB{}", "(".repeat(depth), ")".repeat(depth));
        assert_render(&parse(&source).simplified(), "AB");
    }

    #[test]
    fn test_simplify_second_pass_reaches_fixpoint() {
        let once = parse("(AB)(CD(EF))").simplified();
        assert_eq!(once.simplified(), once);
    }
}
