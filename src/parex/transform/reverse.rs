//! Full structural reversal of expression trees

use crate::parex::ast::{Node, Tree};

/// Step on the mirroring walk's stack: a node still to visit, or the end of
/// a group whose mirrored children are complete
enum MirrorStep<'a> {
    Visit(&'a Node),
    CloseGroup,
}

impl Tree {
    /// Mirror the tree: reverse the top-level order and the order inside
    /// every group, at every depth
    ///
    /// Leaf characters themselves are never altered. Involution: reversing
    /// twice restores the original tree.
    ///
    /// The walk uses an explicit step stack with one output level per open
    /// group; nesting depth is bounded only by the input, so it must not
    /// consume call stack. Steps pop in LIFO order, so pushing children in
    /// reading order visits them mirrored.
    pub fn reversed(&self) -> Tree {
        let mut steps: Vec<MirrorStep> = self.nodes.iter().map(MirrorStep::Visit).collect();
        let mut levels: Vec<Vec<Node>> = vec![Vec::new()];

        while let Some(step) = steps.pop() {
            match step {
                MirrorStep::Visit(Node::Leaf(c)) => {
                    if let Some(level) = levels.last_mut() {
                        level.push(Node::Leaf(*c));
                    }
                }
                MirrorStep::Visit(Node::Group(tree)) => {
                    levels.push(Vec::new());
                    steps.push(MirrorStep::CloseGroup);
                    steps.extend(tree.nodes.iter().map(MirrorStep::Visit));
                }
                MirrorStep::CloseGroup => {
                    if let Some(group) = levels.pop() {
                        if let Some(parent) = levels.last_mut() {
                            parent.push(Node::Group(Tree::from_nodes(group)));
                        }
                    }
                }
            }
        }

        Tree::from_nodes(levels.pop().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use crate::parex::parser::parse;
    use crate::parex::testing::assert_render;

    #[test]
    fn test_reverse_flat_tree() {
        assert_render(&parse("AB").reversed(), "BA");
    }

    #[test]
    fn test_reverse_single_group() {
        assert_render(&parse("(abc)").reversed(), "(cba)");
    }

    #[test]
    fn test_reverse_mirrors_every_depth() {
        assert_render(&parse("(AB)(CD(EF))").reversed(), "((FE)DC)(BA)");
    }

    #[test]
    fn test_reverse_empty_tree() {
        assert_render(&parse("").reversed(), "");
    }

    #[test]
    fn test_reverse_keeps_empty_groups() {
        assert_render(&parse("A()B").reversed(), "B()A");
    }

    #[test]
    fn test_reverse_involution() {
        let tree = parse("((((AB)C)D)E)F");
        assert_eq!(tree.reversed().reversed(), tree);
    }

    #[test]
    fn test_reverse_deeply_nested_tree() {
        let depth = 10_000;
        let source = format!("{}AB{}", "(".repeat(depth), ")".repeat(depth));
        let tree = parse(&source);
        assert_eq!(tree.reversed().reversed(), tree);
    }
}
