//! Treeviz formatter for expression trees

use crate::parex::ast::{Node, Tree};

/// Render a tree as an indented box-drawing visualization, one node per line
///
/// The walk carries its own stack of (node, prefix, is-last) entries;
/// nesting depth is bounded only by the input, so it must not consume call
/// stack. Children are pushed in reverse so they pop in reading order.
pub fn to_treeviz_str(tree: &Tree) -> String {
    let mut result = String::new();
    let mut pending: Vec<(&Node, String, bool)> = Vec::new();
    push_children(&mut pending, tree, "");

    while let Some((node, prefix, is_last)) = pending.pop() {
        let connector = if is_last { "└─" } else { "├─" };
        match node {
            Node::Leaf(c) => {
                result.push_str(&format!(
                    "{}{} {}: {}\n",
                    prefix,
                    connector,
                    node.node_type(),
                    c
                ));
            }
            Node::Group(tree) => {
                result.push_str(&format!("{}{} {}\n", prefix, connector, node.node_type()));
                let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
                push_children(&mut pending, tree, &child_prefix);
            }
        }
    }

    result
}

fn push_children<'a>(pending: &mut Vec<(&'a Node, String, bool)>, tree: &'a Tree, prefix: &str) {
    for (i, child) in tree.nodes.iter().enumerate().rev() {
        let is_last = i == tree.nodes.len() - 1;
        pending.push((child, prefix.to_string(), is_last));
    }
}
