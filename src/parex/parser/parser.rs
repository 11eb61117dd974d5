//! Parser implementation for parex expressions
//!
//! A single left-to-right pass over the token stream with an explicit stack,
//! a form of shift-reduce parsing. Glyphs are shifted onto the stack; a
//! closing parenthesis reduces everything back to the matching open marker
//! into one group node. The explicit stack keeps deeply nested input off the
//! call stack.
//!
//! Parsing is total. Malformed input degrades instead of failing:
//!
//! - An unmatched `)` finds no open marker; the reduce drains the whole
//!   stack and wraps the drained prefix in a group.
//! - An unmatched `(` leaves its marker on the stack; at end of scan it
//!   becomes a literal `(` character node, so rendering reproduces it.

use crate::parex::ast::{Node, Tree};
use crate::parex::lexer::{tokenize, Token};

/// Scratch entry on the parse stack
enum StackItem {
    /// Marker for a `(` awaiting its closing parenthesis; never part of the
    /// final tree unless left unmatched
    Open,
    /// A finished node (a glyph, or an already-reduced group)
    Node(Node),
}

/// Parse an expression string into a tree
///
/// Whitespace is dropped by the lexer and parentheses are consumed as
/// structure, so neither appears as a character node.
pub fn parse(source: &str) -> Tree {
    parse_tokens(&tokenize(source))
}

/// Parse a pre-tokenized expression into a tree
pub fn parse_tokens(tokens: &[Token]) -> Tree {
    let mut stack: Vec<StackItem> = Vec::new();

    for token in tokens {
        match token {
            Token::OpenParen => stack.push(StackItem::Open),
            Token::CloseParen => reduce_group(&mut stack),
            Token::Glyph(c) => stack.push(StackItem::Node(Node::Leaf(*c))),
        }
    }

    stack
        .into_iter()
        .map(|item| match item {
            StackItem::Node(node) => node,
            // unmatched `(` degrades to a literal character
            StackItem::Open => Node::Leaf('('),
        })
        .collect()
}

/// Reduce the stack down to the nearest open marker into a single group
///
/// Entries come off in reverse reading order, so the collected nodes are
/// reversed back before wrapping. Without a marker (unmatched `)`), the
/// whole stack is consumed.
fn reduce_group(stack: &mut Vec<StackItem>) {
    let mut collected = Vec::new();
    loop {
        match stack.pop() {
            Some(StackItem::Node(node)) => collected.push(node),
            Some(StackItem::Open) | None => break,
        }
    }
    collected.reverse();
    stack.push(StackItem::Node(Node::Group(Tree::from_nodes(collected))));
}
