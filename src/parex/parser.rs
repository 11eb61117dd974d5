//! Parser module for parex expressions
//!
//! This module contains the parsing logic that turns a flat expression
//! string into a [Tree](crate::parex::ast::Tree), including the malformed
//! input policy (parsing is total and never fails).

#[allow(clippy::module_inception)]
pub mod parser;

// Re-export tree types alongside the parser entry points
pub use crate::parex::ast::{Node, Tree};

pub use parser::{parse, parse_tokens};
