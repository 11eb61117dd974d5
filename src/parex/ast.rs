//! AST definitions and utilities for parex expressions
//!
//! This module provides the tree types that represent a parsed expression,
//! along with rendering back to the parenthesized string form.
//!
//! ## Modules
//!
//! - `node` - `Node` and `Tree` type definitions, helpers, and rendering

pub mod node;

// Re-export commonly used types at module root
pub use node::{Node, Tree};
