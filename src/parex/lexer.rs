//! Lexer module for parex expressions
//!
//! This module contains the tokenization logic for parenthesized character
//! expressions, including token definitions and the lexer implementation.
//!
//! Whitespace Handling
//!
//! Whitespace is structural noise in this format: it never appears in the
//! tree, not even as a character node. The lexer therefore skips it outright
//! instead of emitting a whitespace token for the parser to filter, which
//! keeps the parser a pure shift-reduce loop over meaningful tokens.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::tokenize;
pub use tokens::Token;
