//! Implementation of the parex lexer
//!
//! This module provides the convenience function for tokenizing expression
//! text. The actual tokenization is handled entirely by logos. Nothing
//! downstream needs source spans: the parser is total and reports no
//! positions, so tokens are collected bare.

use crate::parex::lexer::tokens::Token;
use logos::Logos;

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}
