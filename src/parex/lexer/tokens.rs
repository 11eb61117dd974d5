//! Token definitions for parex expressions
//!
//! This module defines all the tokens that can be produced by the parex
//! lexer. The tokens are defined using the logos derive macro for efficient
//! tokenization.

use logos::Logos;

/// All possible tokens in a parex expression
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token {
    // Group delimiters
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    // Content (catch-all for non-structural characters)
    #[regex(r"[^\s()]", |lex| lex.slice().chars().next())]
    Glyph(char),
}

impl Token {
    /// Check if this token opens or closes a group
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Token::OpenParen | Token::CloseParen)
    }

    /// Check if this token is expression content
    pub fn is_glyph(&self) -> bool {
        matches!(self, Token::Glyph(_))
    }
}
