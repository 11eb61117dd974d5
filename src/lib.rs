//! # parex
//!
//! A parser and structural transformer for parenthesized character expressions.
//!
//! An expression like `(AB)(CD(EF))` is parsed into a tree of characters and
//! nested groups, transformed by single-letter operation codes (`R` reverses,
//! `S` simplifies), and rendered back to its parenthesized string form.
//!
//! ## Testing
//!
//! Transform behavior is pinned by the literal scenario tables in the
//! integration suites; unit tests build trees with the helpers in the
//! [testing module](parex::testing).

pub mod parex;
