//! Line processing API for parex expressions
//!
//! This module is the engine's call boundary: it evaluates one input line at
//! a time and renders the result in one of several output formats.
//!
//! ## Line grammar
//!
//! ```text
//! <expression-text> [ '/' <operation-codes> [ '/' <ignored-trailing-text> ] ]
//! ```
//!
//! The text before the first `/` is parsed into a tree; the segment between
//! the first and second `/` is a sequence of single-letter operation codes
//! applied left to right; anything after a second `/` is ignored. A missing
//! operations segment means the parsed tree is rendered unchanged.
//!
//! ## Operation codes
//!
//! Codes are case-insensitive: `R` reverses, `S` simplifies. Unrecognized
//! codes are silently skipped, not errors. `"AB/Z"` renders as `"AB"`.

use crate::parex::ast::Tree;
use crate::parex::parser::parse;
use crate::parex::treeviz::to_treeviz_str;
use std::fmt;

/// A single transformation applied by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Reverse,
    Simplify,
}

impl Op {
    /// Decode one operation code; unknown codes map to `None` and are
    /// ignored by the pipeline
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'R' | 'r' => Some(Op::Reverse),
            'S' | 's' => Some(Op::Simplify),
            _ => None,
        }
    }

    pub fn apply(self, tree: &Tree) -> Tree {
        match self {
            Op::Reverse => tree.reversed(),
            Op::Simplify => tree.simplified(),
        }
    }
}

/// Apply a string of operation codes to a tree, left to right
pub fn apply_ops(tree: Tree, ops: &str) -> Tree {
    ops.chars()
        .filter_map(Op::from_code)
        .fold(tree, |tree, op| op.apply(&tree))
}

/// Evaluate one input line into its final tree
pub fn evaluate_line(line: &str) -> Tree {
    let mut segments = line.splitn(3, '/');
    let text = segments.next().unwrap_or_default();
    let tree = parse(text);

    match segments.next() {
        Some(ops) => apply_ops(tree, ops),
        None => tree,
    }
}

/// Evaluate one input line and render the result as a parenthesized string
pub fn process_line(line: &str) -> String {
    evaluate_line(line).render()
}

/// Represents the output format for processed lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Treeviz,
}

impl OutputFormat {
    /// Parse a format string like "text" or "treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessError> {
        match format_str {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "treeviz" => Ok(OutputFormat::Treeviz),
            _ => Err(ProcessError::InvalidFormat(format_str.to_string())),
        }
    }

    /// All recognized format strings
    pub fn available_formats() -> Vec<&'static str> {
        vec!["text", "json", "treeviz"]
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    InvalidFormat(String),
    Serialization(String),
}

impl std::error::Error for ProcessError {}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Evaluate one input line and render the result in the given format
pub fn process_line_with_format(
    line: &str,
    format: &OutputFormat,
) -> Result<String, ProcessError> {
    let tree = evaluate_line(line);
    match format {
        OutputFormat::Text => Ok(tree.render()),
        OutputFormat::Json => serde_json::to_string(&tree)
            .map_err(|e| ProcessError::Serialization(e.to_string())),
        OutputFormat::Treeviz => Ok(to_treeviz_str(&tree)),
    }
}

/// Process a whole input: one output per line, in input order
///
/// Lines are trimmed of surrounding whitespace before evaluation, matching
/// the I/O boundary contract (internal whitespace is dropped by the lexer
/// anyway).
pub fn process_input(input: &str, format: &OutputFormat) -> Result<String, ProcessError> {
    let outputs = input
        .lines()
        .map(|line| process_line_with_format(line.trim(), format))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(outputs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parex::testing::{leaf, tree};

    #[test]
    fn test_op_decoding() {
        assert_eq!(Op::from_code('R'), Some(Op::Reverse));
        assert_eq!(Op::from_code('r'), Some(Op::Reverse));
        assert_eq!(Op::from_code('S'), Some(Op::Simplify));
        assert_eq!(Op::from_code('s'), Some(Op::Simplify));
        assert_eq!(Op::from_code('Z'), None);
        assert_eq!(Op::from_code('/'), None);
    }

    #[test]
    fn test_apply_ops_in_order() {
        let result = apply_ops(parse("(AB)(CD)"), "SR");
        assert_eq!(result.render(), "(DC)BA");
    }

    #[test]
    fn test_apply_ops_skips_unknown_codes() {
        let result = apply_ops(parse("AB"), "xZr!");
        assert_eq!(result.render(), "BA");
    }

    #[test]
    fn test_apply_ops_empty_string_is_noop() {
        assert_eq!(apply_ops(parse("(A)B"), "").render(), "(A)B");
    }

    #[test]
    fn test_evaluate_line_without_ops_segment() {
        assert_eq!(evaluate_line("AB"), tree(vec![leaf('A'), leaf('B')]));
    }

    #[test]
    fn test_evaluate_line_ignores_after_second_slash() {
        // Ops live strictly between the first and second slash.
        assert_eq!(process_line("AB/R/"), "BA");
        assert_eq!(process_line("AB//R"), "AB");
        assert_eq!(process_line("(AB)B/RSR/////"), "(AB)B");
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(process_line(""), "");
        assert_eq!(process_line("/"), "");
        assert_eq!(process_line("/R"), "");
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_string("text"), Ok(OutputFormat::Text));
        assert_eq!(OutputFormat::from_string("json"), Ok(OutputFormat::Json));
        assert_eq!(
            OutputFormat::from_string("treeviz"),
            Ok(OutputFormat::Treeviz)
        );
        assert_eq!(
            OutputFormat::from_string("xml"),
            Err(ProcessError::InvalidFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_process_line_with_json_format() {
        let json = process_line_with_format("(A)/s", &OutputFormat::Json).unwrap();
        assert_eq!(json, r#"[{"Leaf":"A"}]"#);
    }

    #[test]
    fn test_process_input_preserves_line_order() {
        let output = process_input("AB/r\n(AB)/s\n", &OutputFormat::Text).unwrap();
        assert_eq!(output, "BA\nAB");
    }

    #[test]
    fn test_process_input_trims_lines() {
        let output = process_input("  AB/r  \n", &OutputFormat::Text).unwrap();
        assert_eq!(output, "BA");
    }
}
