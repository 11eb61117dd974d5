//! Main module for the parex library functionality

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod transform;
pub mod treeviz;

#[cfg(test)]
pub mod testing;
