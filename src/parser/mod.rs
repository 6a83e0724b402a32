//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a tree of uniform nodes. It handles:
//!
//! - Statement parsing (assignments, `dim`, `if`, `while`, `delete`)
//! - Blocks terminated by `end`, `else` or end of input
//! - Expression parsing through a chain of precedence levels
//! - Error reporting with the position of the failing token
//!
//! Binary levels are right-associative and comparisons do not chain; both
//! properties are part of the language.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
