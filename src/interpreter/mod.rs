//! Tree-walking evaluator module.
//!
//! This module runs a parsed program. It handles:
//!
//! - Statement dispatch on node kind (assignment, `dim`, `if`, `while`, `delete`)
//! - Expression evaluation with strict operand type checks
//! - The stack of named bindings and the heap of explicitly freed objects
//! - Variable-path reads and writes through object properties

pub mod expr;
pub mod interpreter;
pub mod memory;
pub mod stmt;
pub mod value;
