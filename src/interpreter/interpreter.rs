//! Main interpreter module.
//!
//! This module contains the Interpreter structure, which owns the stack and
//! heap of one program run, and the `evaluate` entry point. Statement and
//! expression evaluation live in the sibling `stmt` and `expr` modules and
//! receive the interpreter explicitly.

use crate::{ast::ast::Node, errors::errors::Error};

use super::{expr::eval_expression, memory::Memory, stmt::exec_statement, value::Value};

/// The evaluation context for one program.
///
/// Independent instances share nothing, so several programs can be run side
/// by side.
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Stack bindings and heap objects
    pub memory: Memory,
}

impl Interpreter {
    /// Creates an interpreter with an empty stack and heap.
    pub fn new() -> Self {
        Interpreter {
            memory: Memory::new(),
        }
    }

    /// Runs a `prog` (or any statement) node against this interpreter's memory.
    ///
    /// On error the memory keeps whatever the program changed before failing.
    pub fn evaluate(&mut self, program: &Node) -> Result<(), Error> {
        log::debug!("evaluating {} node", program.kind);
        exec_statement(self, program)
    }

    /// Evaluates a single expression node.
    pub fn eval(&mut self, expression: &Node) -> Result<Value, Error> {
        eval_expression(self, expression)
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn into_memory(self) -> Memory {
        self.memory
    }
}

/// Evaluates a program on a fresh interpreter and returns its final memory.
pub fn evaluate(program: &Node) -> Result<Memory, Error> {
    let mut interpreter = Interpreter::new();
    interpreter.evaluate(program)?;

    Ok(interpreter.into_memory())
}
