#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorTip},
    interpreter::memory::Memory,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line and column in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// Placeholder for errors not tied to any source location.
    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Tokenizes and parses a whole program.
pub fn parse_source(source: &str) -> Result<Node, Error> {
    parser::parser::parse(lexer::lexer::tokenize(source))
}

/// Parses and evaluates a program, returning its final memory.
pub fn run(source: &str) -> Result<Memory, Error> {
    let program = parse_source(source)?;
    interpreter::interpreter::evaluate(&program)
}

pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    source.lines().nth(line.checked_sub(1)?)
}

/// Renders an error with the offending source line and a caret under the
/// failing column.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        error: message
        -> script.bas
           |
        20 | a = 1 == "1"
           | ----^
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n  {}\n",
            error.get_error_name(),
            error,
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", file));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return output;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{:>padding$}\n", "|"));
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    output
}

/// Strips leading whitespace, returning the rest and how many characters went.
fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start();
    (trimmed, string[..string.len() - trimmed.len()].chars().count())
}
