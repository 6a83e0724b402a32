//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts source lines
//! into a flat stream of tokens for parsing. It handles:
//!
//! - Tokenization of each line using regex patterns
//! - Recognition of keywords, words, string literals and punctuation
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//! - One end-of-line token per source line

pub mod lexer;
pub mod tokens;
