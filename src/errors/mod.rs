//! Error types and error handling for the interpreter.
//!
//! Both the parser and the evaluator report failures through the single
//! [`errors::Error`] type. It includes:
//!
//! - The failing source position
//! - A specific error variant, classified as a parse or runtime error
//! - Helpful tips for the terminal renderer

pub mod errors;

#[cfg(test)]
mod tests;
