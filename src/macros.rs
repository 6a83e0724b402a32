//! Utility macros for the interpreter.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for a token kind
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - The source position of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Word, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a default lexer handler that keeps the matched text verbatim.
///
/// Generates a handler function that pushes a token of the given kind holding
/// the matched text and advances the lexer past it.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^//.*").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Comment),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            lexer.push(MK_TOKEN!($kind, String::from(matched), lexer.position()));
            lexer.advance_n(matched.len());
        }
    };
}
