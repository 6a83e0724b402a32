use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

/// Text of the end-of-line sentinel token.
pub const EOL: &str = "$EOL";
/// Text of the end-of-input sentinel token.
pub const EOF: &str = "$EOF";

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("while", TokenKind::While);
        map.insert("delete", TokenKind::Delete);
        map.insert("dim", TokenKind::Dim);
        map.insert("for", TokenKind::For);
        map.insert("function", TokenKind::Function);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    EOL,

    /// A run of `[A-Za-z0-9_]`, classified later as identifier or number
    Word,
    /// Raw string literal including its quotes (the closing one may be missing)
    String,
    Comment,
    /// Any other single character
    Punctuation,

    // Reserved
    If,
    Else,
    End,
    While,
    Delete,
    Dim,
    For,
    Function,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Token {
    pub fn eol(position: Position) -> Self {
        Token {
            kind: TokenKind::EOL,
            value: String::from(EOL),
            position,
        }
    }

    pub fn eof(position: Position) -> Self {
        Token {
            kind: TokenKind::EOF,
            value: String::from(EOF),
            position,
        }
    }

    /// A word starting with a letter or underscore that is not reserved.
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Word
            && self
                .value
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    }

    /// A word made only of decimal digits.
    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Word && self.value.chars().all(|c| c.is_ascii_digit())
    }

    /// A string literal closed on the same line.
    pub fn is_string_literal(&self) -> bool {
        self.kind == TokenKind::String && self.value.len() >= 2 && self.value.ends_with('"')
    }

    /// Literal contents with the surrounding quotes removed.
    pub fn string_contents(&self) -> &str {
        if self.is_string_literal() {
            &self.value[1..self.value.len() - 1]
        } else {
            &self.value
        }
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.kind == TokenKind::Punctuation && self.value.chars().eq(std::iter::once(c))
    }
}
