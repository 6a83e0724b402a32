use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Checked in order; a character none of them match becomes punctuation.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[A-Za-z0-9_]+").unwrap(), handler: word_handler },
        RegexPattern { regex: Regex::new(r"^//.*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comment) },
        RegexPattern { regex: Regex::new(r#"^"[^"]*"?"#).unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
    ];
}

/// Tokenizer state for a single source line.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    line: &'a str,
    line_number: usize,
    /// Byte offset of the next unread character
    pos: usize,
    /// Characters consumed so far
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str, line_number: usize) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            line,
            line_number,
            pos: 0,
            column: 0,
        }
    }

    /// Skips `n` bytes, always a whole number of characters.
    pub fn advance_n(&mut self, n: usize) {
        self.column += self.line[self.pos..self.pos + n].chars().count();
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.line[self.pos..]
    }

    pub fn at_eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// 1-based position of the next unread character.
    pub fn position(&self) -> Position {
        Position::new(self.line_number, self.column + 1)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn word_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Word);

    lexer.push(MK_TOKEN!(kind, String::from(matched), lexer.position()));
    lexer.advance_n(matched.len());
}

fn punctuation_handler(lexer: &mut Lexer) {
    if let Some(c) = lexer.remainder().chars().next() {
        lexer.push(MK_TOKEN!(TokenKind::Punctuation, c.to_string(), lexer.position()));
        lexer.advance_n(c.len_utf8());
    }
}

/// Tokenizes one source line. The result always ends with an end-of-line token.
pub fn tokenize_line(line: &str, line_number: usize) -> Vec<Token> {
    let mut lex = Lexer::new(line, line_number);

    while !lex.at_eol() {
        let remainder = lex.remainder();
        let pattern = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remainder).map(|m| (pattern.handler, m.as_str())));

        match pattern {
            Some((handler, matched)) => handler(&mut lex, matched),
            None => punctuation_handler(&mut lex),
        }
    }

    let end = lex.position();
    lex.push(Token::eol(end));
    lex.tokens
}

/// Tokenizes a whole program line by line.
///
/// Every source line contributes exactly one end-of-line token. End-of-input is
/// not part of the result; the parser synthesizes it once the tokens run out.
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = source
        .lines()
        .enumerate()
        .flat_map(|(index, line)| tokenize_line(line, index + 1))
        .collect();

    log::debug!("tokenized {} lines into {} tokens", source.lines().count(), tokens.len());
    tokens
}
