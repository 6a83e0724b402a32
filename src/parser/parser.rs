//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser is recursive descent: statements are dispatched through a
//! keyword lookup table and expressions climb a fixed chain of precedence
//! levels, one function call per level.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by the leading keyword
//! - Binary operators, keyed by precedence level

use std::collections::HashMap;

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, BindingPower, OperatorLookup, StmtHandler, StmtLookup},
    stmt::parse_block_stmt,
};

/// Deepest nesting of expression levels, groups and blocks the parser
/// accepts. Evaluation recurses once per tree level, so this also bounds the
/// evaluator's stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables. It tracks the
/// current position in the token stream and provides methods for token
/// consumption.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Sentinel returned by lookahead past the last token
    eof: Token,
    /// Current recursion depth, see [`MAX_NESTING_DEPTH`]
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for binary operators per precedence level
    operator_lookup: OperatorLookup,
}

impl Parser {
    /// Creates a new Parser instance over a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens
            .last()
            .map(|token| token.position)
            .unwrap_or(Position::new(1, 1));

        Parser {
            tokens,
            pos: 0,
            eof: Token::eof(end),
            depth: 0,
            stmt_lookup: HashMap::new(),
            operator_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Looks `offset` tokens ahead; past the end this is the end-of-input sentinel.
    pub fn peek(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).unwrap_or(&self.eof)
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// End-of-input is never consumed.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position
    }

    /// Builds an unexpected-token error at the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current_token().value.clone(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an error
    /// carrying `message`.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            Err(self.unexpected(message))
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a single punctuation character.
    pub fn expect_punctuation(&mut self, expected: char, message: &str) -> Result<Token, Error> {
        if !self.current_token().is_punctuation(expected) {
            Err(self.unexpected(message))
        } else {
            Ok(self.advance())
        }
    }

    /// Expects the end of the current line, allowing a trailing comment.
    ///
    /// End-of-input also ends a line.
    pub fn expect_line_end(&mut self) -> Result<(), Error> {
        if self.current_token_kind() == TokenKind::Comment {
            self.advance();
        }

        match self.current_token_kind() {
            TokenKind::EOL => {
                self.advance();
                Ok(())
            }
            TokenKind::EOF => Ok(()),
            _ => Err(self.unexpected("expected end of line")),
        }
    }

    /// Expects `end <keyword>` followed by the end of the line.
    pub fn expect_closing(&mut self, keyword: TokenKind, text: &str) -> Result<(), Error> {
        let message = format!("expected `end {}`", text);
        self.expect(TokenKind::End, &message)?;
        self.expect(keyword, &message)?;
        self.expect_line_end()
    }

    /// Enters one nesting level, failing once [`MAX_NESTING_DEPTH`] is reached.
    pub fn enter_nested(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Consumes the operator of level `binding_power` at the current
    /// position, if any.
    ///
    /// Operators are spelled by consecutive one-character punctuation tokens,
    /// so `==` is the token `=` followed by the token `=`.
    pub fn match_operator(&mut self, binding_power: BindingPower) -> Option<&'static str> {
        let operator = self
            .operator_lookup
            .get(&binding_power)?
            .iter()
            .copied()
            .find(|op| {
                op.chars()
                    .enumerate()
                    .all(|(offset, c)| self.peek(offset).is_punctuation(c))
            })?;

        for _ in operator.chars() {
            self.advance();
        }

        Some(operator)
    }

    /// Registers a binary operator at a precedence level.
    ///
    /// Operators registered earlier at the same level are tried first.
    pub fn led(&mut self, binding_power: BindingPower, operator: &'static str) {
        self.operator_lookup
            .entry(binding_power)
            .or_default()
            .push(operator);
    }

    /// Registers a statement handler for a leading keyword.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables and parses the top-level block, which must
/// consume every token.
///
/// # Returns
///
/// The `prog` node holding the top-level block, or the first parse error.
pub fn parse(tokens: Vec<Token>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut prog = Node::new(NodeKind::Prog, Position::new(1, 1));
    prog.push(parse_block_stmt(&mut parser)?);

    if parser.has_tokens() {
        return Err(parser.unexpected("no open block to close"));
    }

    log::debug!("parsed {} top-level statements", prog.children[0].children.len());
    Ok(prog)
}
