use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Precedence levels, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Or,
    And,
    Relational,
    Additive,
    Multiplicative,
    Primary,
}

impl BindingPower {
    /// The next tighter level.
    pub fn next(&self) -> BindingPower {
        match self {
            BindingPower::Or => BindingPower::And,
            BindingPower::And => BindingPower::Relational,
            BindingPower::Relational => BindingPower::Additive,
            BindingPower::Additive => BindingPower::Multiplicative,
            BindingPower::Multiplicative | BindingPower::Primary => BindingPower::Primary,
        }
    }

    /// Chainable levels parse their right operand at the same level, which
    /// nests repeated operators to the right. Comparisons do not chain.
    pub fn is_associative(&self) -> bool {
        *self != BindingPower::Relational
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.led(BindingPower::Or, "||");
    parser.led(BindingPower::And, "&&");

    // Relational, two-character forms before their one-character prefixes
    parser.led(BindingPower::Relational, "==");
    parser.led(BindingPower::Relational, "!=");
    parser.led(BindingPower::Relational, ">=");
    parser.led(BindingPower::Relational, "<=");
    parser.led(BindingPower::Relational, ">");
    parser.led(BindingPower::Relational, "<");

    // Additive and multiplicative
    parser.led(BindingPower::Additive, "+");
    parser.led(BindingPower::Additive, "-");
    parser.led(BindingPower::Multiplicative, "*");
    parser.led(BindingPower::Multiplicative, "/");

    // Statements
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Delete, parse_delete_stmt);
    parser.stmt(TokenKind::Dim, parse_dim_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type OperatorLookup = HashMap<BindingPower, Vec<&'static str>>;
