use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_varpath},
    parser::Parser,
};

/// Tries to parse one statement into `block`.
///
/// Alternatives are tried in order: an empty or comment-only line, a keyword
/// statement from the lookup table, then an assignment. Returns `Ok(false)`
/// when the current token starts none of them.
pub fn parse_stmt(parser: &mut Parser, block: &mut Node) -> Result<bool, Error> {
    if parse_empty_line(parser) {
        return Ok(true);
    }

    if let Some(handler) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        block.push(handler(parser)?);
        return Ok(true);
    }

    if parser.current_token().is_identifier() {
        block.push(parse_let_stmt(parser)?);
        return Ok(true);
    }

    Ok(false)
}

/// Consumes a blank or comment-only line. Produces no node.
fn parse_empty_line(parser: &mut Parser) -> bool {
    match parser.current_token_kind() {
        TokenKind::Comment if parser.peek(1).kind == TokenKind::EOL => {
            parser.advance();
            parser.advance();
            true
        }
        TokenKind::EOL => {
            parser.advance();
            true
        }
        _ => false,
    }
}

/// Parses the longest run of statements.
///
/// The block ends without consuming anything at `end`, `else`, end-of-line
/// or end-of-input; the enclosing construct decides whether that is valid.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.enter_nested()?;
    let block = parse_block_body(parser);
    parser.leave_nested();

    block
}

fn parse_block_body(parser: &mut Parser) -> Result<Node, Error> {
    let mut block = Node::new(NodeKind::Block, parser.get_position());

    loop {
        if parse_stmt(parser, &mut block)? {
            continue;
        }

        match parser.current_token_kind() {
            TokenKind::End | TokenKind::Else | TokenKind::EOL | TokenKind::EOF => break,
            kind if kind.is_keyword() => {
                return Err(parser.unexpected("reserved keyword is not supported here"))
            }
            _ => return Err(parser.unexpected("expected a statement")),
        }
    }

    Ok(block)
}

/// `VARPATH = EXPR`
pub fn parse_let_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let target = parse_varpath(parser)?;
    let mut node = Node::new(NodeKind::Let, target.position);

    parser.expect_punctuation('=', "expected `=` in assignment")?;
    node.push(target);
    node.push(parse_expr(parser)?);
    parser.expect_line_end()?;

    Ok(node)
}

/// `if EXPR` block, any number of `else if EXPR` blocks, an optional `else`
/// block, then `end if`.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.advance().position;
    let mut node = Node::new(NodeKind::If, start);

    node.push(parse_expr(parser)?);
    parser.expect_line_end()?;
    node.push(parse_block_stmt(parser)?);

    while parser.current_token_kind() == TokenKind::Else && parser.peek(1).kind == TokenKind::If {
        let position = parser.advance().position;
        parser.advance();

        let mut elseif = Node::new(NodeKind::ElseIf, position);
        elseif.push(parse_expr(parser)?);
        parser.expect_line_end()?;
        elseif.push(parse_block_stmt(parser)?);
        node.push(elseif);
    }

    if parser.current_token_kind() == TokenKind::Else {
        let position = parser.advance().position;
        parser.expect_line_end()?;

        let mut else_node = Node::new(NodeKind::Else, position);
        else_node.push(parse_block_stmt(parser)?);
        node.push(else_node);
    }

    parser.expect_closing(TokenKind::If, "if")?;

    Ok(node)
}

/// `while EXPR` block `end while`
pub fn parse_while_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.advance().position;
    let mut node = Node::new(NodeKind::While, start);

    node.push(parse_expr(parser)?);
    parser.expect_line_end()?;
    node.push(parse_block_stmt(parser)?);
    parser.expect_closing(TokenKind::While, "while")?;

    Ok(node)
}

/// `delete VARPATH`
pub fn parse_delete_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.advance().position;
    let mut node = Node::new(NodeKind::Delete, start);

    node.push(parse_varpath(parser)?);
    parser.expect_line_end()?;

    Ok(node)
}

/// `dim IDENT (, IDENT)*` or `dim IDENT = EXPR`
pub fn parse_dim_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.advance().position;
    let mut node = Node::new(NodeKind::Dim, start);

    loop {
        if !parser.current_token().is_identifier() {
            return Err(parser.unexpected("expected a variable name in `dim`"));
        }
        let name = parser.advance();
        node.push(Node::with_text(NodeKind::Identifier, name.value, name.position));

        if !parser.current_token().is_punctuation(',') {
            break;
        }
        parser.advance();
    }

    if parser.current_token().is_punctuation('=') {
        if node.children.len() > 1 {
            return Err(parser.unexpected("an initializer needs a single variable"));
        }
        parser.advance();
        node.push(parse_expr(parser)?);
    }

    parser.expect_line_end()?;

    Ok(node)
}
