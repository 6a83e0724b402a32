use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses a full expression, wrapped in an `expr` node.
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    let mut expr = Node::new(NodeKind::Expr, parser.get_position());
    expr.push(parse_binary_expr(parser, BindingPower::Or)?);

    Ok(expr)
}

/// Parses one precedence level.
///
/// The left operand comes from the next tighter level. When an operator of
/// this level follows, the right operand re-enters this same level for
/// associative levels (so `a - b - c` becomes `a - (b - c)`) and the next
/// level for comparisons, which therefore never chain.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    parser.enter_nested()?;
    let node = parse_level(parser, bp);
    parser.leave_nested();

    node
}

fn parse_level(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    if bp == BindingPower::Primary {
        return parse_primary_expr(parser);
    }

    let left = parse_binary_expr(parser, bp.next())?;

    let Some(operator) = parser.match_operator(bp) else {
        return Ok(left);
    };

    let right_bp = if bp.is_associative() { bp } else { bp.next() };
    let right = parse_binary_expr(parser, right_bp)?;

    Ok(Node::operator(operator, left, right))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.current_token();

    if token.is_number() {
        if token.value.parse::<i64>().is_err() {
            return Err(Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.position,
            ));
        }
        let token = parser.advance();
        return Ok(Node::with_text(NodeKind::Number, token.value, token.position));
    }

    if token.kind == TokenKind::String {
        if !token.is_string_literal() {
            return Err(Error::new(
                ErrorImpl::UnterminatedString {
                    token: token.value.clone(),
                },
                token.position,
            ));
        }
        let token = parser.advance();
        return Ok(Node::with_text(
            NodeKind::StrLit,
            token.string_contents(),
            token.position,
        ));
    }

    if token.is_identifier() {
        return parse_varpath(parser);
    }

    if token.is_punctuation('{') {
        let open = parser.advance();
        parser.expect_punctuation('}', "expected `}` to close the object literal")?;
        return Ok(Node::with_text(NodeKind::ObjLit, "{}", open.position));
    }

    if token.is_punctuation('(') {
        parser.enter_nested()?;
        parser.advance();
        let expr = parse_expr(parser)?;
        parser.expect_punctuation(')', "expected `)` to close the group")?;
        parser.leave_nested();
        return Ok(expr);
    }

    Err(parser.unexpected("expected a value"))
}

/// Parses `identifier ( . identifier )*`.
pub fn parse_varpath(parser: &mut Parser) -> Result<Node, Error> {
    if !parser.current_token().is_identifier() {
        return Err(parser.unexpected("expected a variable name"));
    }

    let base = parser.advance();
    let mut path = Node::new(NodeKind::VarPath, base.position);
    path.push(Node::with_text(NodeKind::Identifier, base.value, base.position));

    while parser.current_token().is_punctuation('.') {
        parser.advance();

        if !parser.current_token().is_identifier() {
            return Err(parser.unexpected("expected a property name after `.`"));
        }

        let property = parser.advance();
        path.push(Node::with_text(
            NodeKind::Identifier,
            property.value,
            property.position,
        ));
    }

    Ok(path)
}
