//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Assignments and `dim` declarations
//! - Expression precedence and associativity
//! - Control flow statements and block termination
//! - Error cases with their positions

use super::parser::{parse, MAX_NESTING_DEPTH};
use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> Result<Node, Error> {
    parse(tokenize(source))
}

fn statements(source: &str) -> Vec<Node> {
    let prog = parse_source(source).unwrap();
    assert_eq!(prog.kind, NodeKind::Prog);
    assert_eq!(prog.children.len(), 1);
    prog.children[0].children.clone()
}

/// The right-hand side of a single assignment, rendered compactly.
fn rhs(expression: &str) -> String {
    let stmts = statements(&format!("x = {}", expression));
    assert_eq!(stmts.len(), 1);
    stmts[0].children[1].to_sexpr()
}

#[test]
fn test_parse_assignment() {
    let stmts = statements("x = 42");

    assert_eq!(stmts[0].kind, NodeKind::Let);
    assert_eq!(stmts[0].children[0].kind, NodeKind::VarPath);
    assert_eq!(stmts[0].children[1].kind, NodeKind::Expr);
    assert_eq!(stmts[0].to_sexpr(), "(let x 42)");
}

#[test]
fn test_parse_property_assignment() {
    let stmts = statements("a.b.c = \"hi\"");
    let path = &stmts[0].children[0];

    assert_eq!(path.children.len(), 3);
    assert!(path.children.iter().all(|c| c.kind == NodeKind::Identifier));
    assert_eq!(stmts[0].to_sexpr(), "(let a.b.c \"hi\")");
}

#[test]
fn test_parse_values() {
    assert_eq!(rhs("7"), "7");
    assert_eq!(rhs("\"a b\""), "\"a b\"");
    assert_eq!(rhs("{}"), "{}");
    assert_eq!(rhs("{ }"), "{}");
    assert_eq!(rhs("p.q"), "p.q");
    assert_eq!(rhs("(1)"), "1");
}

#[test]
fn test_parse_precedence() {
    assert_eq!(rhs("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(rhs("1 * 2 + 3"), "(+ (* 1 2) 3)");
    assert_eq!(rhs("a < b && c || d"), "(|| (&& (< a b) c) d)");
    assert_eq!(rhs("a + 1 == b * 2"), "(== (+ a 1) (* b 2))");
    assert_eq!(rhs("(1 + 2) * 3"), "(* (+ 1 2) 3)");
}

#[test]
fn test_parse_right_associativity() {
    assert_eq!(rhs("a - b - c"), "(- a (- b c))");
    assert_eq!(rhs("a + b + c"), "(+ a (+ b c))");
    assert_eq!(rhs("a * b * c"), "(* a (* b c))");
    assert_eq!(rhs("a / b / c"), "(/ a (/ b c))");
    assert_eq!(rhs("a && b && c"), "(&& a (&& b c))");
    assert_eq!(rhs("a || b || c"), "(|| a (|| b c))");
}

#[test]
fn test_right_child_of_subtraction_is_the_nested_operator() {
    let stmts = statements("x = a - b - c");
    let outer = &stmts[0].children[1].children[0];

    assert_eq!(outer.kind, NodeKind::Operator);
    assert_eq!(outer.text(), "-");
    assert_eq!(outer.children.len(), 2);
    assert_eq!(outer.children[0].kind, NodeKind::VarPath);
    assert_eq!(outer.children[1].kind, NodeKind::Operator);
    assert_eq!(outer.children[1].to_sexpr(), "(- b c)");
}

#[test]
fn test_parse_comparison_operators() {
    assert_eq!(rhs("a == b"), "(== a b)");
    assert_eq!(rhs("a != b"), "(!= a b)");
    assert_eq!(rhs("a >= b"), "(>= a b)");
    assert_eq!(rhs("a <= b"), "(<= a b)");
    assert_eq!(rhs("a > b"), "(> a b)");
    assert_eq!(rhs("a < b"), "(< a b)");
}

#[test]
fn test_chained_comparison_is_rejected() {
    let error = parse_source("x = a == b == c").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 12);

    assert!(parse_source("if a < b < c\nend if").is_err());
}

#[test]
fn test_parse_if_chain_layout() {
    let source = "if a == 1\nb = 1\nelse if a == 2\nb = 2\nelse if a == 3\nb = 3\nelse\nb = 4\nend if";
    let stmts = statements(source);
    let node = &stmts[0];

    assert_eq!(node.kind, NodeKind::If);
    let kinds: Vec<NodeKind> = node.children.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Expr,
            NodeKind::Block,
            NodeKind::ElseIf,
            NodeKind::ElseIf,
            NodeKind::Else
        ]
    );
    assert_eq!(node.children[2].to_sexpr(), "(elseif (== a 2) (block (let b 2)))");
    assert_eq!(node.children[4].to_sexpr(), "(else (block (let b 4)))");
}

#[test]
fn test_parse_if_without_else() {
    let stmts = statements("if 1\nend if");

    assert_eq!(stmts[0].to_sexpr(), "(if 1 (block))");
}

#[test]
fn test_parse_while_loop() {
    let stmts = statements("while n > 0\n  n = n - 1\nend while\n");

    assert_eq!(stmts[0].to_sexpr(), "(while (> n 0) (block (let n (- n 1))))");
}

#[test]
fn test_parse_nested_blocks() {
    let source = "while a\nif b\nwhile c\nc = 0\nend while\nend if\nend while";
    let stmts = statements(source);

    assert_eq!(
        stmts[0].to_sexpr(),
        "(while a (block (if b (block (while c (block (let c 0)))))))"
    );
}

#[test]
fn test_parse_delete_and_dim() {
    let stmts = statements("dim a, b\ndim c = {}\ndelete c\ndelete a.b");

    assert_eq!(stmts[0].to_sexpr(), "(dim a b)");
    assert_eq!(stmts[1].to_sexpr(), "(dim c {})");
    assert_eq!(stmts[2].to_sexpr(), "(delete c)");
    assert_eq!(stmts[3].to_sexpr(), "(delete a.b)");
}

#[test]
fn test_parse_comments_and_blank_lines() {
    let stmts = statements("// header\n\n   \na = 1 // trailing\n// footer");

    assert_eq!(stmts.len(), 1);
    assert_eq!(stmts[0].to_sexpr(), "(let a 1)");
}

#[test]
fn test_parse_empty_program() {
    let prog = parse_source("").unwrap();

    assert_eq!(prog.to_sexpr(), "(prog (block))");
}

#[test]
fn test_keywords_are_not_identifiers() {
    assert!(parse_source("end = 1").is_err());
    assert!(parse_source("x = while").is_err());
    assert!(parse_source("for = 1").is_err());
    assert!(parse_source("function = 1").is_err());
    assert!(parse_source("a.if = 1").is_err());
}

#[test]
fn test_missing_closing_keyword() {
    let error = parse_source("while 1\na = 1\n").unwrap_err();
    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedTokenDetailed { message, .. } if message == "expected `end while`"
    ));

    assert!(parse_source("if 1\na = 1\nend while").is_err());
    assert!(parse_source("if 1\nelse\nelse\nend if").is_err());
}

#[test]
fn test_stray_closing_keyword() {
    let error = parse_source("a = 1\nend if").unwrap_err();

    assert_eq!(error.get_position().line, 2);
    assert!(parse_source("else").is_err());
}

#[test]
fn test_malformed_paths_and_values() {
    assert!(parse_source("a. = 1").is_err());
    assert!(parse_source("a = b.").is_err());
    assert!(parse_source("a = {").is_err());
    assert!(parse_source("a = (1 + 2").is_err());
    assert!(parse_source("a = 1 +").is_err());
    assert!(parse_source("a = ").is_err());
    assert!(parse_source("a 1").is_err());
    assert!(parse_source("= 1").is_err());
    assert!(parse_source("a = !b").is_err());
}

#[test]
fn test_number_out_of_range() {
    let error = parse_source("a = 99999999999999999999").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_unterminated_string() {
    let error = parse_source("a = \"open").unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_dim_initializer_needs_single_name() {
    assert!(parse_source("dim a, b = 1").is_err());
    assert!(parse_source("dim").is_err());
    assert!(parse_source("dim a,").is_err());
}

#[test]
fn test_statement_must_end_the_line() {
    assert!(parse_source("a = 1 b = 2").is_err());
    assert!(parse_source("delete a b").is_err());
    assert!(parse_source("if 1 a = 2\nend if").is_err());
}

#[test]
fn test_tree_dump() {
    let prog = parse_source("a = 1 + 2").unwrap();

    assert_eq!(
        prog.to_string(),
        "prog\n  block\n    let\n      varpath\n        identifier :: a\n      expr\n        operator :: +\n          number :: 1\n          number :: 2\n"
    );
}

/// `x = 1 + 1 + ...` with `operators` additions. The top-level block, the
/// expression levels down to the first operand and one level per addition
/// put the last operand at depth `7 + operators`.
fn addition_chain(operators: usize) -> String {
    format!("x = 1{}", " + 1".repeat(operators))
}

/// `x = ((...(1)...))`. Every group costs the `(` plus six expression levels.
fn nested_groups(depth: usize) -> String {
    format!("x = {}1{}", "(".repeat(depth), ")".repeat(depth))
}

fn is_nesting_error(error: &Error) -> bool {
    error.kind() == ErrorKind::Parse
        && error.get_impl()
            == &ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }
}

#[test]
fn test_long_chain_within_nesting_limit() {
    let stmts = statements(&addition_chain(MAX_NESTING_DEPTH - 7));

    assert_eq!(stmts.len(), 1);
    assert!(stmts[0].to_sexpr().starts_with("(let x (+ 1 (+ 1"));
}

#[test]
fn test_long_chain_over_nesting_limit() {
    let error = parse_source(&addition_chain(MAX_NESTING_DEPTH - 6)).unwrap_err();
    assert!(is_nesting_error(&error), "{}", error);

    // Far past the limit the parser still stops with an error.
    let error = parse_source(&addition_chain(10_000)).unwrap_err();
    assert!(is_nesting_error(&error), "{}", error);
}

#[test]
fn test_nested_groups_and_nesting_limit() {
    let groups = (MAX_NESTING_DEPTH - 7) / 7;

    assert_eq!(rhs(&format!("{}1{}", "(".repeat(groups), ")".repeat(groups))), "1");

    let error = parse_source(&nested_groups(groups + 1)).unwrap_err();
    assert!(is_nesting_error(&error), "{}", error);

    let error = parse_source(&nested_groups(1_000)).unwrap_err();
    assert!(is_nesting_error(&error), "{}", error);
}

#[test]
fn test_nested_blocks_and_nesting_limit() {
    let nested_whiles =
        |depth: usize| format!("{}a = 1\n{}", "while 0\n".repeat(depth), "end while\n".repeat(depth));

    assert!(parse_source(&nested_whiles(100)).is_ok());

    let error = parse_source(&nested_whiles(MAX_NESTING_DEPTH)).unwrap_err();
    assert!(is_nesting_error(&error), "{}", error);
}
