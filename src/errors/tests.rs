//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "@".to_string(),
            message: "expected a value".to_string(),
        },
        Position::new(10, 3),
    );

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(error.kind(), ErrorKind::Parse);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "x".to_string(),
            message: "expected `=` in assignment".to_string(),
        },
        Position::new(42, 7),
    );

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "x".to_string(),
        },
        Position::new(2, 5),
    );

    assert_eq!(
        error.to_string(),
        "runtime error at line 2, column 5: missing identifier: [x]"
    );
}

#[test]
fn test_parse_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "end".to_string(),
            message: "no open block to close".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(
        error.to_string(),
        "parse error at line 1, column 1: unexpected token (no open block to close): \"end\""
    );
}

#[test]
fn test_error_kinds() {
    let parse_errors = [
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        ErrorImpl::UnterminatedString {
            token: "\"abc".to_string(),
        },
        ErrorImpl::NestingTooDeep { limit: 256 },
    ];
    let runtime_errors = [
        ErrorImpl::PropertyNotFound {
            property: "y".to_string(),
        },
        ErrorImpl::InvalidHandle { handle: 4 },
        ErrorImpl::DivisionByZero,
        ErrorImpl::MalformedNode {
            kind: "let".to_string(),
        },
    ];

    assert!(parse_errors.iter().all(|e| e.kind() == ErrorKind::Parse));
    assert!(runtime_errors.iter().all(|e| e.kind() == ErrorKind::Runtime));
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            expected: "integer".to_string(),
            received: "string".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_property_not_found_tip() {
    let error = Error::new(
        ErrorImpl::PropertyNotFound {
            property: "y".to_string(),
        },
        Position::null(),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Property `y` must be assigned before it is read"
    );
}

#[test]
fn test_invalid_handle_message() {
    let error = Error::new(ErrorImpl::InvalidHandle { handle: 3 }, Position::new(4, 1));

    assert_eq!(error.get_impl().to_string(), "invalid object handle #3");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}
