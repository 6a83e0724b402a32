use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Which stage of the pipeline raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Runtime,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Parse => write!(f, "parse error"),
            ErrorKind::Runtime => write!(f, "runtime error"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{} at {}: {}", .internal_error.kind(), .position, .internal_error)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        self.internal_error.kind()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::PropertyNotFound { .. } => "PropertyNotFound",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::OperandTypeMismatch { .. } => "OperandTypeMismatch",
            ErrorImpl::NotAnObject { .. } => "NotAnObject",
            ErrorImpl::InvalidHandle { .. } => "InvalidHandle",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::MalformedNode { .. } => "MalformedNode",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("Add a closing `\"` before the end of the line"))
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Split the expression or block into smaller statements",
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` must be assigned before it is read",
                variable
            )),
            ErrorImpl::PropertyNotFound { property } => ErrorTip::Suggestion(format!(
                "Property `{}` must be assigned before it is read",
                property
            )),
            ErrorImpl::InvalidHandle { .. } => ErrorTip::Suggestion(String::from(
                "The object was deleted earlier and can no longer be used",
            )),
            _ => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Parse errors
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unterminated string literal: {token}")]
    UnterminatedString { token: String },
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },

    // Runtime errors
    #[error("missing identifier: [{variable}]")]
    VariableNotDeclared { variable: String },
    #[error("missing property: [{property}]")]
    PropertyNotFound { property: String },
    #[error("types do not match: expected {expected}, received {received}")]
    TypeMatchError { expected: String, received: String },
    #[error("operand types do not match for `{operator}`: {left} and {right}")]
    OperandTypeMismatch {
        operator: String,
        left: String,
        right: String,
    },
    #[error("cannot access property [{segment}] on {received}")]
    NotAnObject { segment: String, received: String },
    #[error("invalid object handle #{handle}")]
    InvalidHandle { handle: u64 },
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown operator `{operator}`")]
    UnknownOperator { operator: String },
    #[error("malformed {kind} node")]
    MalformedNode { kind: String },
}

impl ErrorImpl {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::UnterminatedString { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Parse,
            _ => ErrorKind::Runtime,
        }
    }
}
