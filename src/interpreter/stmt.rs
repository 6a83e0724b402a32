use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
};

use super::{
    expr::{eval_condition, eval_expression, read_varpath, write_varpath},
    interpreter::Interpreter,
    value::Value,
};

pub fn exec_statement(interpreter: &mut Interpreter, statement: &Node) -> Result<(), Error> {
    match statement.kind {
        NodeKind::Prog | NodeKind::Block => {
            for child in &statement.children {
                exec_statement(interpreter, child)?;
            }
            Ok(())
        }
        NodeKind::Let => {
            let value = eval_expression(interpreter, statement.child(1)?)?;
            log::debug!(
                "line {}: let {} = {}",
                statement.position.line,
                statement.child(0)?.to_sexpr(),
                value
            );
            write_varpath(interpreter, statement.child(0)?, value)
        }
        NodeKind::Dim => exec_dim(interpreter, statement),
        NodeKind::If => exec_if(interpreter, statement),
        NodeKind::While => {
            let condition = statement.child(0)?;
            let body = statement.child(1)?;

            while eval_condition(interpreter, condition)? {
                exec_statement(interpreter, body)?;
            }
            Ok(())
        }
        NodeKind::Delete => exec_delete(interpreter, statement),
        _ => Err(Error::new(
            ErrorImpl::MalformedNode {
                kind: statement.kind.to_string(),
            },
            statement.position,
        )),
    }
}

/// Binds every declared name to null, or the single name to its initializer.
fn exec_dim(interpreter: &mut Interpreter, statement: &Node) -> Result<(), Error> {
    let (names, initializer) = match statement.children.split_last() {
        Some((last, rest)) if last.kind != NodeKind::Identifier => (rest, Some(last)),
        _ => (statement.children.as_slice(), None),
    };

    let value = match initializer {
        Some(expression) => eval_expression(interpreter, expression)?,
        None => Value::Null,
    };

    for name in names {
        log::debug!("line {}: dim {} = {}", statement.position.line, name.text(), value);
        interpreter.memory.set(name.text(), value.clone());
    }

    Ok(())
}

/// Takes the first branch whose condition holds, else the `else` branch.
fn exec_if(interpreter: &mut Interpreter, statement: &Node) -> Result<(), Error> {
    if eval_condition(interpreter, statement.child(0)?)? {
        return exec_statement(interpreter, statement.child(1)?);
    }

    for branch in statement.children.iter().skip(2) {
        match branch.kind {
            NodeKind::ElseIf => {
                if eval_condition(interpreter, branch.child(0)?)? {
                    return exec_statement(interpreter, branch.child(1)?);
                }
            }
            NodeKind::Else => return exec_statement(interpreter, branch.child(0)?),
            _ => {
                return Err(Error::new(
                    ErrorImpl::MalformedNode {
                        kind: statement.kind.to_string(),
                    },
                    branch.position,
                ))
            }
        }
    }

    Ok(())
}

fn exec_delete(interpreter: &mut Interpreter, statement: &Node) -> Result<(), Error> {
    let operand = statement.child(0)?;
    let value = read_varpath(interpreter, operand)?;

    let Value::Object(handle) = value else {
        return Err(Error::new(
            ErrorImpl::TypeMatchError {
                expected: String::from("object"),
                received: String::from(value.type_name()),
            },
            operand.position,
        ));
    };

    match interpreter.memory.heap.free(handle) {
        Some(_) => {
            log::debug!("line {}: freed {}", statement.position.line, handle);
            Ok(())
        }
        None => Err(Error::new(
            ErrorImpl::InvalidHandle { handle: handle.0 },
            operand.position,
        )),
    }
}
