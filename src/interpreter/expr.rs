use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    interpreter::Interpreter,
    value::{Handle, Value},
};

/// Evaluates an expression node to a value.
pub fn eval_expression(interpreter: &mut Interpreter, expression: &Node) -> Result<Value, Error> {
    log::trace!("eval {}", expression.to_sexpr());

    match expression.kind {
        NodeKind::Expr => eval_expression(interpreter, expression.child(0)?),
        NodeKind::Number => expression
            .text()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: String::from(expression.text()),
                    },
                    expression.position,
                )
            }),
        NodeKind::StrLit => Ok(Value::String(String::from(expression.text()))),
        NodeKind::ObjLit => {
            let handle = interpreter.memory.heap.allocate();
            log::debug!("line {}: allocated {}", expression.position.line, handle);
            Ok(Value::Object(handle))
        }
        NodeKind::VarPath => read_varpath(interpreter, expression),
        NodeKind::Identifier => read_segments(interpreter, std::slice::from_ref(expression)),
        NodeKind::Operator => eval_binary_expr(interpreter, expression),
        _ => Err(Error::new(
            ErrorImpl::MalformedNode {
                kind: expression.kind.to_string(),
            },
            expression.position,
        )),
    }
}

/// Evaluates a loop or branch condition; only integers are allowed, nonzero is true.
pub fn eval_condition(interpreter: &mut Interpreter, condition: &Node) -> Result<bool, Error> {
    match eval_expression(interpreter, condition)? {
        Value::Integer(i) => Ok(i != 0),
        other => Err(Error::new(
            ErrorImpl::TypeMatchError {
                expected: String::from("integer"),
                received: String::from(other.type_name()),
            },
            condition.position,
        )),
    }
}

fn eval_binary_expr(interpreter: &mut Interpreter, expression: &Node) -> Result<Value, Error> {
    let operator = expression.text();
    // Both operands are always evaluated; there is no short-circuiting.
    let left = eval_expression(interpreter, expression.child(0)?)?;
    let right = eval_expression(interpreter, expression.child(1)?)?;
    let position = expression.position;

    if operator == "==" || operator == "!=" {
        let equal = match (&left, &right) {
            (Value::Null, Value::Null) => true,
            (Value::Integer(l), Value::Integer(r)) => l == r,
            (Value::String(l), Value::String(r)) => l == r,
            (Value::Object(l), Value::Object(r)) => l == r,
            _ => return Err(operand_mismatch(operator, &left, &right, position)),
        };
        return Ok(Value::from_bool(equal == (operator == "==")));
    }

    let (Value::Integer(l), Value::Integer(r)) = (&left, &right) else {
        return Err(operand_mismatch(operator, &left, &right, position));
    };
    let (l, r) = (*l, *r);

    let value = match operator {
        "||" => Value::from_bool(l != 0 || r != 0),
        "&&" => Value::from_bool(l != 0 && r != 0),
        ">=" => Value::from_bool(l >= r),
        "<=" => Value::from_bool(l <= r),
        ">" => Value::from_bool(l > r),
        "<" => Value::from_bool(l < r),
        "+" => Value::Integer(l.wrapping_add(r)),
        "-" => Value::Integer(l.wrapping_sub(r)),
        "*" => Value::Integer(l.wrapping_mul(r)),
        "/" => {
            if r == 0 {
                return Err(Error::new(ErrorImpl::DivisionByZero, position));
            }
            Value::Integer(l.wrapping_div(r))
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::UnknownOperator {
                    operator: String::from(operator),
                },
                position,
            ))
        }
    };

    Ok(value)
}

fn operand_mismatch(operator: &str, left: &Value, right: &Value, position: Position) -> Error {
    Error::new(
        ErrorImpl::OperandTypeMismatch {
            operator: String::from(operator),
            left: String::from(left.type_name()),
            right: String::from(right.type_name()),
        },
        position,
    )
}

/// Reads the value a variable path refers to.
pub fn read_varpath(interpreter: &Interpreter, path: &Node) -> Result<Value, Error> {
    if path.children.is_empty() {
        return Err(Error::new(
            ErrorImpl::MalformedNode {
                kind: path.kind.to_string(),
            },
            path.position,
        ));
    }

    read_segments(interpreter, &path.children)
}

/// Walks `a.b.c`: `a` from the stack, then one property lookup per segment.
///
/// Every object handle met on the way, including the final value, must refer
/// to a live object.
fn read_segments(interpreter: &Interpreter, segments: &[Node]) -> Result<Value, Error> {
    let memory = &interpreter.memory;
    let mut value: Option<&Value> = None;

    for segment in segments {
        let name = segment.text();

        let found = match value {
            None => memory.get(name).ok_or_else(|| {
                Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: String::from(name),
                    },
                    segment.position,
                )
            })?,
            Some(container) => {
                let handle = expect_object(container, segment)?;
                // `container` was checked live when it was read.
                let object = memory.heap.get(handle).ok_or_else(|| invalid_handle(handle, segment))?;
                object.properties.get(name).ok_or_else(|| {
                    Error::new(
                        ErrorImpl::PropertyNotFound {
                            property: String::from(name),
                        },
                        segment.position,
                    )
                })?
            }
        };

        if let Value::Object(handle) = found {
            if !memory.heap.is_live(*handle) {
                return Err(invalid_handle(*handle, segment));
            }
        }

        value = Some(found);
    }

    value.cloned().ok_or_else(|| {
        Error::new(
            ErrorImpl::MalformedNode {
                kind: NodeKind::VarPath.to_string(),
            },
            Position::null(),
        )
    })
}

/// Stores `value` at a variable path.
///
/// A single segment always targets the stack and creates the binding when
/// missing. Longer paths must resolve every segment but the last to a live
/// object; only the final property is created or overwritten.
pub fn write_varpath(interpreter: &mut Interpreter, path: &Node, value: Value) -> Result<(), Error> {
    let Some((last, prefix)) = path.children.split_last() else {
        return Err(Error::new(
            ErrorImpl::MalformedNode {
                kind: path.kind.to_string(),
            },
            path.position,
        ));
    };

    if prefix.is_empty() {
        interpreter.memory.set(last.text(), value);
        return Ok(());
    }

    let container = read_segments(interpreter, prefix)?;
    let handle = expect_object(&container, last)?;

    let object = interpreter
        .memory
        .heap
        .get_mut(handle)
        .ok_or_else(|| invalid_handle(handle, last))?;
    object.properties.insert(String::from(last.text()), value);

    Ok(())
}

/// The handle inside `value`, which is being dereferenced to reach `segment`.
fn expect_object(value: &Value, segment: &Node) -> Result<Handle, Error> {
    match value {
        Value::Object(handle) => Ok(*handle),
        other => Err(Error::new(
            ErrorImpl::NotAnObject {
                segment: String::from(segment.text()),
                received: String::from(other.type_name()),
            },
            segment.position,
        )),
    }
}

fn invalid_handle(handle: Handle, segment: &Node) -> Error {
    Error::new(ErrorImpl::InvalidHandle { handle: handle.0 }, segment.position)
}
