//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operator and value sets are closed, so
//! every combination is matched exhaustively. Both operands are already
//! evaluated when these functions run.

use lox_ir::{BinaryOp, Value};

use crate::errors::{OpResult, RuntimeErrorKind};

/// Apply a numeric operator, failing unless both operands are numbers.
#[inline]
fn numeric(left: &Value, right: &Value, apply: fn(f64, f64) -> Value) -> OpResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(apply(*a, *b)),
        _ => Err(RuntimeErrorKind::OperandsNotNumbers),
    }
}

/// Evaluate a binary operation using direct pattern matching.
///
/// Arithmetic follows IEEE 754: division by zero yields an infinity or NaN,
/// and every ordering comparison involving NaN is false.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> OpResult {
    match op {
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub => numeric(left, right, |a, b| Value::Number(a - b)),
        BinaryOp::Mul => numeric(left, right, |a, b| Value::Number(a * b)),
        BinaryOp::Div => numeric(left, right, |a, b| Value::Number(a / b)),
        BinaryOp::Lt => numeric(left, right, |a, b| Value::Boolean(a < b)),
        BinaryOp::LtEq => numeric(left, right, |a, b| Value::Boolean(a <= b)),
        BinaryOp::Gt => numeric(left, right, |a, b| Value::Boolean(a > b)),
        BinaryOp::GtEq => numeric(left, right, |a, b| Value::Boolean(a >= b)),
        BinaryOp::Eq => Ok(Value::Boolean(left.is_equal(right))),
        BinaryOp::NotEq => Ok(Value::Boolean(!left.is_equal(right))),
    }
}

/// `+` is overloaded: numeric sum or string concatenation, never a mix.
fn eval_add(left: &Value, right: &Value) -> OpResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Text(a), Value::Text(b)) => {
            let mut result = String::with_capacity(a.len() + b.len());
            result.push_str(a);
            result.push_str(b);
            Ok(Value::string(result))
        }
        _ => Err(RuntimeErrorKind::InvalidAddOperands),
    }
}
