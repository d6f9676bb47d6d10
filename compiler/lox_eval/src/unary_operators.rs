//! Unary operator implementations for the evaluator.

use lox_ir::{UnaryOp, Value};

use crate::errors::{OpResult, RuntimeErrorKind};

/// Evaluate a unary operation using direct pattern matching.
///
/// `!` accepts any value and negates its truthiness; `-` requires a number.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> OpResult {
    match (op, value) {
        (UnaryOp::Not, _) => Ok(Value::Boolean(!value.is_truthy())),
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Neg, _) => Err(RuntimeErrorKind::OperandNotNumber),
    }
}
