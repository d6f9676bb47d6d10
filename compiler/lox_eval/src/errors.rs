//! Runtime errors raised by the evaluator.
//!
//! Operator functions fail with a bare `RuntimeErrorKind`; the interpreter
//! attaches the operator token to produce a `RuntimeError`. The kind's
//! `Display` is the user-facing message.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Token, Value};

/// Result of evaluating an expression or executing a statement.
pub type EvalResult<T = Value> = Result<T, RuntimeError>;

/// Result of applying an operator to already-evaluated operands.
pub type OpResult = Result<Value, RuntimeErrorKind>;

/// Typed category of a runtime error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RuntimeErrorKind {
    /// Unary `-` applied to a non-number.
    #[error("Operand must be a number.")]
    OperandNotNumber,
    /// Arithmetic or comparison with a non-number on either side.
    #[error("Operands must be numbers.")]
    OperandsNotNumbers,
    /// `+` with operands that are not both numbers or both strings.
    #[error("Operands must be two numbers or two strings.")]
    InvalidAddOperands,
}

impl RuntimeErrorKind {
    pub fn error_code(self) -> ErrorCode {
        match self {
            Self::OperandNotNumber => ErrorCode::E6001,
            Self::OperandsNotNumbers => ErrorCode::E6002,
            Self::InvalidAddOperands => ErrorCode::E6003,
        }
    }
}

/// A runtime error tagged with the operator that raised it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    /// Operator token, used for the reported line.
    pub operator: Token,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, operator: Token) -> Self {
        RuntimeError {
            kind,
            operator,
            message: kind.to_string(),
        }
    }

    /// Build the diagnostic handed to the error reporter.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.error_code(), self.operator.line)
            .with_message(self.message.as_str())
            .with_label(
                self.operator.span,
                format!("`{}` applied here", self.operator.lexeme),
            )
    }
}
