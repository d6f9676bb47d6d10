//! Tree-walking interpreter.
//!
//! Three layers, each a plain recursive function over a closed enum:
//!
//! - `evaluate` reduces an `Expr` to a `Value`
//! - `execute` runs a `Stmt` for its side effect
//! - `interpret` runs a statement batch and reports the first failure
//!
//! Errors travel up as `Err(RuntimeError)` through `?` and are caught exactly
//! once, in `interpret`. Nothing is retained between statements.

mod builder;

pub use builder::InterpreterBuilder;

use lox_diagnostic::RuntimeErrorReporter;
use lox_ir::{Expr, Stmt, Token, Value};

use crate::errors::{EvalResult, RuntimeError, RuntimeErrorKind};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::unary_operators::evaluate_unary;

/// The evaluation core.
///
/// Holds only its output channel, so one interpreter can run any number of
/// batches (a REPL keeps a single instance across lines).
pub struct Interpreter {
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter that prints to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Run `statements` in order.
    ///
    /// The first runtime error abandons the rest of the batch and is handed to
    /// `reporter`. This never fails: the host keeps running and can inspect
    /// the reporter afterwards.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret<R>(&self, statements: &[Stmt], reporter: &mut R)
    where
        R: RuntimeErrorReporter + ?Sized,
    {
        for (index, stmt) in statements.iter().enumerate() {
            if let Err(error) = self.execute(stmt) {
                tracing::debug!(
                    index,
                    skipped = statements.len() - index - 1,
                    line = error.operator.line,
                    "runtime error: {error}"
                );
                reporter.report_runtime_error(error.to_diagnostic());
                return;
            }
        }
    }

    /// Execute one statement.
    pub fn execute(&self, stmt: &Stmt) -> EvalResult<()> {
        tracing::trace!(kind = stmt.kind_name(), "execute");
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.stringify());
            }
        }
        Ok(())
    }

    /// Evaluate an expression to a value.
    ///
    /// Binary operands are evaluated left then right, both before any type
    /// check; a failure in the left operand skips the right one.
    pub fn evaluate(&self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary {
                op,
                operator,
                right,
            } => {
                let operand = self.evaluate(right)?;
                evaluate_unary(&operand, *op)
                    .map_err(|kind| operator_error(kind, operator, &[&operand]))
            }
            Expr::Binary {
                left,
                op,
                operator,
                right,
            } => {
                let lhs = self.evaluate(left)?;
                let rhs = self.evaluate(right)?;
                evaluate_binary(&lhs, &rhs, *op)
                    .map_err(|kind| operator_error(kind, operator, &[&lhs, &rhs]))
            }
        }
    }

    /// Get all captured print output (empty unless a buffer handler is set).
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Clear captured print output.
    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
fn operator_error(kind: RuntimeErrorKind, operator: &Token, operands: &[&Value]) -> RuntimeError {
    let types: Vec<&str> = operands.iter().map(|v| v.type_name()).collect();
    tracing::trace!(operator = %operator.lexeme, operands = ?types, "operator rejected operands");
    RuntimeError::new(kind, operator.clone())
}
