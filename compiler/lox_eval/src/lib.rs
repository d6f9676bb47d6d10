//! Lox Eval - evaluation core for Lox programs.
//!
//! Turns already-parsed statement trees into output lines and runtime error
//! reports.
//!
//! # Architecture
//!
//! - `Interpreter::interpret`: runs a statement batch, fail-fast, reporting
//!   the first `RuntimeError` to a host-owned `RuntimeErrorReporter`
//! - `Interpreter::execute` / `Interpreter::evaluate`: recursive descent over
//!   the closed `Stmt` / `Expr` enums
//! - `evaluate_binary` / `evaluate_unary`: operator semantics on values
//! - `PrintHandler`: the output channel for `print`
//!
//! # Example
//!
//! ```
//! use lox_diagnostic::{CollectingReporter, RuntimeErrorReporter};
//! use lox_eval::{buffer_handler, InterpreterBuilder};
//! use lox_ir::{BinaryOp, Expr, Stmt};
//!
//! let interpreter = InterpreterBuilder::new()
//!     .print_handler(buffer_handler())
//!     .build();
//! let mut reporter = CollectingReporter::new();
//!
//! let sum = Expr::binary(Expr::literal(1.0), BinaryOp::Add, 1, Expr::literal(1.0));
//! interpreter.interpret(&[Stmt::print(sum)], &mut reporter);
//!
//! assert_eq!(interpreter.get_print_output(), "2\n");
//! assert!(!reporter.had_runtime_error());
//! ```

pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod tracing_setup;
mod unary_operators;

#[cfg(test)]
mod tests;

pub use errors::{EvalResult, OpResult, RuntimeError, RuntimeErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use tracing_setup::init_tracing;
pub use unary_operators::evaluate_unary;
