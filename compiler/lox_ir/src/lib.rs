//! Lox IR - tree and value types shared by the evaluator.
//!
//! This crate contains the data the evaluation core consumes:
//! - Spans and operator tokens for source locations
//! - Operator enums (`BinaryOp`, `UnaryOp`)
//! - Expression and statement trees (`Expr`, `Stmt`)
//! - The runtime `Value` and its total semantic operations
//!
//! Trees are built by a parser (not part of this workspace) or by the
//! constructors on `Expr` and `Stmt`, and are read-only afterwards.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;
mod value;

pub use ast::{BinaryOp, Expr, Stmt, UnaryOp};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use value::Value;
