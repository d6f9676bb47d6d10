//! Expression and statement trees.
//!
//! Trees are owned: each node exclusively owns its children through `Box`,
//! and nothing is shared or mutated after construction. Operator nodes store
//! both the operator the evaluator dispatches on and the token it was written
//! with; the constructors keep the two consistent.

mod operators;

pub use operators::{BinaryOp, UnaryOp};

use crate::{Token, Value};

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Value),
    Grouping(Box<Expr>),
    Unary {
        op: UnaryOp,
        operator: Token,
        right: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        operator: Token,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn nil() -> Self {
        Expr::Literal(Value::Nil)
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    /// Unary node with a synthesized operator token on `line`.
    pub fn unary(op: UnaryOp, line: u32, right: Expr) -> Self {
        Expr::Unary {
            op,
            operator: op.token(line),
            right: Box::new(right),
        }
    }

    /// Binary node with a synthesized operator token on `line`.
    pub fn binary(left: Expr, op: BinaryOp, line: u32, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            operator: op.token(line),
            right: Box::new(right),
        }
    }

    /// Unary node from a source token.
    ///
    /// Returns `None` if the token is not a unary operator.
    pub fn unary_from_token(operator: Token, right: Expr) -> Option<Self> {
        let op = UnaryOp::from_token_kind(operator.kind)?;
        Some(Expr::Unary {
            op,
            operator,
            right: Box::new(right),
        })
    }

    /// Binary node from a source token.
    ///
    /// Returns `None` if the token is not a binary operator.
    pub fn binary_from_token(left: Expr, operator: Token, right: Expr) -> Option<Self> {
        let op = BinaryOp::from_token_kind(operator.kind)?;
        Some(Expr::Binary {
            left: Box::new(left),
            op,
            operator,
            right: Box::new(right),
        })
    }
}

/// A statement node.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// Evaluate for effect and discard the result.
    Expression(Expr),
    /// Evaluate and write the rendered value as one output line.
    Print(Expr),
}

impl Stmt {
    pub fn expression(expr: Expr) -> Self {
        Stmt::Expression(expr)
    }

    pub fn print(expr: Expr) -> Self {
        Stmt::Print(expr)
    }

    /// Short name of the statement kind, for tracing.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Expression(_) => "expression",
            Stmt::Print(_) => "print",
        }
    }
}

#[cfg(test)]
mod tests;
