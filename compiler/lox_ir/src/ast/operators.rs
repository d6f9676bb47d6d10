//! Binary and Unary Operators
//!
//! Each operator knows the token kind it is written with, so trees built
//! without a parser still carry a correct operator token.

use crate::{Token, TokenKind};

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    /// Token kind this operator is written with.
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Star,
            Self::Div => TokenKind::Slash,
            Self::Eq => TokenKind::EqualEqual,
            Self::NotEq => TokenKind::BangEqual,
            Self::Lt => TokenKind::Less,
            Self::LtEq => TokenKind::LessEqual,
            Self::Gt => TokenKind::Greater,
            Self::GtEq => TokenKind::GreaterEqual,
        }
    }

    /// Map a token kind to the binary operator it denotes, if any.
    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::EqualEqual => Some(Self::Eq),
            TokenKind::BangEqual => Some(Self::NotEq),
            TokenKind::Less => Some(Self::Lt),
            TokenKind::LessEqual => Some(Self::LtEq),
            TokenKind::Greater => Some(Self::Gt),
            TokenKind::GreaterEqual => Some(Self::GtEq),
            TokenKind::Bang => None,
        }
    }

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        self.token_kind().as_symbol()
    }

    /// Synthesize the operator token for this operator on `line`.
    pub fn token(self, line: u32) -> Token {
        Token::synthetic(self.token_kind(), line)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Numeric negation `-`.
    Neg,
    /// Logical not `!`.
    Not,
}

impl UnaryOp {
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Neg => TokenKind::Minus,
            Self::Not => TokenKind::Bang,
        }
    }

    pub const fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(Self::Neg),
            TokenKind::Bang => Some(Self::Not),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        self.token_kind().as_symbol()
    }

    pub fn token(self, line: u32) -> Token {
        Token::synthetic(self.token_kind(), line)
    }
}
