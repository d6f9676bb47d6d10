//! Operator tokens.
//!
//! The evaluator only ever sees operator tokens: they name the operator that
//! produced a runtime error and carry the location used to report it.

use std::fmt;

use crate::Span;

/// Kind of an operator token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Bang,
    BangEqual,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Minus,
    Plus,
    Slash,
    Star,
}

impl TokenKind {
    /// Source text of this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Bang => "!",
            Self::BangEqual => "!=",
            Self::EqualEqual => "==",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Slash => "/",
            Self::Star => "*",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// An operator token with its source location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Text of the token as written in the source.
    pub lexeme: String,
    /// 1-based source line.
    pub line: u32,
    pub span: Span,
}

impl Token {
    /// Create a token with an explicit lexeme and location.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            span,
        }
    }

    /// Create a token whose lexeme is the canonical operator symbol.
    ///
    /// Used when trees are built without source text; the span is `DUMMY`.
    pub fn synthetic(kind: TokenKind, line: u32) -> Self {
        Token::new(kind, kind.as_symbol(), line, Span::DUMMY)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` at line {}", self.lexeme, self.line)
    }
}
