use std::fmt;

/// Error codes for runtime diagnostics.
///
/// E6xxx is the evaluation phase.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unary operand must be a number
    E6001,
    /// Both operands must be numbers
    E6002,
    /// `+` operands must be two numbers or two strings
    E6003,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E6001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
