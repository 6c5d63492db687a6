//! Error codes for all diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1003`) with the first digit
//! indicating the phase that raised it.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Type errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Character that does not start any token
    E0002,
    /// Invalid number literal
    E0003,
    /// Invalid escape sequence
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression, input ended
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Unknown type name in a parameter list
    E1005,
    /// Unknown function
    E1006,
    /// Identifier already defined
    E1007,

    // Type Errors (E2xxx)
    /// Type mismatch
    E2001,
    /// Too many arguments
    E2002,
    /// Too few arguments
    E2003,
}

/// Phase that owns a range of error codes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexer,
    Parser,
    Type,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }

    /// One-line summary used by `gosp explain`.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "character does not start any known token",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E0004 => "unknown escape character in string literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected an expression but the input ended",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected an identifier",
            ErrorCode::E1005 => "unknown type name",
            ErrorCode::E1006 => "call to an unknown function",
            ErrorCode::E1007 => "identifier is already defined in this scope",
            ErrorCode::E2001 => "type mismatch",
            ErrorCode::E2002 => "too many arguments",
            ErrorCode::E2003 => "too few arguments",
        }
    }

    pub fn phase(self) -> Phase {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 | ErrorCode::E0004 => {
                Phase::Lexer
            }
            ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1004
            | ErrorCode::E1005
            | ErrorCode::E1006
            | ErrorCode::E1007 => Phase::Parser,
            ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003 => Phase::Type,
        }
    }

    /// Look a code up by its textual form (`"E2001"`).
    pub fn parse(text: &str) -> Option<ErrorCode> {
        let text = text.trim();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
