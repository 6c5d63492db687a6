//! Parse errors.

use std::fmt;

use gosp_diagnostic::{Diagnostic, ErrorCode};
use gosp_lexer::LexError;
use gosp_lexer_core::Location;

/// A lexical, syntactic or type error with the location where the offending
/// construct begins.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub location: Location,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, location: Location) -> Self {
        ParseError {
            code,
            message: message.into(),
            location,
        }
    }

    /// An error token surfaced by the parser.
    #[cold]
    pub fn from_lex(error: &LexError, location: Location) -> Self {
        ParseError::new(error.code(), error.to_string(), location)
    }

    #[cold]
    pub fn expected(expected: impl fmt::Display, found: impl fmt::Display, location: Location) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("Expected {expected}, got {found}"),
            location,
        )
    }

    #[cold]
    pub fn unclosed(what: &str, location: Location) -> Self {
        ParseError::new(ErrorCode::E1003, format!("unclosed {what}"), location)
    }

    #[cold]
    pub fn already_defined(name: &str, location: Location) -> Self {
        ParseError::new(
            ErrorCode::E1007,
            format!("'{name}' is already defined"),
            location,
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code, self.message.clone(), self.location.clone())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        Diagnostic::error(error.code, error.message, error.location)
    }
}
