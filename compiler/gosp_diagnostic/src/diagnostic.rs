//! Core diagnostic type.

use std::fmt;

use gosp_lexer_core::Location;

use crate::ErrorCode;

/// A single error: what went wrong and where the offending construct begins.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub location: Location,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>, location: Location) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            location,
        }
    }
}

/// `<source>:<line>:<column>: <message>`, the transcript form.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}
