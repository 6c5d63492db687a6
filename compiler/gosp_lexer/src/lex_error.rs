//! Lexical errors.

use gosp_diagnostic::ErrorCode;
use thiserror::Error;

/// What went wrong while scanning one token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexError {
    #[error("{found:?} does not start any known token")]
    UnknownToken { found: char },

    /// A newline or the end of the buffer arrived before the closing `"`.
    #[error("unclosed string literal")]
    UnclosedString,

    #[error("{escape:?} unknown escape character")]
    UnknownEscape { escape: char },

    /// The digits matched the number shape but do not fit the target type.
    #[error("invalid number literal `{text}`: {reason}")]
    InvalidNumber { text: String, reason: String },
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnclosedString => ErrorCode::E0001,
            LexError::UnknownToken { .. } => ErrorCode::E0002,
            LexError::InvalidNumber { .. } => ErrorCode::E0003,
            LexError::UnknownEscape { .. } => ErrorCode::E0004,
        }
    }
}
