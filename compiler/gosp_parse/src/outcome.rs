//! Commit-aware result of a grammar alternative.
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `ConsumedOk` | Alternative matched |
//! | `ConsumedErr` | Alternative recognized its keyword, then failed: report |
//! | `EmptyErr` | Not this alternative: roll back, try the next |
//!
//! `(let` followed by garbage is a `let` error, not a call to a function
//! named `let`.

use crate::ParseError;

#[derive(Debug)]
pub enum ParseOutcome<T> {
    ConsumedOk { value: T },
    ConsumedErr { error: ParseError },
    EmptyErr { error: ParseError },
}

impl<T> ParseOutcome<T> {
    #[cold]
    pub fn empty_err(error: ParseError) -> Self {
        ParseOutcome::EmptyErr { error }
    }

    /// Lift a committed parse: any error is a hard error.
    pub fn committed(result: Result<T, ParseError>) -> Self {
        match result {
            Ok(value) => ParseOutcome::ConsumedOk { value },
            Err(error) => ParseOutcome::ConsumedErr { error },
        }
    }
}

#[cfg(test)]
mod tests;
