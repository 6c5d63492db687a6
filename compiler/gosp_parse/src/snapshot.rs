//! Snapshots for speculative parsing.
//!
//! A snapshot is everything a failed alternative may have changed: the
//! cursor, the binding stack depth (placeholders pushed for `let` and `defun`
//! bodies) and the function count (a `defun` nested in the failed attempt).
//!
//! Bindings are only ever pushed above the snapshot depth, and functions only
//! appended, so truncating both restores the state exactly.

use gosp_eval::InterpreterState;
use gosp_lexer_core::Position;
use tracing::trace;

use crate::{ParseError, Parser};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserSnapshot {
    pub position: Position,
    pub bindings: usize,
    pub functions: usize,
}

impl Parser<'_> {
    pub fn snapshot(&self, state: &InterpreterState) -> ParserSnapshot {
        ParserSnapshot {
            position: self.position(),
            bindings: state.binding_count(),
            functions: state.function_count(),
        }
    }

    pub fn restore(&mut self, state: &mut InterpreterState, snapshot: ParserSnapshot) {
        self.set_position(snapshot.position);
        state.truncate_bindings(snapshot.bindings);
        state.truncate_functions(snapshot.functions);
    }

    /// Run `f`; on `Err`, put the parser and the state back as they were.
    pub fn transaction<T>(
        &mut self,
        state: &mut InterpreterState,
        f: impl FnOnce(&mut Self, &mut InterpreterState) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let snapshot = self.snapshot(state);
        let result = f(self, state);
        if let Err(error) = &result {
            trace!(message = %error.message, "rollback");
            self.restore(state, snapshot);
        }
        result
    }
}
