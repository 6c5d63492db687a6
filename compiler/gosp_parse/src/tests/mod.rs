//! Parser tests.
//!
//! - `parser`: forms, typing and error reporting
//! - `snapshot`: rollback leaves cursor and state untouched
//! - `recovery`: token skipping after a failed expression

#![allow(clippy::unwrap_used, clippy::expect_used)]


use gosp_lexer_core::SourceMap;

use crate::{InterpreterState, ParseError, Parser};
use gosp_ir::Expression;

pub(super) fn parse_one(state: &mut InterpreterState, text: &str) -> Result<Expression, ParseError> {
    let sources = SourceMap::single("test", text);
    let mut parser = Parser::new(&sources);
    parser.parse_expression(state)
}

/// Parse and evaluate, panicking on a parse error.
pub(super) fn eval(state: &mut InterpreterState, text: &str) -> String {
    let expr = parse_one(state, text).unwrap_or_else(|error| panic!("{text}: {error}"));
    state.to_display_string(&expr)
}

pub(super) fn with_sq() -> InterpreterState {
    let mut state = InterpreterState::new();
    eval(&mut state, "(defun sq (x double) (* x x))");
    state
}
