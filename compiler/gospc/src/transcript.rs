//! Transcripts: every top-level expression of the input, evaluated in order.
//!
//! ```text
//! `(+ 1 2)` ->
//! Result: 3.000000
//! (sq 1 2)
//!        ^~
//! post-request:1:8: Too many arguments for sq: expected 1
//! ```
//!
//! A failed expression is skipped by [`Parser::skip_expression`] and the
//! transcript goes on; only the first error location is reported back.

use std::fmt::Write;

use gosp_diagnostic::{snippet, Diagnostic};
use gosp_lexer_core::{Location, SourceMap};
use gosp_parse::{InterpreterState, ParseError, Parser};
use tracing::{debug, instrument};

/// A state with only the builtins defined.
pub fn new_state() -> InterpreterState {
    InterpreterState::new()
}

/// Transcript plus every diagnostic, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalReport {
    pub transcript: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl EvalReport {
    pub fn first_error(&self) -> Option<&Location> {
        self.diagnostics.first().map(|diagnostic| &diagnostic.location)
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Evaluate `text` as one buffer named `name` against `state`.
///
/// Returns the transcript and the location of the first error, if any.
pub fn evaluate_source(
    state: &mut InterpreterState,
    name: &str,
    text: &str,
) -> (String, Option<Location>) {
    let sources = SourceMap::single(name, text);
    let report = evaluate_sources(state, &sources);
    let first_error = report.first_error().cloned();
    (report.transcript, first_error)
}

/// Evaluate every expression of every buffer of `sources`, in order.
#[instrument(level = "debug", skip_all, fields(sources = sources.len()))]
pub fn evaluate_sources(state: &mut InterpreterState, sources: &SourceMap) -> EvalReport {
    let mut parser = Parser::new(sources);
    let mut report = EvalReport::default();
    while parser.skip_whitespace() {
        let start = parser.position();
        match parser.parse_expression(state) {
            Ok(expr) => {
                let fragment = sources.fragment(start, parser.position());
                let result = state.to_display_string(&expr);
                let _ = write!(report.transcript, "`{fragment}` ->\nResult: {result}\n");
            }
            Err(error) => {
                debug!(location = %error.location, message = %error.message, "expression failed");
                write_error(&mut report, &mut parser, sources, error);
            }
        }
    }
    report
}

fn write_error(report: &mut EvalReport, parser: &mut Parser<'_>, sources: &SourceMap, error: ParseError) {
    let end = parser.skip_expression();
    let diagnostic = error.to_diagnostic();
    // An unclosed string swallows its line break; the underline stops short of it.
    let underline = sources
        .fragment(diagnostic.location.position(), end)
        .trim_end_matches(['\r', '\n'])
        .chars()
        .count();
    let line = sources.line_text(diagnostic.location.source_index, diagnostic.location.line);
    snippet::write_transcript_error(&mut report.transcript, &diagnostic, line.as_deref(), underline);
    report.diagnostics.push(diagnostic);
}
