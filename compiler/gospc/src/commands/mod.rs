//! Command handlers for the `gosp` CLI.
//!
//! Shared helpers (`read_file`, `report`) live here in the module root.

use std::io::{self, IsTerminal};

use gosp_diagnostic::emitter::{ColorMode, TerminalEmitter};
use gospc::{DriverError, EvalReport, SourceMap};

mod eval;
mod explain;
mod lex;
mod repl;
mod run;

pub use eval::eval_expr;
pub use explain::explain_error;
pub use lex::lex_file;
pub use repl::run_repl;
pub use run::run_files;

/// Options that apply to every command.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalOptions {
    pub color: ColorMode,
}

pub(crate) fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|source| DriverError::read_file(path, source))
}

/// Print the transcript; render any diagnostics to stderr.
pub(crate) fn report(
    report: &EvalReport,
    sources: &SourceMap,
    options: GlobalOptions,
) -> Result<(), DriverError> {
    print!("{}", report.transcript);
    if !report.has_errors() {
        return Ok(());
    }
    let mut emitter = TerminalEmitter::stderr(options.color, io::stderr().is_terminal());
    for diagnostic in &report.diagnostics {
        let line = sources.line_text(diagnostic.location.source_index, diagnostic.location.line);
        emitter.emit(diagnostic, line.as_deref());
    }
    emitter.emit_summary(report.diagnostics.len());
    emitter.flush();
    Err(DriverError::Reported {
        count: report.diagnostics.len(),
    })
}
