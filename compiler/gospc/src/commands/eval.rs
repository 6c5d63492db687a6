use gospc::{evaluate_sources, new_state, DriverError, SourceMap};

use super::{report, GlobalOptions};

/// Evaluate an expression given on the command line, as a buffer named `cli`.
pub fn eval_expr(text: &str, options: GlobalOptions) -> Result<(), DriverError> {
    let sources = SourceMap::single("cli", text);
    let mut state = new_state();
    let result = evaluate_sources(&mut state, &sources);
    report(&result, &sources, options)
}
