//! The `run` command: every file is one buffer, all evaluated against one state.

use gospc::{evaluate_sources, new_state, DriverError, SourceMap};

use super::{report, GlobalOptions};

pub fn run_files(paths: &[String], options: GlobalOptions) -> Result<(), DriverError> {
    let mut sources = SourceMap::new();
    for path in paths {
        sources
            .add_file(path)
            .map_err(|source| DriverError::read_file(path, source))?;
    }
    let mut state = new_state();
    let result = evaluate_sources(&mut state, &sources);
    report(&result, &sources, options)
}
