//! gosp driver.
//!
//! The host-facing surface of the interpreter:
//!
//! - [`new_state`] and [`evaluate_source`]: one buffer in, one transcript out
//! - [`evaluate_sources`]: the same over several buffers, keeping every
//!   diagnostic
//! - [`SessionTable`]: one persistent [`InterpreterState`] per session key,
//!   evaluations serialized per session
//! - [`init_tracing`]: subscriber setup for the `gosp` binary

mod error;
mod session;
mod tracing_setup;
mod transcript;

pub use error::DriverError;
pub use gosp_lexer_core::{Location, SourceMap};
pub use gosp_parse::InterpreterState;
pub use session::{Evaluation, HistoryEntry, Session, SessionConfig, SessionTable};
pub use tracing_setup::init_tracing;
pub use transcript::{evaluate_source, evaluate_sources, new_state, EvalReport};
