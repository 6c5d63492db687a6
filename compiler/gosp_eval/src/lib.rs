//! Interpreter state and evaluator for gosp.
//!
//! [`InterpreterState`] is the whole mutable world of one session: the
//! function registry (builtins plus every `defun`) and the binding stack.
//! The parser type-checks against it, pushing placeholder bindings while it
//! walks `let` and `defun` bodies; the evaluator pushes real values.
//!
//! Bindings are dynamically scoped: a user function body sees its parameters
//! on top of whatever the caller has bound at call time.

mod builtins;
mod evaluator;
mod scope_guard;
mod state;
mod typing;

pub use scope_guard::ScopedState;
pub use state::{Binding, InterpreterState};
