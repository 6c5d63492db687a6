//! Diagnostic system for gosp.
//!
//! Every lexical, syntactic and type error in the language core becomes a
//! [`Diagnostic`]: an [`ErrorCode`], a message, and the [`Location`] where the
//! offending construct begins. Rendering comes in two shapes:
//!
//! - [`snippet`]: the plain transcript form (source line, caret, tilde
//!   underline, `location: message`).
//! - [`emitter`]: the CLI form, optionally colored.
//!
//! [`Location`]: gosp_lexer_core::Location

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod snippet;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCode, Phase};
