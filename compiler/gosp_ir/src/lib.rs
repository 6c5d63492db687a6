//! Expression tree for gosp.
//!
//! One type, [`Expression`], serves both as parsed syntax and as runtime
//! value: evaluation reduces a tree to another tree made only of scalars,
//! identifiers and lists.
//!
//! Functions are shared through [`Arc`](std::sync::Arc) so an interpreter
//! state can move between threads and a user function body can be referenced
//! from every call site without copying.

mod builtin;
mod expression;
mod function;

pub use builtin::Builtin;
pub use expression::Expression;
pub use function::{Function, FunctionImpl, Param, UserFunction};
pub use gosp_types::{ExprType, Signature};
