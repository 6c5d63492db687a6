//! Structural typing of expressions against the live binding stack.
//!
//! The parser calls [`InterpreterState::type_of`] on every argument, list
//! element, bound value and function body it builds. Bindings hold values
//! (real or placeholder), so typing an identifier is typing whatever it
//! resolves to.

use gosp_ir::{ExprType, Expression};
use gosp_stack::ensure_sufficient_stack;

use crate::InterpreterState;

impl InterpreterState {
    /// Type of `expr`.
    ///
    /// Calls keep their function type; use [`simple_type_of`] for the type
    /// of the value a call produces.
    ///
    /// [`simple_type_of`]: Self::simple_type_of
    pub fn type_of(&mut self, expr: &Expression) -> ExprType {
        ensure_sufficient_stack(|| match expr {
            Expression::None => ExprType::None,
            Expression::Id(name) => match self.resolve(name) {
                None | Some(Expression::Id(_)) => ExprType::Id,
                Some(value) => {
                    let value = value.clone();
                    self.type_of(&value)
                }
            },
            Expression::Str(_) => ExprType::Str,
            Expression::Int(_) => ExprType::Int,
            Expression::Double(_) => ExprType::Double,
            Expression::List(items) => match items.first() {
                Some(first) => ExprType::list_of(self.simple_type_of(first)),
                None => ExprType::any_list(),
            },
            Expression::Func { function, .. } => function.ty(),
            Expression::Let { name, value, body } => {
                let bound = self.simple_type_of(value);
                self.with_binding(name.clone(), Expression::zero_value(&bound), |scoped| {
                    scoped.type_of(body)
                })
            }
        })
    }

    /// `type_of(expr).simplify()`
    pub fn simple_type_of(&mut self, expr: &Expression) -> ExprType {
        self.type_of(expr).simplify()
    }
}

#[cfg(test)]
mod tests;
