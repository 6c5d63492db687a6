//! Tree-walking evaluation.
//!
//! Evaluation has no error path: anything the parser accepted reduces to a
//! value of the type the parser computed for it.

use gosp_ir::{Expression, Function, FunctionImpl, UserFunction};
use gosp_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{builtins, InterpreterState};

impl InterpreterState {
    /// Reduce `expr` to a value.
    ///
    /// - calls run their function
    /// - identifiers resolve through the binding stack; unbound ones are
    ///   symbols and evaluate to themselves
    /// - lists evaluate element-wise, in order
    /// - `let` binds its evaluated value for the extent of its body
    pub fn evaluate(&mut self, expr: &Expression) -> Expression {
        ensure_sufficient_stack(|| match expr {
            Expression::Func { function, args } => self.call(function, args),
            Expression::Id(name) => self
                .resolve(name)
                .cloned()
                .unwrap_or_else(|| Expression::Id(name.clone())),
            Expression::List(items) => {
                Expression::List(items.iter().map(|item| self.evaluate(item)).collect())
            }
            Expression::Let { name, value, body } => {
                let value = self.evaluate(value);
                self.with_binding(name.clone(), value, |scoped| scoped.evaluate(body))
            }
            Expression::None
            | Expression::Str(_)
            | Expression::Int(_)
            | Expression::Double(_) => expr.clone(),
        })
    }

    /// Invoke `function` on unevaluated `args`.
    pub fn call(&mut self, function: &Function, args: &[Expression]) -> Expression {
        trace!(function = %function.id, args = args.len(), "call");
        match &function.implementation {
            FunctionImpl::Builtin(builtin) => builtins::call(self, *builtin, args),
            FunctionImpl::User(user) => self.call_user(user, args),
        }
    }

    /// Arguments are evaluated in the caller's scope, then bound to the
    /// parameters on top of it for the body. Missing arguments bind `None`.
    fn call_user(&mut self, user: &UserFunction, args: &[Expression]) -> Expression {
        let mut bound = Vec::with_capacity(user.params.len());
        for (index, param) in user.params.iter().enumerate() {
            let value = match args.get(index) {
                Some(arg) => self.evaluate(arg).coerce_to(&param.ty),
                None => Expression::None,
            };
            bound.push((param.name.clone(), value));
        }
        self.with_bindings(bound, |scoped| scoped.evaluate(&user.body))
    }

    /// Evaluate and render for a transcript.
    pub fn to_display_string(&mut self, expr: &Expression) -> String {
        self.evaluate(expr).to_string()
    }
}
