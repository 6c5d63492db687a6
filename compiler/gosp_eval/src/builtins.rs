//! Builtin function implementations.
//!
//! Arguments arrive unevaluated and are evaluated one at a time. Non-numeric
//! operands of the arithmetic builtins count as `0.0`.

use gosp_ir::{Builtin, Expression};

use crate::InterpreterState;

pub(crate) fn call(state: &mut InterpreterState, builtin: Builtin, args: &[Expression]) -> Expression {
    match builtin {
        Builtin::Add => fold(state, args, 0.0, |acc, x| acc + x),
        Builtin::Mul => fold(state, args, 1.0, |acc, x| acc * x),
        Builtin::Sub => {
            let (a, b) = binary(state, args);
            Expression::Double(a - b)
        }
        Builtin::Div => {
            let (a, b) = binary(state, args);
            Expression::Double(if b == 0.0 { 0.0 } else { a / b })
        }
        Builtin::Map => map(state, args),
    }
}

fn number(state: &mut InterpreterState, arg: Option<&Expression>) -> f64 {
    arg.map_or(0.0, |arg| state.evaluate(arg).as_f64())
}

fn fold(
    state: &mut InterpreterState,
    args: &[Expression],
    init: f64,
    op: impl Fn(f64, f64) -> f64,
) -> Expression {
    let mut acc = init;
    for arg in args {
        acc = op(acc, number(state, Some(arg)));
    }
    Expression::Double(acc)
}

fn binary(state: &mut InterpreterState, args: &[Expression]) -> (f64, f64) {
    let a = number(state, args.first());
    let b = number(state, args.get(1));
    (a, b)
}

/// `(map f list)`: apply the function named by `f` to each element.
///
/// An unknown function, or a second argument that is not a list, yields an
/// empty list.
fn map(state: &mut InterpreterState, args: &[Expression]) -> Expression {
    let name = args.first().map(|arg| state.evaluate(arg));
    let list = args.get(1).map(|arg| state.evaluate(arg));
    let (Some(Expression::Id(name)), Some(Expression::List(items))) = (name, list) else {
        return Expression::List(Vec::new());
    };
    let Some(function) = state.find_function(&name).cloned() else {
        tracing::debug!(function = %name, "map over unknown function");
        return Expression::List(Vec::new());
    };
    Expression::List(
        items
            .into_iter()
            .map(|item| state.call(&function, std::slice::from_ref(&item)))
            .collect(),
    )
}
