//! The expression tree.

use std::fmt;
use std::sync::Arc;

use gosp_types::ExprType;

use crate::Function;

/// A node of the single gosp tree type: parsed syntax and runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// No value. Produced by `defun` and by missing arguments.
    None,
    /// Identifier. Bound names resolve through the binding stack; unbound
    /// ones are plain symbols.
    Id(String),
    Str(String),
    Int(i64),
    Double(f64),
    List(Vec<Expression>),
    /// A call, pending until evaluated.
    Func {
        function: Arc<Function>,
        args: Vec<Expression>,
    },
    /// `(let name value body)`
    Let {
        name: String,
        value: Box<Expression>,
        body: Box<Expression>,
    },
}

impl Expression {
    /// Representative value of `ty`, used as a type-checking placeholder.
    ///
    /// Functions have no representative value and yield `None`.
    pub fn zero_value(ty: &ExprType) -> Expression {
        match ty {
            ExprType::Id => Expression::Id(String::new()),
            ExprType::Str => Expression::Str(String::new()),
            ExprType::Int => Expression::Int(0),
            ExprType::Double => Expression::Double(0.0),
            ExprType::List(_) => Expression::List(Vec::new()),
            ExprType::None | ExprType::Function(_) => Expression::None,
        }
    }

    /// Numeric view of an evaluated value; non-numbers count as `0.0`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "int arguments to double parameters widen like any float conversion"
    )]
    pub fn as_f64(&self) -> f64 {
        match self {
            Expression::Double(value) => *value,
            Expression::Int(value) => *value as f64,
            _ => 0.0,
        }
    }

    /// Convert an evaluated value to fit a parameter of type `ty`.
    ///
    /// Only `int` to `double` changes anything.
    pub fn coerce_to(self, ty: &ExprType) -> Expression {
        match (ty, self) {
            (ExprType::Double, value @ Expression::Int(_)) => Expression::Double(value.as_f64()),
            (_, value) => value,
        }
    }
}

/// Values render as the transcript shows them: doubles with six fractional
/// digits, lists as `[a b c]`, `None` as `undefined`. Unevaluated calls and
/// lets render in source form.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::None => f.write_str("undefined"),
            Expression::Id(text) | Expression::Str(text) => f.write_str(text),
            Expression::Int(value) => write!(f, "{value}"),
            Expression::Double(value) => write!(f, "{value:.6}"),
            Expression::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Expression::Func { function, args } => {
                write!(f, "({}", function.id)?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                f.write_str(")")
            }
            Expression::Let { name, value, body } => write!(f, "(let {name} {value} {body})"),
        }
    }
}

#[cfg(test)]
mod tests;
