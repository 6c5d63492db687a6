//! Structural type descriptors for gosp.
//!
//! Types are compared by shape, never by name: two list types are the same
//! when their element types are, and a list whose element type is unknown
//! (an empty literal, or the `list` parameter type) matches any list.
//!
//! - [`ExprType::same`]: structural equality with the list wildcard
//! - [`ExprType::simplify`]: the value type of an expression
//! - [`ExprType::accepts`]: parameter compatibility (`same` plus int-to-double)

use std::fmt;
use std::sync::Arc;

/// Type of an expression.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprType {
    /// No value: uninitialized placeholders and `defun` results.
    None,
    Id,
    Str,
    Int,
    Double,
    /// List with an optional element type. `None` is a wildcard.
    List(Option<Box<ExprType>>),
    Function(Arc<Signature>),
}

/// Function signature: fixed parameters, an optional variadic tail, and the
/// declared return type.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Signature {
    pub fixed: Vec<ExprType>,
    pub variadic: Option<ExprType>,
    pub returns: Option<ExprType>,
}

impl Signature {
    pub fn new(fixed: Vec<ExprType>, variadic: Option<ExprType>, returns: Option<ExprType>) -> Self {
        Signature {
            fixed,
            variadic,
            returns,
        }
    }

    /// Number of fixed parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.fixed.len()
    }
}

impl ExprType {
    /// `list` with a known element type.
    pub fn list_of(element: ExprType) -> Self {
        ExprType::List(Some(Box::new(element)))
    }

    /// `list` with an unknown element type.
    pub const fn any_list() -> Self {
        ExprType::List(None)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExprType::None => "none",
            ExprType::Id => "id",
            ExprType::Str => "str",
            ExprType::Int => "int",
            ExprType::Double => "double",
            ExprType::List(_) => "list",
            ExprType::Function(_) => "function",
        }
    }

    /// Resolve a parameter type name as written in `defun`.
    ///
    /// `list` names a list of unknown element type; `function` a signature
    /// with no parameters and no declared return.
    pub fn from_type_name(name: &str) -> Option<ExprType> {
        Some(match name {
            "function" => ExprType::Function(Arc::default()),
            "list" => ExprType::any_list(),
            "id" => ExprType::Id,
            "str" => ExprType::Str,
            "int" => ExprType::Int,
            "double" => ExprType::Double,
            _ => return None,
        })
    }

    /// Structural equality.
    ///
    /// Kinds must match. For lists, element types must be the same unless
    /// either side is unknown. Function types match any function type.
    pub fn same(&self, other: &ExprType) -> bool {
        match (self, other) {
            (ExprType::List(a), ExprType::List(b)) => match (a, b) {
                (Some(a), Some(b)) => a.same(b),
                _ => true,
            },
            (ExprType::Function(_), ExprType::Function(_)) => true,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }

    /// The type of the value an expression of this type produces.
    ///
    /// A function collapses to its return type (`None` if undeclared); list
    /// element types are simplified recursively; scalars are unchanged.
    pub fn simplify(&self) -> ExprType {
        match self {
            ExprType::Function(signature) => signature
                .returns
                .as_ref()
                .map_or(ExprType::None, ExprType::simplify),
            ExprType::List(Some(element)) => ExprType::list_of(element.simplify()),
            other => other.clone(),
        }
    }

    /// Whether an argument of type `actual` may fill a parameter of this
    /// type. `int` widens to `double`; everything else must be `same`.
    pub fn accepts(&self, actual: &ExprType) -> bool {
        matches!((self, actual), (ExprType::Double, ExprType::Int)) || self.same(actual)
    }
}

/// `list of T` when the element type is known, the bare kind name otherwise.
impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprType::List(Some(element)) => write!(f, "list of {element}"),
            other => f.write_str(other.name()),
        }
    }
}
