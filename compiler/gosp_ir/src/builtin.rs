//! Builtin function identification.

use gosp_types::{ExprType, Signature};

/// Functions every interpreter state starts with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    /// `(+ double...)`, folds from `0.0`
    Add,
    /// `(- double double)`
    Sub,
    /// `(* double...)`, folds from `1.0`
    Mul,
    /// `(/ double double)`, division by zero yields `0.0`
    Div,
    /// `(map id list)`
    Map,
}

impl Builtin {
    /// Registration order of a fresh state.
    pub const ALL: &[Builtin] = &[
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Map,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Map => "map",
        }
    }

    pub fn signature(self) -> Signature {
        match self {
            Builtin::Add | Builtin::Mul => {
                Signature::new(vec![], Some(ExprType::Double), Some(ExprType::Double))
            }
            Builtin::Sub | Builtin::Div => Signature::new(
                vec![ExprType::Double, ExprType::Double],
                None,
                Some(ExprType::Double),
            ),
            Builtin::Map => Signature::new(
                vec![ExprType::Id, ExprType::any_list()],
                None,
                Some(ExprType::any_list()),
            ),
        }
    }
}
