//! Function definitions: builtins and `defun`-defined functions.

use std::sync::Arc;

use gosp_types::{ExprType, Signature};

use crate::{Builtin, Expression};

/// A named function with its signature.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub id: String,
    pub signature: Arc<Signature>,
    pub implementation: FunctionImpl,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FunctionImpl {
    Builtin(Builtin),
    User(UserFunction),
}

/// Body of a `defun`.
///
/// The body is evaluated against the caller's bindings with the parameters
/// pushed on top; nothing is captured at definition time.
#[derive(Clone, Debug, PartialEq)]
pub struct UserFunction {
    pub params: Vec<Param>,
    pub body: Arc<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: ExprType,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: ExprType) -> Self {
        Param {
            name: name.into(),
            ty,
        }
    }
}

impl Function {
    pub fn builtin(builtin: Builtin) -> Self {
        Function {
            id: builtin.name().to_owned(),
            signature: Arc::new(builtin.signature()),
            implementation: FunctionImpl::Builtin(builtin),
        }
    }

    /// A user function whose fixed parameters are `params`.
    pub fn user(
        id: impl Into<String>,
        params: Vec<Param>,
        returns: ExprType,
        body: Expression,
    ) -> Self {
        let fixed = params.iter().map(|param| param.ty.clone()).collect();
        Function {
            id: id.into(),
            signature: Arc::new(Signature::new(fixed, None, Some(returns))),
            implementation: FunctionImpl::User(UserFunction {
                params,
                body: Arc::new(body),
            }),
        }
    }

    /// The function's own type (`function` with this signature).
    pub fn ty(&self) -> ExprType {
        ExprType::Function(Arc::clone(&self.signature))
    }
}
