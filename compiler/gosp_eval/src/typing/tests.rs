#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use gosp_ir::{Builtin, Function, Param};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn call(state: &InterpreterState, name: &str, args: Vec<Expression>) -> Expression {
    Expression::Func {
        function: Arc::clone(state.find_function(name).unwrap()),
        args,
    }
}

#[test]
fn test_scalar_types() {
    let mut state = InterpreterState::new();
    assert_eq!(state.type_of(&Expression::Int(1)), ExprType::Int);
    assert_eq!(state.type_of(&Expression::Double(1.0)), ExprType::Double);
    assert_eq!(state.type_of(&Expression::Str("a".into())), ExprType::Str);
    assert_eq!(state.type_of(&Expression::None), ExprType::None);
}

#[test]
fn test_unbound_identifier_is_id() {
    let mut state = InterpreterState::new();
    assert_eq!(state.type_of(&Expression::Id("sq".into())), ExprType::Id);
}

#[test]
fn test_bound_identifier_types_as_its_value() {
    let mut state = InterpreterState::new();
    state.push_binding("x", Expression::Double(0.0));
    state.push_binding("y", Expression::Id("x".into()));
    assert_eq!(state.type_of(&Expression::Id("y".into())), ExprType::Double);
}

#[test]
fn test_call_types_collapse_when_simplified() {
    let mut state = InterpreterState::new();
    let add = call(&state, "+", vec![Expression::Int(1)]);
    assert!(matches!(state.type_of(&add), ExprType::Function(_)));
    assert_eq!(state.simple_type_of(&add), ExprType::Double);
}

#[test]
fn test_list_type_from_first_element() {
    let mut state = InterpreterState::new();
    let list = Expression::List(vec![Expression::Int(1), Expression::Int(2)]);
    assert_eq!(state.type_of(&list), ExprType::list_of(ExprType::Int));
    assert_eq!(state.type_of(&Expression::List(vec![])), ExprType::any_list());

    let calls = Expression::List(vec![call(&state, "*", vec![])]);
    assert_eq!(state.type_of(&calls), ExprType::list_of(ExprType::Double));
}

#[test]
fn test_let_types_body_with_placeholder() {
    let mut state = InterpreterState::new();
    let form = Expression::Let {
        name: "s".into(),
        value: Box::new(Expression::Str("hello".into())),
        body: Box::new(Expression::Id("s".into())),
    };
    assert_eq!(state.type_of(&form), ExprType::Str);
    assert_eq!(state.binding_count(), 0);
}

#[test]
fn test_user_function_return_type() {
    let mut state = InterpreterState::new();
    let body = call(
        &state,
        "*",
        vec![Expression::Id("x".into()), Expression::Id("x".into())],
    );
    state.define_function(Function::user(
        "sq",
        vec![Param::new("x", ExprType::Double)],
        ExprType::Double,
        body,
    ));
    let use_sq = call(&state, "sq", vec![Expression::Int(4)]);
    assert_eq!(state.simple_type_of(&use_sq), ExprType::Double);
    assert_eq!(
        Function::builtin(Builtin::Map).signature.returns,
        Some(ExprType::any_list())
    );
}
