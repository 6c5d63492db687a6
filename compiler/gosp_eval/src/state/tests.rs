use super::*;
use gosp_ir::{ExprType, Param};
use pretty_assertions::assert_eq;

fn id(name: &str) -> Expression {
    Expression::Id(name.to_owned())
}

#[test]
fn test_new_state_has_only_builtins() {
    let state = InterpreterState::new();
    assert_eq!(state.function_count(), Builtin::ALL.len());
    assert_eq!(state.binding_count(), 0);
    for name in ["+", "-", "*", "/", "map"] {
        assert!(state.find_function(name).is_some(), "{name}");
        assert!(state.is_defined(name));
    }
    assert!(state.find_function("sq").is_none());
}

#[test]
fn test_define_and_truncate_functions() {
    let mut state = InterpreterState::new();
    let before = state.function_count();
    state.define_function(Function::user(
        "sq",
        vec![Param::new("x", ExprType::Double)],
        ExprType::Double,
        id("x"),
    ));
    assert!(state.is_defined("sq"));
    state.truncate_functions(before);
    assert!(!state.is_defined("sq"));
    assert!(state.find_function("+").is_some());
}

#[test]
fn test_bindings_are_defined_names() {
    let mut state = InterpreterState::new();
    state.push_binding("x", Expression::Int(1));
    assert!(state.is_defined("x"));
    state.truncate_bindings(0);
    assert!(!state.is_defined("x"));
}

#[test]
fn test_lookup_finds_innermost() {
    let mut state = InterpreterState::new();
    state.push_binding("x", Expression::Int(1));
    state.push_binding("y", Expression::Int(2));
    state.push_binding("x", Expression::Int(3));
    assert_eq!(state.lookup_below("x", 3), Some((2, &Expression::Int(3))));
    assert_eq!(state.lookup_below("x", 2), Some((0, &Expression::Int(1))));
    assert_eq!(state.lookup_below("y", 1), None);
    assert_eq!(state.lookup_below("x", 99), Some((2, &Expression::Int(3))));
}

#[test]
fn test_resolve_follows_identifier_chains() {
    let mut state = InterpreterState::new();
    state.push_binding("a", Expression::Double(2.0));
    state.push_binding("b", id("a"));
    state.push_binding("c", id("b"));
    assert_eq!(state.resolve("c"), Some(&Expression::Double(2.0)));
    assert_eq!(state.resolve("zzz"), None);
}

#[test]
fn test_resolve_self_reference_terminates() {
    let mut state = InterpreterState::new();
    state.push_binding("x", id("x"));
    assert_eq!(state.resolve("x"), Some(&id("x")));
}
