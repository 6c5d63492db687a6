use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_guard_pops_on_drop() {
    let mut state = InterpreterState::new();
    state.push_binding("outer", Expression::Int(0));
    {
        let mut scoped = state.scoped();
        scoped.push_binding("a", Expression::Int(1));
        scoped.push_binding("b", Expression::Int(2));
        assert_eq!(scoped.binding_count(), 3);
    }
    assert_eq!(state.binding_count(), 1);
    assert!(state.is_defined("outer"));
}

#[test]
fn test_with_binding_pops_on_early_return() {
    let mut state = InterpreterState::new();
    let result: Result<(), &str> = state.with_binding("x", Expression::Int(1), |scoped| {
        assert!(scoped.is_defined("x"));
        Err("failed")?;
        Ok(())
    });
    assert_eq!(result, Err("failed"));
    assert_eq!(state.binding_count(), 0);
}

#[test]
fn test_with_bindings_order() {
    let mut state = InterpreterState::new();
    let ids = state.with_bindings(
        vec![
            ("a".to_owned(), Expression::Int(1)),
            ("b".to_owned(), Expression::Int(2)),
        ],
        |scoped| {
            scoped
                .bindings()
                .iter()
                .map(|b| b.id.clone())
                .collect::<Vec<_>>()
        },
    );
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(state.binding_count(), 0);
}

#[test]
fn test_guard_pops_on_panic() {
    let mut state = InterpreterState::new();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let (): () = state.with_binding("x", Expression::Int(1), |_| panic!("boom"));
    }));
    assert!(result.is_err());
    assert_eq!(state.binding_count(), 0);
}
