use super::*;
use gosp_diagnostic::ErrorCode;
use gosp_lexer_core::{Location, Position};

fn error(message: &str) -> ParseError {
    ParseError::new(
        ErrorCode::E1001,
        message,
        Location::new("t", Position::start_of(0)),
    )
}

#[test]
fn test_committed_success_is_consumed_ok() {
    let outcome = ParseOutcome::committed(Ok::<_, ParseError>(1));
    assert!(matches!(outcome, ParseOutcome::ConsumedOk { value: 1 }));
}

#[test]
fn test_committed_failure_is_not_retried() {
    let outcome = ParseOutcome::<i32>::committed(Err(error("bad let")));
    match outcome {
        ParseOutcome::ConsumedErr { error: e } => assert_eq!(e, error("bad let")),
        other => panic!("expected a committed error, got {other:?}"),
    }
}

#[test]
fn test_empty_err_keeps_the_error() {
    let outcome = ParseOutcome::<i32>::empty_err(error("not let"));
    match outcome {
        ParseOutcome::EmptyErr { error: e } => assert_eq!(e, error("not let")),
        other => panic!("expected an empty error, got {other:?}"),
    }
}
