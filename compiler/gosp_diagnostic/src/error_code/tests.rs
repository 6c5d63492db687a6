use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        let expected = match code.as_str().as_bytes()[1] {
            b'0' => Phase::Lexer,
            b'1' => Phase::Parser,
            b'2' => Phase::Type,
            other => panic!("unexpected phase digit {other}"),
        };
        assert_eq!(code.phase(), expected, "{code}");
        assert!(!code.description().is_empty());
    }
}

#[test]
fn test_parse_round_trips_display() {
    for &code in ErrorCode::ALL {
        assert_eq!(ErrorCode::parse(&code.to_string()), Some(code));
    }
    assert_eq!(ErrorCode::parse("e1003"), Some(ErrorCode::E1003));
    assert_eq!(ErrorCode::parse("E9999"), None);
}
