use super::*;
use gosp_lexer_core::SourceMap;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(text: &str) -> Vec<TokenKind> {
    let sources = SourceMap::single("test", text);
    Lexer::new(&sources)
        .tokenize()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn id(name: &str) -> TokenKind {
    TokenKind::Id(name.to_owned())
}

#[test]
fn test_call_form() {
    assert_eq!(
        kinds("(+ 1 2.5)"),
        vec![
            TokenKind::OpenParen,
            id("+"),
            TokenKind::Int(1),
            TokenKind::Double(2.5),
            TokenKind::CloseParen,
        ]
    );
}

#[test]
fn test_all_punctuation() {
    assert_eq!(
        kinds("(){}[],"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn test_number_shapes() {
    assert_eq!(kinds("1."), vec![TokenKind::Double(1.0)]);
    assert_eq!(kinds(".5"), vec![TokenKind::Double(0.5)]);
    assert_eq!(kinds("-.5"), vec![TokenKind::Double(-0.5)]);
    assert_eq!(kinds("-42"), vec![TokenKind::Int(-42)]);
    assert_eq!(kinds("007"), vec![TokenKind::Int(7)]);
}

#[test]
fn test_non_numbers_fall_back_to_identifiers() {
    assert_eq!(kinds("-"), vec![id("-")]);
    assert_eq!(kinds("."), vec![id(".")]);
    assert_eq!(kinds("1.2.3"), vec![id("1.2.3")]);
    assert_eq!(kinds("-x"), vec![id("-x")]);
}

#[test]
fn test_number_then_identifier() {
    assert_eq!(kinds("12abc"), vec![TokenKind::Int(12), id("abc")]);
}

#[test]
fn test_identifier_charset() {
    assert_eq!(
        kinds("<= a_b x:y && ünï"),
        vec![id("<="), id("a_b"), id("x:y"), id("&&"), id("ünï")]
    );
}

#[test]
fn test_integer_overflow_is_an_error_token() {
    let kinds = kinds("99999999999999999999");
    assert!(matches!(
        &kinds[..],
        [TokenKind::Error(LexError::InvalidNumber { .. })]
    ));
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        kinds(r#""a\"b\\c\nd\re""#),
        vec![TokenKind::Str("a\"b\\c\nd\re".to_owned())]
    );
}

#[test]
fn test_unclosed_string_at_newline() {
    assert_eq!(
        kinds("\"abc\nx"),
        vec![TokenKind::Error(LexError::UnclosedString), id("x")]
    );
}

#[test]
fn test_unclosed_string_at_end() {
    assert_eq!(
        kinds("\"abc"),
        vec![TokenKind::Error(LexError::UnclosedString)]
    );
}

#[test]
fn test_unknown_escape() {
    let kinds = kinds(r#""a\qb" 1"#);
    assert_eq!(
        kinds[0],
        TokenKind::Error(LexError::UnknownEscape { escape: 'q' })
    );
    assert_eq!(
        LexError::UnknownEscape { escape: 'q' }.to_string(),
        "'q' unknown escape character"
    );
}

#[test]
fn test_unknown_character_is_skipped() {
    assert_eq!(
        kinds("@ x"),
        vec![
            TokenKind::Error(LexError::UnknownToken { found: '@' }),
            id("x"),
        ]
    );
    assert_eq!(
        LexError::UnknownToken { found: '@' }.to_string(),
        "'@' does not start any known token"
    );
}

#[test]
fn test_token_positions() {
    let sources = SourceMap::single("test", "(a\n  bc)");
    let positions: Vec<(u32, u32)> = Lexer::new(&sources)
        .tokenize()
        .into_iter()
        .map(|token| (token.position.line, token.position.column))
        .collect();
    assert_eq!(positions, vec![(1, 1), (1, 2), (2, 3), (2, 5)]);
}

#[test]
fn test_tokens_stop_at_buffer_boundary() {
    let mut sources = SourceMap::new();
    sources.add_named("a", "abc");
    sources.add_named("b", "def 12");
    let mut lexer = Lexer::new(&sources);
    assert_eq!(lexer.next_token().map(|t| t.kind), Some(id("abc")));
    assert_eq!(lexer.next_token(), None);
    assert!(lexer.skip_whitespace());
    assert_eq!(lexer.next_token().map(|t| t.kind), Some(id("def")));
    assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Int(12)));
    assert_eq!(lexer.next_token(), None);
    assert!(!lexer.skip_whitespace());
}

#[test]
fn test_tokenize_crosses_buffers() {
    let mut sources = SourceMap::new();
    sources.add_named("a", "(x ");
    sources.add_named("empty", "");
    sources.add_named("b", " 1)");
    let tags: Vec<String> = Lexer::new(&sources)
        .tokenize()
        .iter()
        .map(|t| t.tag().to_string())
        .collect();
    assert_eq!(tags, vec!["(", "id", "int", ")"]);
}

#[test]
fn test_error_codes() {
    use gosp_diagnostic::ErrorCode;
    assert_eq!(LexError::UnclosedString.code(), ErrorCode::E0001);
    assert_eq!(
        LexError::UnknownToken { found: '#' }.code(),
        ErrorCode::E0002
    );
}

proptest! {
    #[test]
    fn prop_integers_lex_to_their_value(n in any::<i64>()) {
        prop_assert_eq!(kinds(&n.to_string()), vec![TokenKind::Int(n)]);
    }

    #[test]
    fn prop_identifiers_split_on_whitespace(
        words in prop::collection::vec("[a-z_<>=!&|:][a-z0-9_<>=!&|:]{0,8}", 1..8)
    ) {
        let text = words.join(" \n\t");
        let expected: Vec<TokenKind> = words.iter().map(|w| id(w)).collect();
        prop_assert_eq!(kinds(&text), expected);
    }
}
