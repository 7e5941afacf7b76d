use super::*;
use bee_ir::Position;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn values(source: &str) -> Vec<TokenValue> {
    lex(source)
        .unwrap()
        .into_iter()
        .filter_map(|t| t.value)
        .collect()
}

fn error(source: &str) -> LexError {
    lex(source).unwrap_err()
}

#[test]
fn test_declaration() {
    assert_eq!(
        kinds("var x: Int = 2;"),
        vec![
            TokenKind::Var,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Const,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        values("var x: Int = 2;"),
        vec![
            TokenValue::Ident("x".into()),
            TokenValue::Ident("Int".into()),
            TokenValue::Int(2),
        ]
    );
}

#[test]
fn test_two_char_operators_win() {
    assert_eq!(
        kinds("<= << < >= >> > == != && || & | ^ ! ~"),
        vec![
            TokenKind::Le,
            TokenKind::Shl,
            TokenKind::Lt,
            TokenKind::Ge,
            TokenKind::Shr,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::Ne,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::BitAnd,
            TokenKind::BitOr,
            TokenKind::Xor,
            TokenKind::Not,
            TokenKind::Inv,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        kinds("if else while func return break continue iffy _x1"),
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Func,
            TokenKind::Return,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_constants() {
    assert_eq!(
        values("True False None 42 2.5 'a' \"b\""),
        vec![
            TokenValue::Bool(true),
            TokenValue::Bool(false),
            TokenValue::None,
            TokenValue::Int(42),
            TokenValue::Float(2.5),
            TokenValue::Str("a".into()),
            TokenValue::Str("b".into()),
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    let source = "a // line\n/* block\n spanning */ b";
    assert_eq!(
        values(source),
        vec![TokenValue::Ident("a".into()), TokenValue::Ident("b".into())]
    );
}

#[test]
fn test_positions_are_token_starts() {
    let tokens = lex("var x\n  print(x);").unwrap();
    let positions: Vec<Position> = tokens.iter().map(|t| t.pos).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(1, 5),
            Position::new(2, 3),
            Position::new(2, 8),
            Position::new(2, 9),
            Position::new(2, 10),
            Position::new(2, 11),
            Position::new(2, 12),
        ]
    );
}

#[test]
fn test_string_after_string_keeps_positions() {
    let tokens = lex("\"a\\n\" x").unwrap();
    assert_eq!(tokens[0].value, Some(TokenValue::Str("a\n".into())));
    assert_eq!(tokens[1].pos, Position::new(1, 7));
}

#[test]
fn test_errors() {
    assert_eq!(
        error("x = 1.2.3").kind,
        LexErrorKind::TooManyDots
    );
    assert_eq!(
        error("\"never closed").kind,
        LexErrorKind::UnterminatedString
    );
    assert_eq!(
        error("/* never closed").kind,
        LexErrorKind::UnterminatedComment
    );
    assert_eq!(error("'\\q'").kind, LexErrorKind::InvalidEscape);
    assert_eq!(
        error("99999999999999999999").kind,
        LexErrorKind::IntOverflow("99999999999999999999".into())
    );
}

#[test]
fn test_unexpected_char_position() {
    let err = error("a\n  $");
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar('$'));
    assert_eq!(err.pos, Position::new(2, 3));
    assert_eq!(
        err.to_string(),
        "LexError at line 2, column 3: unexpected character '$'."
    );
}

#[test]
fn test_fixed_kind_only_covers_payload_free_tokens() {
    assert_eq!(fixed_kind(RawToken::Assign), Some(TokenKind::Assign));
    assert_eq!(fixed_kind(RawToken::Shl), Some(TokenKind::Shl));
    for raw in [
        RawToken::LineComment,
        RawToken::BlockCommentStart,
        RawToken::True,
        RawToken::Number,
        RawToken::DoubleQuote,
        RawToken::Ident,
    ] {
        assert_eq!(fixed_kind(raw), None);
    }
}

proptest! {
    #[test]
    fn prop_non_negative_ints_round_trip(n in 0i64..=i64::MAX) {
        prop_assert_eq!(values(&n.to_string()), vec![TokenValue::Int(n)]);
    }

    #[test]
    fn prop_identifiers_lex_whole(name in "[a-z_][a-z0-9_]{0,12}") {
        let keywords = ["if", "else", "while", "var", "func", "return", "break", "continue"];
        prop_assume!(!keywords.contains(&name.as_str()));
        prop_assert_eq!(values(&name), vec![TokenValue::Ident(name.clone())]);
    }
}
