use super::*;

fn classify(text: &str) -> Result<TokenKind, LexError> {
    classify_word(text, Span::DUMMY)
}

#[test]
fn decimal_and_prefixed_radixes() {
    assert_eq!(classify("42"), Ok(TokenKind::Int(42)));
    assert_eq!(classify("0"), Ok(TokenKind::Int(0)));
    assert_eq!(classify("0b1011"), Ok(TokenKind::Int(11)));
    assert_eq!(classify("0d0099"), Ok(TokenKind::Int(99)));
    assert_eq!(classify("0x1f"), Ok(TokenKind::Int(31)));
    assert_eq!(classify("0xFF"), Ok(TokenKind::Int(255)));
    assert_eq!(classify("017"), Ok(TokenKind::Int(15)));
}

#[test]
fn underscores_are_separators() {
    assert_eq!(classify("1_000_000"), Ok(TokenKind::Int(1_000_000)));
    assert_eq!(classify("0b1111_0000"), Ok(TokenKind::Int(240)));
}

#[test]
fn words_are_symbols() {
    assert_eq!(classify("let"), Ok(TokenKind::Sym("let".into())));
    assert_eq!(classify("x1"), Ok(TokenKind::Sym("x1".into())));
    assert_eq!(classify("_0"), Ok(TokenKind::Sym("_0".into())));
}

#[test]
fn malformed_numbers_are_rejected() {
    for text in ["09", "0b102", "12ab", "0x__", "0xg"] {
        assert!(
            matches!(classify(text), Err(LexError::InvalidNumber { .. })),
            "{text} should be rejected"
        );
    }
}

#[test]
fn overflow_is_reported() {
    assert_eq!(classify("9223372036854775807"), Ok(TokenKind::Int(i64::MAX)));
    assert!(matches!(
        classify("9223372036854775808"),
        Err(LexError::IntOverflow { .. })
    ));
}
