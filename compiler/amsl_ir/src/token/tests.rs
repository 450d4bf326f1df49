use super::*;

#[test]
fn sym_helpers() {
    let kind = TokenKind::Sym("let".into());
    assert!(kind.is_sym("let"));
    assert!(!kind.is_sym("apply"));
    assert_eq!(kind.as_sym(), Some("let"));
    assert_eq!(TokenKind::Int(3).as_sym(), None);
    assert!(!TokenKind::Str("let".into()).is_sym("let"));
}

#[test]
fn display_escapes_strings() {
    assert_eq!(TokenKind::Int(-4).to_string(), "Int(-4)");
    assert_eq!(TokenKind::Str("a\n\"b\"".into()).to_string(), r#"Str("a\n\"b\"")"#);
    assert_eq!(TokenKind::Sym("{".into()).to_string(), r#"Sym("{")"#);
}

#[test]
fn describe_names_the_token() {
    assert_eq!(TokenKind::Int(7).describe(), "integer literal `7`");
    assert_eq!(TokenKind::Sym("}".into()).describe(), "`}`");
}
