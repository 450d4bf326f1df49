use super::*;
use amsl_ir::TokenKind;

#[test]
fn unexpected_describes_the_token() {
    let token = Token::new(TokenKind::Sym("}".into()), Span::new(5, 6));
    let err = ParseError::unexpected(&token, 3, "an expression");
    assert_eq!(err.to_string(), "unexpected `}`, expected an expression");
    assert_eq!(err.span(), Span::new(5, 6));
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn diagnostics_carry_the_span() {
    let err = ParseError::TrailingTokens {
        found: "`x`".into(),
        span: Span::new(9, 10),
        position: 4,
    };
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1004);
    assert_eq!(diag.primary_span(), Some(Span::new(9, 10)));
    assert_eq!(diag.notes.len(), 1);
}
