use super::*;

#[test]
fn codes_by_kind() {
    let unterminated = LexError::UnterminatedString {
        span: Span::new(3, 9),
    };
    assert_eq!(unterminated.code(), ErrorCode::E0001);
    assert_eq!(unterminated.span(), Span::new(3, 9));

    let invalid = LexError::InvalidNumber {
        text: "0b2".into(),
        span: Span::new(0, 3),
    };
    assert_eq!(invalid.code(), ErrorCode::E0003);
    assert_eq!(invalid.to_string(), "invalid number literal `0b2`");
}

#[test]
fn unterminated_points_at_opening_quote() {
    let diag = LexError::UnterminatedString {
        span: Span::new(3, 9),
    }
    .to_diagnostic();
    assert_eq!(diag.primary_span(), Some(Span::point(3)));
    assert_eq!(diag.code, ErrorCode::E0001);
}
