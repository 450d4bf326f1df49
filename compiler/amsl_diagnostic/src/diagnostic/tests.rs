use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builder_collects_parts() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected token `}`")
        .with_label(Span::new(4, 5), "here")
        .with_note("blocks are closed by `}`");

    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn display_has_code_and_message() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("unresolved variable `y`")
        .with_note("declare it with `let`");
    let out = diag.to_string();
    assert!(out.starts_with("error[E2001]: unresolved variable `y`"));
    assert!(out.contains("= note: declare it with `let`"));
}

#[test]
fn no_label_means_no_span() {
    let diag = Diagnostic::error(ErrorCode::E3008).with_message("trailing bytes");
    assert_eq!(diag.primary_span(), None);
}
