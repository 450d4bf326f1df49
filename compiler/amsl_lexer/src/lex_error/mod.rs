//! Lexer errors.

use amsl_diagnostic::{Diagnostic, ErrorCode};
use amsl_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// End of input inside a `"..."` literal.
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    /// A word starting with a digit that is not a valid integer.
    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String, span: Span },
    #[error("integer literal `{text}` does not fit in 64 bits")]
    IntOverflow { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::InvalidNumber { span, .. }
            | LexError::IntOverflow { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } => ErrorCode::E0001,
            LexError::InvalidNumber { .. } => ErrorCode::E0003,
            LexError::IntOverflow { .. } => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LexError::UnterminatedString { span } => diag
                .with_label(Span::point(span.start), "string starts here")
                .with_note("close the literal with `\"`"),
            LexError::InvalidNumber { span, .. } => diag
                .with_label(*span, "not a valid integer")
                .with_note("words starting with a digit must be integers; prefixes are 0b, 0d, 0x and 0 (octal)"),
            LexError::IntOverflow { span, .. } => diag
                .with_label(*span, "out of range")
                .with_note(format!("the largest integer is {}", i64::MAX)),
        }
    }
}

#[cfg(test)]
mod tests;
