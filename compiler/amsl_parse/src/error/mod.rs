//! Parse errors.
//!
//! Every variant records where parsing stopped: a source span and, for
//! token-level errors, the index of the offending token.

use amsl_diagnostic::{Diagnostic, ErrorCode};
use amsl_ir::{Span, Token};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A token that cannot appear here.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        span: Span,
        /// Index of the token in the stream.
        position: usize,
    },
    /// An empty statement `;` where an expression is mandatory.
    #[error("expected {expected}, found `;`")]
    ExpectedExpression { expected: &'static str, span: Span },
    /// The token stream ended in the middle of a construct.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str, span: Span },
    /// Tokens left over after the program expression.
    #[error("unexpected {found} after the end of the program")]
    TrailingTokens {
        found: String,
        span: Span,
        position: usize,
    },
}

impl ParseError {
    /// `UnexpectedToken` for `token` found at stream index `position`.
    #[cold]
    pub(crate) fn unexpected(token: &Token, position: usize, expected: &'static str) -> Self {
        ParseError::UnexpectedToken {
            found: token.kind.describe(),
            expected,
            span: token.span,
            position,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedExpression { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::TrailingTokens { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseError::UnexpectedEof { .. } => ErrorCode::E1003,
            ParseError::TrailingTokens { .. } => ErrorCode::E1004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ParseError::UnexpectedToken { expected, .. } => {
                diag.with_label(self.span(), format!("expected {expected}"))
            }
            ParseError::ExpectedExpression { .. } => diag
                .with_label(self.span(), "empty statement")
                .with_note("`;` only separates expressions inside `{ }` and `@f( )`"),
            ParseError::UnexpectedEof { .. } => diag.with_label(self.span(), "input ends here"),
            ParseError::TrailingTokens { .. } => diag
                .with_label(self.span(), "program already ended")
                .with_note("wrap multiple expressions in `{ ... }`"),
        }
    }
}

#[cfg(test)]
mod tests;
