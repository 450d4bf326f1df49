//! Resolution errors.

use amsl_diagnostic::{Diagnostic, ErrorCode};
use amsl_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// No enclosing scope declares the name.
    #[error("unresolved variable `{name}`")]
    Unresolved { name: String, span: Span },
    /// A `let` with no enclosing block to hold the binding.
    #[error("declaration of `{name}` outside of any block")]
    DeclarationOutsideBlock { name: String, span: Span },
}

impl ResolveError {
    pub fn span(&self) -> Span {
        match self {
            ResolveError::Unresolved { span, .. }
            | ResolveError::DeclarationOutsideBlock { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveError::Unresolved { .. } => ErrorCode::E2001,
            ResolveError::DeclarationOutsideBlock { .. } => ErrorCode::E2002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ResolveError::Unresolved { name, span } => diag
                .with_label(*span, "not declared in any enclosing scope")
                .with_note(format!(
                    "a declaration is visible only after it, and never inside its own initializer: `let {name} = ...` cannot mention `{name}`"
                )),
            ResolveError::DeclarationOutsideBlock { span, .. } => diag
                .with_label(*span, "declared here")
                .with_note("wrap the program in `{ ... }`"),
        }
    }
}
