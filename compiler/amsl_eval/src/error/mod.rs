//! Runtime errors.
//!
//! The resolved tree has no spans, so runtime diagnostics name the function
//! or slot involved instead of pointing into the source.

use amsl_diagnostic::{Diagnostic, ErrorCode};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },
    /// `apply` whose left side is not a variable.
    #[error("{found} is not assignable")]
    InvalidAssignmentTarget { found: &'static str },
    #[error("`{name}` takes {expected} argument(s), got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("argument {position} of `{name}` must be {expected}, got {found}")]
    WrongArgType {
        name: String,
        /// 1-based.
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
    #[error("division by zero in `{name}`")]
    DivisionByZero { name: String },
    #[error("integer overflow in `{name}`")]
    IntegerOverflow { name: String },
    #[error("I/O error in `{name}`: {message}")]
    Io { name: String, message: String },
    /// The resolver and the executor disagree about the stack layout.
    #[error("slot {slot} is outside the slot stack (depth {depth})")]
    SlotOutOfRange { slot: usize, depth: usize },
}

impl EvalError {
    pub(crate) fn arity(name: &str, expected: usize, found: usize) -> Self {
        EvalError::ArityMismatch {
            name: name.to_owned(),
            expected,
            found,
        }
    }

    pub(crate) fn io(name: &str, error: &std::io::Error) -> Self {
        EvalError::Io {
            name: name.to_owned(),
            message: error.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnknownFunction { .. } => ErrorCode::E6001,
            EvalError::InvalidAssignmentTarget { .. } => ErrorCode::E6002,
            EvalError::ArityMismatch { .. } => ErrorCode::E6003,
            EvalError::WrongArgType { .. } => ErrorCode::E6004,
            EvalError::DivisionByZero { .. } => ErrorCode::E6005,
            EvalError::IntegerOverflow { .. } => ErrorCode::E6006,
            EvalError::Io { .. } => ErrorCode::E6007,
            EvalError::SlotOutOfRange { .. } => ErrorCode::E9001,
        }
    }

    /// A bug in the pipeline rather than in the program being run.
    pub fn is_internal(&self) -> bool {
        self.code().is_internal()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::UnknownFunction { .. } => {
                diag.with_note("function names are looked up in the builtin registry")
            }
            EvalError::InvalidAssignmentTarget { .. } => diag.with_note(
                "the left side of `apply` must be a variable, or a block or `apply` ending in one",
            ),
            EvalError::SlotOutOfRange { .. } => diag.with_note(
                "this is a bug in the compiler: the IR was not produced by the resolver it was built with",
            ),
            _ => diag,
        }
    }
}
