//! Decode errors.
//!
//! Every variant carries the byte offset, from the start of the buffer,
//! where the malformed data begins.

use amsl_diagnostic::{Diagnostic, ErrorCode};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("not an AMSL IR buffer (bad magic)")]
    BadMagic { offset: usize },
    #[error("unsupported IR format version {version}")]
    UnsupportedVersion { version: u8, offset: usize },
    #[error("unknown node tag {tag} at byte {offset}")]
    UnknownTag { tag: u8, offset: usize },
    /// The buffer ended before a complete value could be read.
    #[error("IR buffer ends at byte {offset}, {needed} more byte(s) needed")]
    UnexpectedEnd { offset: usize, needed: usize },
    /// A presence byte other than `0` or `1`.
    #[error("invalid presence flag {value} at byte {offset}")]
    InvalidFlag { value: u8, offset: usize },
    #[error("string at byte {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },
    /// A length or index prefix too large for this platform.
    #[error("length {value} at byte {offset} does not fit in memory")]
    LengthOverflow { value: u64, offset: usize },
    #[error("{count} unexpected byte(s) after the program at byte {offset}")]
    TrailingBytes { count: usize, offset: usize },
}

impl DecodeError {
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::BadMagic { offset }
            | DecodeError::UnsupportedVersion { offset, .. }
            | DecodeError::UnknownTag { offset, .. }
            | DecodeError::UnexpectedEnd { offset, .. }
            | DecodeError::InvalidFlag { offset, .. }
            | DecodeError::InvalidUtf8 { offset }
            | DecodeError::LengthOverflow { offset, .. }
            | DecodeError::TrailingBytes { offset, .. } => *offset,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::BadMagic { .. } => ErrorCode::E3001,
            DecodeError::UnsupportedVersion { .. } => ErrorCode::E3002,
            DecodeError::UnknownTag { .. } => ErrorCode::E3003,
            DecodeError::UnexpectedEnd { .. } => ErrorCode::E3004,
            DecodeError::InvalidFlag { .. } => ErrorCode::E3005,
            DecodeError::InvalidUtf8 { .. } => ErrorCode::E3006,
            DecodeError::LengthOverflow { .. } => ErrorCode::E3007,
            DecodeError::TrailingBytes { .. } => ErrorCode::E3008,
        }
    }

    /// IR buffers have no source text, so the diagnostic has no labels;
    /// the offset goes into a note instead.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_note(format!("at byte offset {}", self.offset()));
        match self {
            DecodeError::BadMagic { .. } => {
                diag.with_note("this is not an AMSL IR buffer")
            }
            DecodeError::UnsupportedVersion { .. } => diag.with_note(format!(
                "this build reads version {}",
                crate::FORMAT_VERSION
            )),
            _ => diag,
        }
    }
}
