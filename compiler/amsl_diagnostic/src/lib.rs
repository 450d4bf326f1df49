//! Diagnostic system shared by every pipeline stage.
//!
//! Each stage keeps its own typed error enum and converts it into a
//! [`Diagnostic`] at the boundary where it is reported. A diagnostic carries:
//! - an [`ErrorCode`] whose first digit names the stage
//! - a message (what went wrong)
//! - labeled spans (where)
//! - notes (why / how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
