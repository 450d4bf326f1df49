//! CLI command implementations.
//!
//! Each command prints its result to stdout. On failure it renders the
//! diagnostic to stderr and exits with status 1.

mod debug;
mod emit;
mod run;

pub use debug::{lex_file, parse_file, resolve_file};
pub use emit::emit_file;
pub use run::{exec_file, list_builtins, run_file};

use std::path::Path;

use amsl_diagnostic::emitter::TerminalEmitter;
use amsl_diagnostic::Diagnostic;

use crate::PipelineError;

/// Read a source file, exiting on failure.
pub(crate) fn read_file(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: cannot read '{}': {e}", path.display());
            std::process::exit(1);
        }
    }
}

/// Read an IR file, exiting on failure.
pub(crate) fn read_bytes(path: &Path) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: cannot read '{}': {e}", path.display());
            std::process::exit(1);
        }
    }
}

/// Render `error` and exit. `source` is the text the spans refer to, if any.
pub(crate) fn fail(error: &PipelineError, source: Option<&str>, path: &Path) -> ! {
    tracing::debug!(stage = error.stage(), "pipeline failed");
    emit_and_exit(&failure_diagnostic(error, path), source, path)
}

/// The stage's diagnostic plus what only the driver knows: which file,
/// and what to do about it.
fn failure_diagnostic(error: &PipelineError, path: &Path) -> Diagnostic {
    let mut diag = error.to_diagnostic();
    if diag.primary_span().is_none() {
        diag = diag.with_note(format!("in '{}'", path.display()));
    }
    if diag.code.is_decode_error() {
        diag = diag.with_note("regenerate the file from source with `amsl emit`");
    }
    if error.is_internal() {
        diag = diag.with_note(format!(
            "please report this internal error along with '{}'",
            path.display()
        ));
    }
    diag
}

fn emit_and_exit(diag: &Diagnostic, source: Option<&str>, path: &Path) -> ! {
    let mut emitter =
        TerminalEmitter::new(std::io::stderr()).with_file_path(path.display().to_string());
    if let Some(source) = source {
        emitter = emitter.with_source(source);
    }
    emitter.emit(diag);
    emitter.flush();
    std::process::exit(1);
}
