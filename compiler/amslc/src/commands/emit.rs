//! The `emit` command.

use std::path::Path;

use super::{fail, read_file};

/// Compile `input` and write its IR buffer to `output`.
pub fn emit_file(input: &Path, output: &Path) {
    let source = read_file(input);
    let bytes = crate::emit(&source).unwrap_or_else(|e| fail(&e, Some(&source), input));

    if let Err(e) = std::fs::write(output, &bytes) {
        eprintln!("error: cannot write '{}': {e}", output.display());
        std::process::exit(1);
    }
    println!("wrote {} bytes to '{}'", bytes.len(), output.display());
}
