//! The `run`, `exec` and `builtins` commands.

use std::path::Path;

use amsl_eval::{BuiltinRegistry, PrintHandler, Value};

use super::{fail, read_bytes, read_file};

/// Compile and run a source file.
pub fn run_file(path: &Path) {
    let source = read_file(path);
    let builtins = BuiltinRegistry::with_defaults(PrintHandler::stdout());
    let value =
        crate::run_source(&source, &builtins).unwrap_or_else(|e| fail(&e, Some(&source), path));
    print_value(&value);
}

/// Run an IR file written by `emit`.
pub fn exec_file(path: &Path) {
    let bytes = read_bytes(path);
    let builtins = BuiltinRegistry::with_defaults(PrintHandler::stdout());
    let value = crate::run_bytes(&bytes, &builtins).unwrap_or_else(|e| fail(&e, None, path));
    print_value(&value);
}

/// Print the default builtin names, one per line.
pub fn list_builtins() {
    let builtins = BuiltinRegistry::with_defaults(PrintHandler::stdout());
    for name in builtins.names() {
        println!("{name}");
    }
}

fn print_value(value: &Value) {
    if !value.is_unit() {
        println!("{value}");
    }
}
