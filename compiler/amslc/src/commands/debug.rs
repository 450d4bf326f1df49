//! Inspection commands: `lex`, `parse`, `resolve`.

use std::path::Path;

use super::{fail, read_file};
use crate::PipelineError;

/// Print the token stream.
pub fn lex_file(path: &Path) {
    let source = read_file(path);
    let tokens = amsl_lexer::lex(&source)
        .unwrap_or_else(|e| fail(&PipelineError::from(e), Some(&source), path));

    println!("Tokens for '{}' ({} tokens):", path.display(), tokens.len());
    for token in &tokens {
        println!("  {} @ {}", token.kind, token.span);
    }
}

/// Print the syntax tree.
pub fn parse_file(path: &Path) {
    let source = read_file(path);
    let ast = amsl_lexer::lex(&source)
        .map_err(PipelineError::from)
        .and_then(|tokens| amsl_parse::parse(&tokens).map_err(PipelineError::from))
        .unwrap_or_else(|e| fail(&e, Some(&source), path));
    println!("{ast}");
}

/// Print the resolved tree.
pub fn resolve_file(path: &Path) {
    let source = read_file(path);
    let resolved = crate::compile(&source).unwrap_or_else(|e| fail(&e, Some(&source), path));
    println!("{resolved}");
}
