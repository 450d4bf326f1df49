//! Stage composition.

use amsl_codec::DecodeError;
use amsl_diagnostic::Diagnostic;
use amsl_eval::{BuiltinRegistry, EvalError, Value};
use amsl_ir::ResolvedExpr;
use amsl_lexer::LexError;
use amsl_parse::ParseError;
use amsl_resolve::ResolveError;

/// The first error any stage reported. Stages never recover.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl PipelineError {
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Lex(_) => "lex",
            PipelineError::Parse(_) => "parse",
            PipelineError::Resolve(_) => "resolve",
            PipelineError::Decode(_) => "decode",
            PipelineError::Eval(_) => "eval",
        }
    }

    /// A compiler bug rather than a problem with the input program.
    pub fn is_internal(&self) -> bool {
        matches!(self, PipelineError::Eval(e) if e.is_internal())
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            PipelineError::Lex(e) => e.to_diagnostic(),
            PipelineError::Parse(e) => e.to_diagnostic(),
            PipelineError::Resolve(e) => e.to_diagnostic(),
            PipelineError::Decode(e) => e.to_diagnostic(),
            PipelineError::Eval(e) => e.to_diagnostic(),
        }
    }
}

/// Source text to resolved IR.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compile(source: &str) -> Result<ResolvedExpr, PipelineError> {
    let tokens = amsl_lexer::lex(source)?;
    let ast = amsl_parse::parse(&tokens)?;
    Ok(amsl_resolve::resolve(&ast)?)
}

/// Source text to an IR buffer.
pub fn emit(source: &str) -> Result<Vec<u8>, PipelineError> {
    compile(source).map(|resolved| amsl_codec::encode(&resolved))
}

/// Decode an IR buffer and execute it.
pub fn run_bytes(bytes: &[u8], builtins: &BuiltinRegistry) -> Result<Value, PipelineError> {
    let resolved = amsl_codec::decode(bytes)?;
    Ok(amsl_eval::execute(&resolved, builtins)?)
}

/// The whole chain: compile, encode, decode, execute.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_source(source: &str, builtins: &BuiltinRegistry) -> Result<Value, PipelineError> {
    let bytes = emit(source)?;
    run_bytes(&bytes, builtins)
}
