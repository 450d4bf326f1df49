//! AMSL Parser - recursive descent over the token stream.
//!
//! One token of lookahead, no backtracking and no error recovery: the first
//! malformed construct aborts with a [`ParseError`].
//!
//! Grammar, by leading token:
//!
//! ```text
//! expr  := INT | STR
//!        | ";"                              -- empty statement, dropped
//!        | "{" expr* "}"                    -- list
//!        | "@" NAME "(" expr* ")"           -- call
//!        | "let" NAME [":" NAME] ["=" expr] -- declaration
//!        | "apply" expr ["=" | ","] expr    -- assignment
//!        | NAME                             -- variable reference
//! ```

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;
pub use grammar::Parser;

use amsl_ir::{Expr, Token};

/// Parse a whole program: exactly one expression spanning all tokens.
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    let expr = Parser::new(tokens).parse_program()?;
    tracing::debug!(tokens = tokens.len(), "parsed program");
    Ok(expr)
}
