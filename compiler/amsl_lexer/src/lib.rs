//! AMSL Lexer - turns source text into a flat token sequence.
//!
//! The token grammar is tiny:
//! - whitespace separates tokens
//! - each of `; : , . - + * / ( ) [ ] { } < > @ & | = !` is a token by itself
//! - `"..."` is a string literal with backslash escapes
//! - a bare word is an integer literal if it starts with a digit
//!   (`0b`, `0d`, `0x` and leading-`0` octal prefixes, `_` separators),
//!   and a symbol otherwise
//!
//! # Usage
//!
//! ```
//! use amsl_ir::TokenKind;
//!
//! let tokens = amsl_lexer::lex("@println(0x1F)").unwrap_or_default();
//! assert_eq!(tokens[2].kind, TokenKind::Sym("(".into()));
//! assert_eq!(tokens[3].kind, TokenKind::Int(31));
//! ```

mod lex_error;
mod lexer;
mod number;

pub use lex_error::LexError;
pub use lexer::{is_delimiter, lex};
