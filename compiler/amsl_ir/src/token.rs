//! Lexer output.

use std::fmt;

use crate::Span;

/// The three shapes a token can take.
///
/// Keywords (`let`, `apply`) and punctuation are both `Sym`; the parser
/// tells them apart by text.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Integer literal, already converted from its radix.
    Int(i64),
    /// String literal with escapes processed.
    Str(String),
    /// Identifier, keyword or single-character punctuation.
    Sym(String),
}

impl TokenKind {
    /// The symbol text, if this is a `Sym`.
    #[inline]
    pub fn as_sym(&self) -> Option<&str> {
        match self {
            TokenKind::Sym(s) => Some(s),
            TokenKind::Int(_) | TokenKind::Str(_) => None,
        }
    }

    /// Whether this is the symbol `text`.
    #[inline]
    pub fn is_sym(&self, text: &str) -> bool {
        self.as_sym() == Some(text)
    }

    /// Short human-readable description, for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Int(v) => format!("integer literal `{v}`"),
            TokenKind::Str(s) => format!("string literal {s:?}"),
            TokenKind::Sym(s) => format!("`{s}`"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(v) => write!(f, "Int({v})"),
            TokenKind::Str(s) => write!(f, "Str({s:?})"),
            TokenKind::Sym(s) => write!(f, "Sym({s:?})"),
        }
    }
}

/// A token with its source location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

#[cfg(test)]
mod tests;
