//! Token cursor with one-token lookahead.

use amsl_ir::{Span, Token, TokenKind};

use crate::ParseError;

/// Position in a token slice.
///
/// Returned tokens borrow the slice, not the cursor, so the parser can keep
/// a token around while it advances further.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Index of the next token to be consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The next token, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Consume the next token. `expected` describes what the caller wanted,
    /// for the error when the input has run out.
    pub fn advance(&mut self, expected: &'static str) -> Result<&'a Token, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or_else(|| ParseError::UnexpectedEof {
                expected,
                span: self.end_span(),
            })?;
        self.pos += 1;
        Ok(token)
    }

    /// Whether the next token is the symbol `text`.
    #[inline]
    pub fn check_sym(&self, text: &str) -> bool {
        self.peek().is_some_and(|t| t.kind.is_sym(text))
    }

    /// Consume the next token if it is the symbol `text`.
    pub fn eat_sym(&mut self, text: &str) -> bool {
        if self.check_sym(text) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the symbol `text` or fail.
    pub fn expect_sym(&mut self, text: &str, expected: &'static str) -> Result<Span, ParseError> {
        let position = self.pos;
        let token = self.advance(expected)?;
        if token.kind.is_sym(text) {
            Ok(token.span)
        } else {
            Err(ParseError::unexpected(token, position, expected))
        }
    }

    /// Consume a name: a symbol that is not punctuation.
    pub fn expect_name(&mut self, expected: &'static str) -> Result<(String, Span), ParseError> {
        let position = self.pos;
        let token = self.advance(expected)?;
        match &token.kind {
            TokenKind::Sym(s) if !s.chars().all(amsl_lexer::is_delimiter) => {
                Ok((s.clone(), token.span))
            }
            _ => Err(ParseError::unexpected(token, position, expected)),
        }
    }

    /// Span of the most recently consumed token.
    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    /// Zero-length span just past the last token.
    pub fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map_or(Span::DUMMY, |t| Span::point(t.span.end))
    }
}
