//! Character-level scanning.

use amsl_ir::{Span, Token, TokenKind};
use memchr::memchr2;

use crate::number::classify_word;
use crate::LexError;

/// Characters that always form a token of their own.
const DELIMITERS: &[char] = &[
    ';', ':', ',', '.', '-', '+', '*', '/', '(', ')', '[', ']', '{', '}', '<', '>', '@', '&', '|',
    '=', '!',
];

/// Whether `c` is one of the single-character punctuation tokens.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

#[inline]
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\r' | '\t' | '\x0B' | '\x0C')
}

/// Tokenize `source`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::debug!(tokens = tokens.len(), bytes = source.len(), "lexed source");
    Ok(tokens)
}

struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Lexer {
            source,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.peek() {
            if is_whitespace(c) {
                self.pos += c.len_utf8();
            } else if c == '"' {
                self.string_literal()?;
            } else if is_delimiter(c) {
                let start = self.pos;
                self.pos += 1;
                self.push(TokenKind::Sym(c.to_string()), start);
            } else {
                self.word()?;
            }
        }
        Ok(self.tokens)
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens
            .push(Token::new(kind, Span::from_range(start..self.pos)));
    }

    /// A run of characters up to whitespace, a delimiter or a quote.
    fn word(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_whitespace(c) || is_delimiter(c) || c == '"' {
                break;
            }
            self.pos += c.len_utf8();
        }
        let text = &self.source[start..self.pos];
        let kind = classify_word(text, Span::from_range(start..self.pos))?;
        self.push(kind, start);
        Ok(())
    }

    /// A quoted literal; the cursor is on the opening quote.
    fn string_literal(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        self.pos += 1;
        let source = self.source;
        let bytes = source.as_bytes();
        let mut value = String::new();

        loop {
            let Some(offset) = memchr2(b'"', b'\\', &bytes[self.pos..]) else {
                return Err(LexError::UnterminatedString {
                    span: Span::from_range(start..source.len()),
                });
            };
            value.push_str(&source[self.pos..self.pos + offset]);
            self.pos += offset;

            if bytes[self.pos] == b'"' {
                self.pos += 1;
                self.push(TokenKind::Str(value), start);
                return Ok(());
            }

            // Backslash: the next character is taken through `unescape`.
            self.pos += 1;
            let Some(escaped) = self.peek() else {
                return Err(LexError::UnterminatedString {
                    span: Span::from_range(start..source.len()),
                });
            };
            value.push(unescape(escaped));
            self.pos += escaped.len_utf8();
        }
    }
}

/// Meaning of `\c` inside a string literal. Unknown escapes stand for the
/// character itself, so `\"` and `\\` need no special case.
fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'a' => '\x07',
        'f' => '\x0C',
        'v' => '\x0B',
        'b' => '\x08',
        other => other,
    }
}
