//! Classification of bare words into integers and symbols.

use amsl_ir::{Span, TokenKind};

use crate::LexError;

/// Radix prefixes, checked in order. A leading `0` on its own means octal
/// and is handled after these.
const PREFIXES: [(&str, u32); 3] = [("0b", 2), ("0d", 10), ("0x", 16)];

/// Turn a bare word into a token kind. Words starting with a digit must be
/// well-formed integers; anything else is a symbol.
pub(crate) fn classify_word(text: &str, span: Span) -> Result<TokenKind, LexError> {
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return Ok(TokenKind::Sym(text.to_owned()));
    }

    let (digits, radix) = PREFIXES
        .iter()
        .find_map(|&(prefix, radix)| {
            text.strip_prefix(prefix)
                .filter(|rest| !rest.is_empty())
                .map(|rest| (rest, radix))
        })
        .unwrap_or_else(|| match text.strip_prefix('0') {
            Some(rest) if !rest.is_empty() => (rest, 8),
            _ => (text, 10),
        });

    parse_digits(digits, radix)
        .map(TokenKind::Int)
        .map_err(|overflow| {
            if overflow {
                LexError::IntOverflow {
                    text: text.to_owned(),
                    span,
                }
            } else {
                LexError::InvalidNumber {
                    text: text.to_owned(),
                    span,
                }
            }
        })
}

/// Parse `digits` in `radix`, skipping `_` separators.
///
/// The error is `true` on overflow and `false` on a malformed digit string.
fn parse_digits(digits: &str, radix: u32) -> Result<i64, bool> {
    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars().filter(|&c| c != '_') {
        let digit = c.to_digit(radix).ok_or(false)?;
        value = value
            .checked_mul(i64::from(radix))
            .and_then(|v| v.checked_add(i64::from(digit)))
            .ok_or(true)?;
        seen_digit = true;
    }
    if seen_digit {
        Ok(value)
    } else {
        Err(false)
    }
}

#[cfg(test)]
mod tests;
