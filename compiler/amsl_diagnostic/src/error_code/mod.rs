//! Error codes for all diagnostics.
//!
//! Format `E####`, first digit is the stage:
//! - E0xxx: lexer
//! - E1xxx: parser
//! - E2xxx: resolver
//! - E3xxx: IR decoding
//! - E6xxx: runtime
//! - E9xxx: internal invariant violations

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid number literal
    E0003,
    /// Integer literal does not fit in 64 bits
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unexpected end of input
    E1003,
    /// Tokens after the program expression
    E1004,

    // Resolver Errors (E2xxx)
    /// Unresolved variable
    E2001,
    /// Declaration outside of any block
    E2002,

    // IR Decode Errors (E3xxx)
    /// Missing IR magic header
    E3001,
    /// Unsupported IR format version
    E3002,
    /// Unknown node tag
    E3003,
    /// Truncated IR buffer
    E3004,
    /// Invalid presence flag
    E3005,
    /// String payload is not UTF-8
    E3006,
    /// Length prefix does not fit in memory
    E3007,
    /// Bytes after the root node
    E3008,

    // Runtime Errors (E6xxx)
    /// Unknown function
    E6001,
    /// Invalid assignment target
    E6002,
    /// Wrong number of arguments
    E6003,
    /// Wrong argument type
    E6004,
    /// Division by zero
    E6005,
    /// Integer overflow
    E6006,
    /// I/O failure inside a builtin
    E6007,

    // Internal Errors (E9xxx)
    /// Slot index outside the runtime slot stack
    E9001,
}

impl ErrorCode {
    /// The code as written in diagnostics, e.g. `"E2001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E3008 => "E3008",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Whether this code reports a broken pipeline invariant rather than a
    /// problem with the user's program.
    pub fn is_internal(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }

    /// Whether this code comes from reading an IR buffer.
    pub fn is_decode_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
