//! AMSL Codec - the binary form of a resolved program.
//!
//! The buffer is a 5-byte header followed by exactly one root node:
//!
//! ```text
//! header: b"AMSL" | version: u8
//! node:   tag: u8 | payload
//! ```
//!
//! | tag | node      | payload                                   |
//! |-----|-----------|-------------------------------------------|
//! | 0   | `List`    | `seq<node>`                               |
//! | 1   | `Call`    | `str` name, `seq<node>` args              |
//! | 2   | `VarDecl` | `str` name, `opt<str>` type, `opt<node>`  |
//! | 3   | `Slot`    | `u64` index                               |
//! | 4   | `Assign`  | `node` lhs, `node` rhs                    |
//! | 5   | `Int`     | `i64`                                     |
//! | 6   | `Str`     | `str`                                     |
//!
//! Integers are fixed-width little-endian. `seq<T>` is a `u64` count then the
//! elements, `str` a `u64` byte length then UTF-8, `opt<T>` a presence byte
//! (`0` or `1`) then the value when present.
//!
//! ```
//! use amsl_ir::ResolvedExpr;
//!
//! let program = ResolvedExpr::List(vec![ResolvedExpr::Int(7)]);
//! let bytes = amsl_codec::encode(&program);
//! assert_eq!(&bytes[..4], amsl_codec::MAGIC);
//! assert_eq!(amsl_codec::decode(&bytes), Ok(program));
//! ```

mod decode;
mod encode;
mod error;
mod tag;

pub use decode::{decode, Decoder};
pub use encode::{encode, Encoder};
pub use error::DecodeError;
pub use tag::Tag;

/// First four bytes of every IR buffer.
pub const MAGIC: &[u8; 4] = b"AMSL";

/// Layout version written after [`MAGIC`]. Decoding rejects any other.
pub const FORMAT_VERSION: u8 = 1;

/// Length of the buffer header.
pub const HEADER_LEN: usize = MAGIC.len() + 1;
