//! Decoding.
//!
//! The input is untrusted: every read is bounds-checked and reports the
//! offset where it failed, and no count from the buffer reserves more
//! capacity than the bytes that remain could possibly fill.

use amsl_ir::{ensure_sufficient_stack, ResolvedExpr, Slot};

use crate::{DecodeError, Tag, FORMAT_VERSION, MAGIC};

/// Decode a complete IR buffer: header, one root node, nothing after it.
#[tracing::instrument(level = "trace", skip_all)]
pub fn decode(bytes: &[u8]) -> Result<ResolvedExpr, DecodeError> {
    let mut decoder = Decoder::new(bytes);
    decoder.read_header()?;
    let expr = decoder.read_node()?;
    decoder.finish()?;
    tracing::debug!(
        bytes = bytes.len(),
        nodes = expr.node_count(),
        "decoded program"
    );
    Ok(expr)
}

/// Cursor over an IR buffer.
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Decoder { bytes, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn read_header(&mut self) -> Result<(), DecodeError> {
        let start = self.pos;
        // A matching but short prefix is truncation, not a foreign file.
        let present = self.remaining().min(MAGIC.len());
        if self.bytes[start..start + present] != MAGIC[..present] {
            return Err(DecodeError::BadMagic { offset: start });
        }
        self.take(MAGIC.len())?;

        let offset = self.pos;
        let version = self.read_u8()?;
        if version != FORMAT_VERSION {
            return Err(DecodeError::UnsupportedVersion { version, offset });
        }
        Ok(())
    }

    pub fn read_node(&mut self) -> Result<ResolvedExpr, DecodeError> {
        ensure_sufficient_stack(|| self.read_node_inner())
    }

    fn read_node_inner(&mut self) -> Result<ResolvedExpr, DecodeError> {
        let offset = self.pos;
        let byte = self.read_u8()?;
        let tag = Tag::from_byte(byte).ok_or(DecodeError::UnknownTag { tag: byte, offset })?;

        Ok(match tag {
            Tag::List => ResolvedExpr::List(self.read_seq()?),
            Tag::Call => {
                let name = self.read_str()?;
                let args = self.read_seq()?;
                ResolvedExpr::Call { name, args }
            }
            Tag::VarDecl => {
                let name = self.read_str()?;
                let ty = if self.read_flag()? {
                    Some(self.read_str()?)
                } else {
                    None
                };
                let init = if self.read_flag()? {
                    Some(Box::new(self.read_node()?))
                } else {
                    None
                };
                ResolvedExpr::VarDecl { name, ty, init }
            }
            Tag::Slot => ResolvedExpr::Slot(Slot::new(self.read_len()?)),
            Tag::Assign => {
                let lhs = Box::new(self.read_node()?);
                let rhs = Box::new(self.read_node()?);
                ResolvedExpr::Assign { lhs, rhs }
            }
            Tag::Int => ResolvedExpr::Int(i64::from_le_bytes(self.read_array()?)),
            Tag::Str => ResolvedExpr::Str(self.read_str()?),
        })
    }

    /// Require that the whole buffer has been consumed.
    pub fn finish(&self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            count => Err(DecodeError::TrailingBytes {
                count,
                offset: self.pos,
            }),
        }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining() {
            return Err(DecodeError::UnexpectedEnd {
                offset: self.pos,
                needed: n - self.remaining(),
            });
        }
        let bytes = self.bytes;
        let slice = &bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut array = [0; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.take(1)?[0])
    }

    fn read_flag(&mut self) -> Result<bool, DecodeError> {
        let offset = self.pos;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(DecodeError::InvalidFlag { value, offset }),
        }
    }

    /// A `u64` that must fit in `usize`.
    fn read_len(&mut self) -> Result<usize, DecodeError> {
        let offset = self.pos;
        let value = u64::from_le_bytes(self.read_array()?);
        usize::try_from(value).map_err(|_| DecodeError::LengthOverflow { value, offset })
    }

    fn read_str(&mut self) -> Result<String, DecodeError> {
        let len = self.read_len()?;
        let offset = self.pos;
        let bytes = self.take(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| DecodeError::InvalidUtf8 { offset })
    }

    fn read_seq(&mut self) -> Result<Vec<ResolvedExpr>, DecodeError> {
        let count = self.read_len()?;
        // Each node takes at least its tag byte.
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(self.read_node()?);
        }
        Ok(items)
    }
}
