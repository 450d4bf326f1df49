//! Encoding.

use amsl_ir::{ensure_sufficient_stack, ResolvedExpr};

use crate::{Tag, FORMAT_VERSION, MAGIC};

/// Encode a resolved program, header included.
///
/// Deterministic: equal trees always produce identical bytes.
#[tracing::instrument(level = "trace", skip_all)]
pub fn encode(expr: &ResolvedExpr) -> Vec<u8> {
    let mut encoder = Encoder::new();
    encoder.write_header();
    encoder.write_node(expr);
    let bytes = encoder.finish();
    tracing::debug!(bytes = bytes.len(), "encoded program");
    bytes
}

/// Append-only writer for the IR layout.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Encoder::default()
    }

    pub fn write_header(&mut self) {
        self.buf.extend_from_slice(MAGIC);
        self.buf.push(FORMAT_VERSION);
    }

    pub fn write_node(&mut self, expr: &ResolvedExpr) {
        ensure_sufficient_stack(|| self.write_node_inner(expr));
    }

    fn write_node_inner(&mut self, expr: &ResolvedExpr) {
        self.buf.push(Tag::of(expr).to_byte());
        match expr {
            ResolvedExpr::List(items) => self.write_seq(items),
            ResolvedExpr::Call { name, args } => {
                self.write_str(name);
                self.write_seq(args);
            }
            ResolvedExpr::VarDecl { name, ty, init } => {
                self.write_str(name);
                match ty {
                    Some(ty) => {
                        self.buf.push(1);
                        self.write_str(ty);
                    }
                    None => self.buf.push(0),
                }
                match init {
                    Some(init) => {
                        self.buf.push(1);
                        self.write_node(init);
                    }
                    None => self.buf.push(0),
                }
            }
            ResolvedExpr::Slot(slot) => self.write_len(slot.index()),
            ResolvedExpr::Assign { lhs, rhs } => {
                self.write_node(lhs);
                self.write_node(rhs);
            }
            ResolvedExpr::Int(value) => self.buf.extend_from_slice(&value.to_le_bytes()),
            ResolvedExpr::Str(value) => self.write_str(value),
        }
    }

    fn write_seq(&mut self, items: &[ResolvedExpr]) {
        self.write_len(items.len());
        for item in items {
            self.write_node(item);
        }
    }

    fn write_str(&mut self, s: &str) {
        self.write_len(s.len());
        self.buf.extend_from_slice(s.as_bytes());
    }

    fn write_len(&mut self, len: usize) {
        // usize is at most 64 bits on every supported target.
        self.buf.extend_from_slice(&(len as u64).to_le_bytes());
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
