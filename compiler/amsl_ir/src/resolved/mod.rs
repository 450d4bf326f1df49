//! Tree after name resolution.
//!
//! Identical in shape to [`ExprKind`](crate::ExprKind) except that variable
//! uses have become [`Slot`]s. This is the form that crosses the
//! serialization boundary, so it carries no spans.

use std::fmt;

use crate::ast::write_joined;

/// Position of a binding on the runtime slot stack, counted from the most
/// recently pushed slot (`0` is the newest).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Slot(usize);

impl Slot {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Slot(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Resolved expression variants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolvedExpr {
    List(Vec<ResolvedExpr>),
    Call {
        name: String,
        args: Vec<ResolvedExpr>,
    },
    VarDecl {
        name: String,
        ty: Option<String>,
        init: Option<Box<ResolvedExpr>>,
    },
    Slot(Slot),
    Assign {
        lhs: Box<ResolvedExpr>,
        rhs: Box<ResolvedExpr>,
    },
    Int(i64),
    Str(String),
}

impl ResolvedExpr {
    /// Variant name, used as context in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResolvedExpr::List(_) => "list",
            ResolvedExpr::Call { .. } => "call",
            ResolvedExpr::VarDecl { .. } => "declaration",
            ResolvedExpr::Slot(_) => "slot reference",
            ResolvedExpr::Assign { .. } => "assignment",
            ResolvedExpr::Int(_) => "integer literal",
            ResolvedExpr::Str(_) => "string literal",
        }
    }

    /// Total number of nodes in the tree, this one included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                ResolvedExpr::List(items) | ResolvedExpr::Call { args: items, .. } => {
                    pending.extend(items);
                }
                ResolvedExpr::VarDecl { init, .. } => pending.extend(init.as_deref()),
                ResolvedExpr::Assign { lhs, rhs } => {
                    pending.push(lhs);
                    pending.push(rhs);
                }
                ResolvedExpr::Slot(_) | ResolvedExpr::Int(_) | ResolvedExpr::Str(_) => {}
            }
        }
        count
    }
}

impl fmt::Display for ResolvedExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedExpr::List(items) => {
                f.write_str("List[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            ResolvedExpr::Call { name, args } => {
                write!(f, "Call({name}, [")?;
                write_joined(f, args)?;
                f.write_str("])")
            }
            ResolvedExpr::VarDecl { name, ty, init } => {
                write!(f, "VarDecl({name}")?;
                if let Some(ty) = ty {
                    write!(f, ": {ty}")?;
                }
                if let Some(init) = init {
                    write!(f, " = {init}")?;
                }
                f.write_str(")")
            }
            ResolvedExpr::Slot(slot) => write!(f, "Slot({})", slot.index()),
            ResolvedExpr::Assign { lhs, rhs } => write!(f, "Assign({lhs}, {rhs})"),
            ResolvedExpr::Int(v) => write!(f, "Int({v})"),
            ResolvedExpr::Str(s) => write!(f, "Str({s:?})"),
        }
    }
}
