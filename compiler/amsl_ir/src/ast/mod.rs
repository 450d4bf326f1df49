//! Syntactic tree produced by the parser.
//!
//! The tree is one-to-one with the token stream: names are still strings and
//! nothing has been checked beyond shape.

use std::fmt;

use crate::Span;

/// An expression node with the span of the tokens it was parsed from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression variants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExprKind {
    /// `{ a; b; c }`, a block opening a new lexical scope.
    List(Vec<Expr>),
    /// `@name(args...)`, a builtin call.
    Call { name: String, args: Vec<Expr> },
    /// `let name [: ty] [= init]`.
    VarDecl {
        name: String,
        ty: Option<String>,
        init: Option<Box<Expr>>,
    },
    /// A variable use, not yet bound to a declaration.
    VarRef(String),
    /// `apply lhs rhs`.
    Assign { lhs: Box<Expr>, rhs: Box<Expr> },
    Int(i64),
    Str(String),
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl ExprKind {
    /// Variant name, used as context in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::List(_) => "list",
            ExprKind::Call { .. } => "call",
            ExprKind::VarDecl { .. } => "declaration",
            ExprKind::VarRef(_) => "variable",
            ExprKind::Assign { .. } => "assignment",
            ExprKind::Int(_) => "integer literal",
            ExprKind::Str(_) => "string literal",
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::List(items) => {
                f.write_str("List[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            ExprKind::Call { name, args } => {
                write!(f, "Call({name}, [")?;
                write_joined(f, args)?;
                f.write_str("])")
            }
            ExprKind::VarDecl { name, ty, init } => {
                write!(f, "VarDecl({name}")?;
                if let Some(ty) = ty {
                    write!(f, ": {ty}")?;
                }
                if let Some(init) = init {
                    write!(f, " = {init}")?;
                }
                f.write_str(")")
            }
            ExprKind::VarRef(name) => write!(f, "VarRef({name})"),
            ExprKind::Assign { lhs, rhs } => write!(f, "Assign({lhs}, {rhs})"),
            ExprKind::Int(v) => write!(f, "Int({v})"),
            ExprKind::Str(s) => write!(f, "Str({s:?})"),
        }
    }
}

/// Write `items` separated by `", "`.
pub(crate) fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
