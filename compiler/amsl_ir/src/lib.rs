//! AMSL IR - data types shared by every pipeline stage.
//!
//! - [`Span`]: byte ranges into the source text
//! - [`Token`] / [`TokenKind`]: lexer output
//! - [`Expr`] / [`ExprKind`]: the syntactic tree produced by the parser
//! - [`ResolvedExpr`] / [`Slot`]: the tree after name resolution, which is
//!   the form that gets serialized and executed
//!
//! The two trees are closed sum types. Every pass matches on them
//! exhaustively, so adding a variant is a compile error everywhere it matters.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
pub mod resolved;
mod span;
mod stack;
mod token;

pub use ast::{Expr, ExprKind};
pub use resolved::{ResolvedExpr, Slot};
pub use span::Span;
pub use stack::ensure_sufficient_stack;
pub use token::{Token, TokenKind};
