//! AMSL Resolver - binds every variable use to a slot index.
//!
//! A single depth-first pass over the AST with a stack of scopes. Each
//! `VarRef` becomes a [`Slot`](amsl_ir::Slot): the distance, counted in
//! declarations, from the top of the runtime slot stack to the binding the
//! name refers to. The executor never sees a name again, so the numbering
//! here and the push/truncate discipline in `amsl_eval` must agree exactly.
//!
//! # Frames
//!
//! | node              | frame                                      |
//! |-------------------|--------------------------------------------|
//! | `List`            | one scope for all of its children          |
//! | `Call` argument   | one empty scope per argument               |
//! | `VarDecl` init    | one empty scope, name declared afterwards  |
//! | `Assign` operand  | one empty scope each for lhs and rhs       |
//!
//! Empty frames never change an index; they only bound the lifetime of any
//! declaration made inside them.

mod error;
mod resolver;
mod scope;

pub use error::ResolveError;
pub use resolver::Resolver;
use scope::ScopeStack;

use amsl_ir::{Expr, ResolvedExpr};

/// Resolve a whole program.
#[tracing::instrument(level = "trace", skip_all)]
pub fn resolve(expr: &Expr) -> Result<ResolvedExpr, ResolveError> {
    let resolved = Resolver::new().resolve(expr)?;
    tracing::debug!(nodes = resolved.node_count(), "resolved program");
    Ok(resolved)
}
