//! AST traversal.

use amsl_ir::{ensure_sufficient_stack, Expr, ExprKind, ResolvedExpr};

use crate::{ResolveError, ScopeStack};

/// Single-use resolver state: the scope stack of the traversal.
#[derive(Debug, Default)]
pub struct Resolver {
    scopes: ScopeStack,
}

impl Resolver {
    pub fn new() -> Self {
        Resolver::default()
    }

    pub fn resolve(&mut self, expr: &Expr) -> Result<ResolvedExpr, ResolveError> {
        ensure_sufficient_stack(|| self.resolve_inner(expr))
    }

    fn resolve_inner(&mut self, expr: &Expr) -> Result<ResolvedExpr, ResolveError> {
        match &expr.kind {
            ExprKind::List(items) => self
                .in_scope(|r| {
                    items
                        .iter()
                        .map(|item| r.resolve(item))
                        .collect::<Result<Vec<_>, _>>()
                })
                .map(ResolvedExpr::List),

            ExprKind::Call { name, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.in_scope(|r| r.resolve(arg)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ResolvedExpr::Call {
                    name: name.clone(),
                    args,
                })
            }

            ExprKind::VarDecl { name, ty, init } => {
                // The initializer runs before the name exists.
                let init = match init {
                    Some(init) => Some(Box::new(self.in_scope(|r| r.resolve(init))?)),
                    None => None,
                };
                if !self.scopes.declare(name) {
                    return Err(ResolveError::DeclarationOutsideBlock {
                        name: name.clone(),
                        span: expr.span,
                    });
                }
                Ok(ResolvedExpr::VarDecl {
                    name: name.clone(),
                    ty: ty.clone(),
                    init,
                })
            }

            ExprKind::VarRef(name) => {
                let slot = self
                    .scopes
                    .lookup(name)
                    .ok_or_else(|| ResolveError::Unresolved {
                        name: name.clone(),
                        span: expr.span,
                    })?;
                tracing::trace!(name = %name, slot = slot.index(), "bound variable");
                Ok(ResolvedExpr::Slot(slot))
            }

            ExprKind::Assign { lhs, rhs } => {
                let lhs = self.in_scope(|r| r.resolve(lhs))?;
                let rhs = self.in_scope(|r| r.resolve(rhs))?;
                Ok(ResolvedExpr::Assign {
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                })
            }

            ExprKind::Int(value) => Ok(ResolvedExpr::Int(*value)),
            ExprKind::Str(value) => Ok(ResolvedExpr::Str(value.clone())),
        }
    }

    /// Run `f` inside a fresh scope, popping it whatever `f` returns.
    fn in_scope<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.scopes.push();
        let result = f(self);
        self.scopes.pop();
        result
    }
}

#[cfg(test)]
mod tests;
