//! Tree-walking execution over the slot stack.

use amsl_ir::{ensure_sufficient_stack, ResolvedExpr};

use crate::{BuiltinRegistry, EvalError, SlotStack, Value};

/// Runs resolved trees against one registry. The slot stack is owned and
/// is back at its starting depth after every `execute`, successful or not.
#[derive(Debug)]
pub struct Executor<'r> {
    builtins: &'r BuiltinRegistry,
    stack: SlotStack,
}

impl<'r> Executor<'r> {
    pub fn new(builtins: &'r BuiltinRegistry) -> Self {
        Executor {
            builtins,
            stack: SlotStack::new(),
        }
    }

    /// Evaluate `expr` in a frame of its own.
    pub fn execute(&mut self, expr: &ResolvedExpr) -> Result<Value, EvalError> {
        self.in_frame(|ex| ex.eval(expr))
    }

    fn eval(&mut self, expr: &ResolvedExpr) -> Result<Value, EvalError> {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &ResolvedExpr) -> Result<Value, EvalError> {
        match expr {
            ResolvedExpr::List(items) => self.in_frame(|ex| {
                let mut last = Value::Unit;
                for item in items {
                    last = ex.eval(item)?;
                }
                Ok(last)
            }),

            ResolvedExpr::Call { name, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.in_frame(|ex| ex.eval(arg)))
                    .collect::<Result<Vec<_>, _>>()?;
                tracing::trace!(name = %name, args = args.len(), "calling builtin");
                self.builtins.call(name, &args)
            }

            ResolvedExpr::VarDecl { ty, init, .. } => {
                let value = match init {
                    Some(init) => self.in_frame(|ex| ex.eval(init))?,
                    None => Value::default_for(ty.as_deref()),
                };
                // Lands in the frame of the enclosing list.
                self.stack.push(value.clone());
                Ok(value)
            }

            ResolvedExpr::Slot(slot) => self.stack.get(*slot).cloned(),

            ResolvedExpr::Assign { lhs, rhs } => {
                let value = self.in_frame(|ex| ex.eval(rhs))?;
                self.in_frame(|ex| {
                    let position = ex.eval_place(lhs)?;
                    ex.stack.set(position, value.clone())
                })?;
                Ok(value)
            }

            ResolvedExpr::Int(n) => Ok(Value::Int(*n)),
            ResolvedExpr::Str(s) => Ok(Value::Str(s.clone())),
        }
    }

    /// Evaluate an assignment target down to an absolute stack position.
    ///
    /// Bindings made on the way are left in the caller's frame, so the
    /// position is still valid when the caller stores through it.
    fn eval_place(&mut self, target: &ResolvedExpr) -> Result<usize, EvalError> {
        ensure_sufficient_stack(|| match target {
            ResolvedExpr::Slot(slot) => self.stack.position(*slot),

            // Leading children run for their effects; the last one names the place.
            ResolvedExpr::List(items) => match items.split_last() {
                Some((last, leading)) => {
                    for item in leading {
                        self.eval(item)?;
                    }
                    self.eval_place(last)
                }
                None => Err(EvalError::InvalidAssignmentTarget {
                    found: target.kind_name(),
                }),
            },

            ResolvedExpr::Assign { lhs, rhs } => {
                let value = self.in_frame(|ex| ex.eval(rhs))?;
                let position = self.eval_place(lhs)?;
                self.stack.set(position, value)?;
                Ok(position)
            }

            ResolvedExpr::Call { .. }
            | ResolvedExpr::VarDecl { .. }
            | ResolvedExpr::Int(_)
            | ResolvedExpr::Str(_) => Err(EvalError::InvalidAssignmentTarget {
                found: target.kind_name(),
            }),
        })
    }

    /// Run `f` with a stack mark, truncating back to it afterwards.
    fn in_frame<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let mark = self.stack.mark();
        let result = f(self);
        self.stack.truncate(mark);
        result
    }
}
