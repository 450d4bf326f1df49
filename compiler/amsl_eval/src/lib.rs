//! AMSL Eval - executes a resolved program.
//!
//! Variables live on a [`SlotStack`]. Every frame the resolver opened (a
//! list, a call argument, an initializer, an assignment operand) is mirrored
//! here by remembering the stack length on entry and truncating back to it
//! on exit, so a [`Slot`](amsl_ir::Slot) index computed at resolve time
//! addresses the same binding at run time without any names.
//!
//! Functions are host callables looked up by name in a
//! [`BuiltinRegistry`]; their output goes through a [`SharedPrintHandler`].

mod builtins;
mod error;
mod executor;
pub mod print_handler;
mod stack;
mod value;

pub use builtins::{BuiltinFn, BuiltinRegistry};
pub use error::EvalError;
pub use executor::Executor;
pub use print_handler::{PrintHandler, SharedPrintHandler};
pub use stack::SlotStack;
pub use value::Value;

use amsl_ir::ResolvedExpr;

/// Execute a whole program with a fresh slot stack.
#[tracing::instrument(level = "trace", skip_all)]
pub fn execute(expr: &ResolvedExpr, builtins: &BuiltinRegistry) -> Result<Value, EvalError> {
    let value = Executor::new(builtins).execute(expr)?;
    tracing::debug!(value = value.type_name(), "executed program");
    Ok(value)
}
