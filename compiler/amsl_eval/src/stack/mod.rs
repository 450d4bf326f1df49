//! Runtime slot stack.

use amsl_ir::Slot;

use crate::{EvalError, Value};

/// Bindings in declaration order; slot `0` is the most recent push.
#[derive(Clone, Debug, Default)]
pub struct SlotStack {
    slots: Vec<Value>,
}

impl SlotStack {
    pub fn new() -> Self {
        SlotStack::default()
    }

    pub fn depth(&self) -> usize {
        self.slots.len()
    }

    /// Current depth, to be handed back to [`truncate`](Self::truncate)
    /// when the frame ends.
    #[inline]
    pub fn mark(&self) -> usize {
        self.depth()
    }

    /// Drop every binding pushed since `mark`.
    #[inline]
    pub fn truncate(&mut self, mark: usize) {
        debug_assert!(mark <= self.slots.len(), "frame mark above stack top");
        self.slots.truncate(mark);
    }

    pub fn push(&mut self, value: Value) {
        self.slots.push(value);
    }

    pub fn get(&self, slot: Slot) -> Result<&Value, EvalError> {
        let index = self.position(slot)?;
        Ok(&self.slots[index])
    }

    /// Overwrite the binding at an absolute `position`.
    ///
    /// Positions come from [`position`](Self::position) and stay valid until
    /// the frame holding them is truncated.
    pub fn set(&mut self, position: usize, value: Value) -> Result<(), EvalError> {
        let depth = self.depth();
        let target = self
            .slots
            .get_mut(position)
            .ok_or(EvalError::SlotOutOfRange {
                slot: position,
                depth,
            })?;
        *target = value;
        Ok(())
    }

    /// Absolute index of `slot`, counted from the bottom of the stack.
    pub fn position(&self, slot: Slot) -> Result<usize, EvalError> {
        let depth = self.depth();
        if slot.index() < depth {
            Ok(depth - 1 - slot.index())
        } else {
            Err(EvalError::SlotOutOfRange {
                slot: slot.index(),
                depth,
            })
        }
    }
}

#[cfg(test)]
mod tests;
