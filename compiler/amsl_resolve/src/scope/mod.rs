//! Lexical scopes and the slot numbering rule.

use amsl_ir::Slot;
use smallvec::SmallVec;

/// Names declared in one frame, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    names: SmallVec<[String; 8]>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// Append a declaration. Redeclaring a name shadows the earlier one.
    pub fn declare(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Distance of the latest declaration of `name` from the end of this
    /// scope (`0` = declared last).
    pub fn position_from_end(&self, name: &str) -> Option<usize> {
        self.names.iter().rev().position(|n| n == name)
    }
}

/// Stack of scopes, outermost first.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    pub fn push(&mut self) {
        self.scopes.push(Scope::new());
    }

    pub fn pop(&mut self) {
        self.scopes.pop();
    }

    /// Declare `name` in the innermost scope. Returns `false` when there is no
    /// scope to declare into.
    #[must_use]
    pub fn declare(&mut self, name: &str) -> bool {
        match self.scopes.last_mut() {
            Some(scope) => {
                scope.declare(name);
                true
            }
            None => false,
        }
    }

    /// Slot for `name`: scopes are searched innermost first and, within a
    /// scope, latest declaration first. The index is the number of
    /// declarations passed over before the match.
    pub fn lookup(&self, name: &str) -> Option<Slot> {
        let mut skipped = 0;
        for scope in self.scopes.iter().rev() {
            if let Some(distance) = scope.position_from_end(name) {
                return Some(Slot::new(skipped + distance));
            }
            skipped += scope.len();
        }
        None
    }
}

#[cfg(test)]
mod tests;
