//! Builtin function table.

mod defaults;

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{EvalError, SharedPrintHandler, Value};

/// A host function callable as `@name(...)`.
pub type BuiltinFn = Box<dyn Fn(&[Value]) -> Result<Value, EvalError>>;

/// Name-indexed table of builtins. Lookup is by exact name.
#[derive(Default)]
pub struct BuiltinRegistry {
    functions: FxHashMap<String, BuiltinFn>,
}

impl BuiltinRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        BuiltinRegistry::default()
    }

    /// The standard builtins, printing through `print`.
    pub fn with_defaults(print: SharedPrintHandler) -> Self {
        let mut registry = BuiltinRegistry::new();
        defaults::install(&mut registry, &print);
        registry
    }

    /// Add `function` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&[Value]) -> Result<Value, EvalError> + 'static,
    {
        self.functions.insert(name.into(), Box::new(function));
    }

    pub fn get(&self, name: &str) -> Option<&BuiltinFn> {
        self.functions.get(name)
    }

    /// Call `name` with already evaluated arguments.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, EvalError> {
        let function = self.get(name).ok_or_else(|| EvalError::UnknownFunction {
            name: name.to_owned(),
        })?;
        function(args)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for BuiltinRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
