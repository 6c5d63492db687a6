//! Function registry and binding stack.

use std::sync::Arc;

use gosp_ir::{Builtin, Expression, Function};
use rustc_hash::FxHashMap;

/// A name bound to an evaluated or placeholder value.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub id: String,
    pub value: Expression,
}

/// Functions and bindings of one interpreter session.
///
/// Functions only ever grow, except when the parser rolls back a speculative
/// alternative. Bindings are pushed and popped strictly within the extent of
/// the construct that introduced them.
#[derive(Clone, Debug)]
pub struct InterpreterState {
    functions: Vec<Arc<Function>>,
    function_index: FxHashMap<String, usize>,
    bindings: Vec<Binding>,
}

impl Default for InterpreterState {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpreterState {
    /// Builtins only, no bindings.
    pub fn new() -> Self {
        let mut state = InterpreterState {
            functions: Vec::with_capacity(Builtin::ALL.len()),
            function_index: FxHashMap::default(),
            bindings: Vec::new(),
        };
        for &builtin in Builtin::ALL {
            state.define_function(Function::builtin(builtin));
        }
        state
    }

    pub fn functions(&self) -> &[Arc<Function>] {
        &self.functions
    }

    #[inline]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn find_function(&self, name: &str) -> Option<&Arc<Function>> {
        self.function_index
            .get(name)
            .and_then(|&index| self.functions.get(index))
    }

    /// Append a function to the registry.
    ///
    /// Callers check [`is_defined`](Self::is_defined) first; a duplicate
    /// name shadows the earlier entry for lookups.
    pub fn define_function(&mut self, function: Function) -> Arc<Function> {
        let function = Arc::new(function);
        self.function_index
            .insert(function.id.clone(), self.functions.len());
        self.functions.push(Arc::clone(&function));
        function
    }

    /// Drop every function defined after the first `len`.
    pub fn truncate_functions(&mut self, len: usize) {
        if len >= self.functions.len() {
            return;
        }
        for removed in self.functions.drain(len..) {
            self.function_index.remove(&removed.id);
        }
        // A removed duplicate may have shadowed a surviving entry.
        for (index, function) in self.functions.iter().enumerate() {
            self.function_index
                .entry(function.id.clone())
                .or_insert(index);
        }
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    #[inline]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn push_binding(&mut self, id: impl Into<String>, value: Expression) {
        self.bindings.push(Binding {
            id: id.into(),
            value,
        });
    }

    pub fn truncate_bindings(&mut self, len: usize) {
        self.bindings.truncate(len);
    }

    /// Whether `name` is taken by a function or any live binding.
    pub fn is_defined(&self, name: &str) -> bool {
        self.function_index.contains_key(name) || self.bindings.iter().any(|b| b.id == name)
    }

    /// Innermost binding of `name` among the first `limit` bindings.
    pub fn lookup_below(&self, name: &str, limit: usize) -> Option<(usize, &Expression)> {
        let limit = limit.min(self.bindings.len());
        self.bindings[..limit]
            .iter()
            .rposition(|binding| binding.id == name)
            .map(|index| (index, &self.bindings[index].value))
    }

    /// Value bound to `name`, following identifier-valued bindings.
    ///
    /// An identifier found in a binding is looked up strictly below that
    /// binding, so `(let x x ...)` cannot loop. Returns the last value reached
    /// (an `Id` when the chain ends at an unbound symbol), or `None` when
    /// `name` itself is unbound.
    pub fn resolve(&self, name: &str) -> Option<&Expression> {
        let mut name = name;
        let mut limit = self.bindings.len();
        let mut found = None;
        while let Some((index, value)) = self.lookup_below(name, limit) {
            found = Some(value);
            match value {
                Expression::Id(inner) => {
                    name = inner;
                    limit = index;
                }
                _ => break,
            }
        }
        found
    }
}

#[cfg(test)]
mod tests;
