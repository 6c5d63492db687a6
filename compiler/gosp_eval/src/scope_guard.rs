//! RAII scope guards for the binding stack.
//!
//! [`ScopedState`] records the binding depth when created and truncates back
//! to it on drop, so every binding pushed through the guard is popped on
//! every exit path, early returns and `?` included.
//!
//! ```text
//! {
//!     let mut scoped = state.scoped();
//!     scoped.push_binding(name, value);
//!     scoped.evaluate(body)
//! } // bindings popped here
//! ```

use std::ops::{Deref, DerefMut};

use gosp_ir::Expression;

use crate::InterpreterState;

/// Guard that restores the binding stack depth on drop.
///
/// Access the state through the guard; it implements `Deref` and `DerefMut`.
pub struct ScopedState<'a> {
    state: &'a mut InterpreterState,
    depth: usize,
}

impl Drop for ScopedState<'_> {
    fn drop(&mut self) {
        self.state.truncate_bindings(self.depth);
    }
}

impl Deref for ScopedState<'_> {
    type Target = InterpreterState;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl DerefMut for ScopedState<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl InterpreterState {
    /// Open a binding scope that closes when the guard is dropped.
    pub fn scoped(&mut self) -> ScopedState<'_> {
        let depth = self.binding_count();
        ScopedState { state: self, depth }
    }

    /// Run `f` with one extra binding.
    pub fn with_binding<T>(
        &mut self,
        id: impl Into<String>,
        value: Expression,
        f: impl FnOnce(&mut ScopedState<'_>) -> T,
    ) -> T {
        let mut scoped = self.scoped();
        scoped.push_binding(id, value);
        f(&mut scoped)
    }

    /// Run `f` with several bindings, pushed in order.
    pub fn with_bindings<T, I>(&mut self, bindings: I, f: impl FnOnce(&mut ScopedState<'_>) -> T) -> T
    where
        I: IntoIterator<Item = (String, Expression)>,
    {
        let mut scoped = self.scoped();
        for (id, value) in bindings {
            scoped.push_binding(id, value);
        }
        f(&mut scoped)
    }
}

#[cfg(test)]
mod tests;
