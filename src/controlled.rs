//! Controlled/uncontrolled values.
//!
//! A component holds an [`AutoControlled`] field for state like an
//! accordion's active index: either the caller owns the value (controlled,
//! supplied as a prop every render) or the component owns it
//! (uncontrolled, seeded from a default). Composition instead of a base
//! class; no inheritance anywhere.

/// A value that is either caller-owned or component-owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoControlled<T> {
    value: T,
    controlled: bool,
}

impl<T> AutoControlled<T> {
    /// Caller-owned: the prop drives the value.
    pub fn controlled(value: T) -> Self {
        Self { value, controlled: true }
    }

    /// Component-owned, seeded from an initial default.
    pub fn uncontrolled(initial: T) -> Self {
        Self { value: initial, controlled: false }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Apply an internally computed value. No-op when controlled - the
    /// caller's prop is authoritative. Returns whether the value was
    /// applied.
    pub fn try_set(&mut self, value: T) -> bool {
        if self.controlled {
            return false;
        }
        self.value = value;
        true
    }

    /// The caller pushed a new prop value. No-op when uncontrolled.
    pub fn sync(&mut self, value: T) {
        if self.controlled {
            self.value = value;
        }
    }
}
