//! Override chain - composing definitions by sequential merge.
//!
//! A definition ([`Def`]) is either a plain value or a function of a
//! shared context. [`resolve_chain`] evaluates the base and every override
//! independently against the *same* context - no entry ever observes
//! another entry's output - then merges the results left to right.
//! Order affects merge precedence only, never computation.
//!
//! Merge semantics live on the [`Merge`] trait: scalar leaf values are
//! replaced by later entries, object-valued keys combine recursively.
//! The removal convention differs per domain and is documented on each
//! implementation ([`Attributes`](crate::types::Attributes) omits on an
//! explicit `None`, [`StyleObject`](crate::style::StyleObject) removes on
//! an explicit `Unset`).

use std::rc::Rc;

// =============================================================================
// Merge trait
// =============================================================================

/// Structural merge with last-wins precedence.
pub trait Merge {
    /// Fold `later` into `self`; on conflicts `later` wins.
    fn merge_from(&mut self, later: Self);
}

/// Merge a sequence of already-evaluated values onto a base, in order.
pub fn merge_all<T: Merge>(mut base: T, rest: impl IntoIterator<Item = T>) -> T {
    for value in rest {
        base.merge_from(value);
    }
    base
}

// =============================================================================
// Definitions
// =============================================================================

/// A definition entry: a plain value, or a function of the resolution
/// context producing one.
pub enum Def<T, C> {
    /// Use the value as-is.
    Value(T),
    /// Invoke with the shared context to produce the value.
    Func(Rc<dyn Fn(&C) -> T>),
}

impl<T, C> Def<T, C> {
    /// Wrap a function entry.
    pub fn func(f: impl Fn(&C) -> T + 'static) -> Self {
        Self::Func(Rc::new(f))
    }

    /// Evaluate against `ctx`. Value entries ignore the context.
    pub fn eval(&self, ctx: &C) -> T
    where
        T: Clone,
    {
        match self {
            Self::Value(v) => v.clone(),
            Self::Func(f) => f(ctx),
        }
    }
}

impl<T: Clone, C> Clone for Def<T, C> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(v) => Self::Value(v.clone()),
            Self::Func(f) => Self::Func(Rc::clone(f)),
        }
    }
}

impl<T, C> From<T> for Def<T, C> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for Def<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

// =============================================================================
// Chain resolution
// =============================================================================

/// Resolve an override chain: evaluate `base` and every entry of
/// `overrides` against the same `ctx`, then merge left to right.
///
/// Later entries win on conflicting leaf keys; nested keys combine.
pub fn resolve_chain<T, C>(base: &Def<T, C>, overrides: &[Def<T, C>], ctx: &C) -> T
where
    T: Merge + Clone,
{
    let first = base.eval(ctx);
    // Evaluate everything up front: entries must not see partial merges.
    let evaluated: Vec<T> = overrides.iter().map(|def| def.eval(ctx)).collect();
    merge_all(first, evaluated)
}

// =============================================================================
// Tests
// =============================================================================
