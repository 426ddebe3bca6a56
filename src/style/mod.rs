//! Style resolution.
//!
//! A part's style is a CSS-like declaration tree ([`StyleObject`]):
//! string or numeric leaf values plus nested blocks for pseudo-selectors
//! (`:hover`, `::before`, ...). Styles resolve purely from
//! `{props, variables, theme}` - variables are resolved once per
//! component and theme before any style function runs, never per part.
//!
//! Override order is the chain from [`crate::merge`], scoped per part:
//! component default, then the theme's override, then the caller's.
//! Later entries win on conflicting declarations; nested blocks merge
//! recursively.
//!
//! # Removal convention
//!
//! Styles distinguish an *absent* declaration (inherit whatever an
//! earlier entry set) from an explicit [`StyleValue::Unset`] (remove the
//! declaration from the output). This is the opposite default from
//! attribute merging, where only an explicit `None` removes; the two
//! conventions are each documented where they live.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::merge::{merge_all, Merge};
use crate::theme::Theme;

pub mod units;

pub use units::{px_to_rem, px_to_rem_base, DEFAULT_REM_SIZE};

// =============================================================================
// Style values
// =============================================================================

/// A single CSS-like declaration value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Literal value, e.g. `"2.5rem"` or `"inline-block"`.
    Str(String),
    /// Unitless number, e.g. a font weight.
    Num(f64),
    /// Nested block keyed by a pseudo-selector.
    Block(StyleObject),
    /// Explicitly remove this declaration during a merge.
    Unset,
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Num(value as f64)
    }
}

impl From<StyleObject> for StyleValue {
    fn from(value: StyleObject) -> Self {
        Self::Block(value)
    }
}

// =============================================================================
// Style objects
// =============================================================================

/// CSS-like declarations for one part.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleObject {
    decls: BTreeMap<String, StyleValue>,
}

impl StyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration, replacing any previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.decls.insert(property.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.decls.get(property)
    }

    /// The string value of a declaration, if it is a [`StyleValue::Str`].
    pub fn get_str(&self, property: &str) -> Option<&str> {
        match self.decls.get(property) {
            Some(StyleValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// A nested block, if the declaration is one.
    pub fn get_block(&self, selector: &str) -> Option<&StyleObject> {
        match self.decls.get(selector) {
            Some(StyleValue::Block(block)) => Some(block),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.decls.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Merge for StyleObject {
    /// Later declarations win; nested blocks merge recursively; an
    /// explicit [`StyleValue::Unset`] removes the declaration. A
    /// declaration absent from `later` inherits the earlier value.
    fn merge_from(&mut self, later: Self) {
        for (property, value) in later.decls {
            match value {
                StyleValue::Unset => {
                    self.decls.remove(&property);
                }
                StyleValue::Block(block) => match self.decls.get_mut(&property) {
                    Some(StyleValue::Block(existing)) => existing.merge_from(block),
                    _ => {
                        self.decls.insert(property, StyleValue::Block(block));
                    }
                },
                v => {
                    self.decls.insert(property, v);
                }
            }
        }
    }
}

// =============================================================================
// Style functions and definitions
// =============================================================================

/// Everything a style function may read. Pure input, assembled fresh
/// each render pass.
pub struct StyleContext<'a, P, V> {
    pub props: &'a P,
    pub variables: &'a V,
    pub theme: &'a Theme,
}

/// A part's default style: a plain function of the context.
pub type StyleFn<P, V> = for<'a, 'b> fn(&'a StyleContext<'b, P, V>) -> StyleObject;

/// A style override entry: a literal object or a function of the
/// context. Same chain semantics as [`crate::merge::Def`]; a dedicated
/// type because the context borrows the render pass's props and
/// variables.
pub enum StyleDef<P, V> {
    Value(StyleObject),
    Func(Rc<dyn Fn(&StyleContext<'_, P, V>) -> StyleObject>),
}

impl<P, V> Clone for StyleDef<P, V> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(style) => Self::Value(style.clone()),
            Self::Func(f) => Self::Func(Rc::clone(f)),
        }
    }
}

impl<P, V> StyleDef<P, V> {
    /// Wrap a function entry.
    pub fn func(f: impl Fn(&StyleContext<'_, P, V>) -> StyleObject + 'static) -> Self {
        Self::Func(Rc::new(f))
    }

    /// Evaluate against the context. Value entries ignore it.
    pub fn eval(&self, ctx: &StyleContext<'_, P, V>) -> StyleObject {
        match self {
            Self::Value(style) => style.clone(),
            Self::Func(f) => f(ctx),
        }
    }
}

impl<P, V> From<StyleObject> for StyleDef<P, V> {
    fn from(value: StyleObject) -> Self {
        Self::Value(value)
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve one part's effective style.
///
/// `default` is the component's built-in style for the part; `overrides`
/// come in ascending precedence (theme-level first, caller-level last).
/// Every entry is evaluated against the same context before any merging
/// happens.
pub fn resolve_styles<P, V>(
    default: StyleFn<P, V>,
    overrides: &[StyleDef<P, V>],
    ctx: &StyleContext<'_, P, V>,
) -> StyleObject {
    let base = default(ctx);
    let evaluated: Vec<StyleObject> = overrides.iter().map(|def| def.eval(ctx)).collect();
    merge_all(base, evaluated)
}

// =============================================================================
// Tests
// =============================================================================
