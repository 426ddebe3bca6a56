//! Core types - parts, attribute values, attribute sets.
//!
//! These are the currency of behavior resolution: every behavior produces
//! per-part [`Attributes`], and the contract layer applies them to the
//! rendered output node for that part.
//!
//! # Omission convention
//!
//! [`AttrValue::None`] is an *explicit* value meaning "omit this attribute
//! from the output". During a merge a later `None` removes the attribute
//! entirely, and [`Attributes::rendered`] never emits it. This is how a
//! behavior says "no `role` here" (e.g. a button rendered as a native
//! `<button>` needs no `role="button"`).

use std::collections::BTreeMap;

use crate::merge::Merge;

// =============================================================================
// Parts
// =============================================================================

/// Name of a sub-element within a component's rendered output.
///
/// The set of valid part names is fixed per component type and declared
/// as a `PARTS` constant in each component module.
pub type PartName = &'static str;

/// The part every component has: its outermost rendered element.
pub const ROOT: PartName = "root";

// =============================================================================
// Element tags
// =============================================================================

/// The element a component renders as.
///
/// Behaviors may consult this: `ButtonBehavior` skips `role="button"`
/// when the output element is natively a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    #[default]
    Div,
    Span,
    Button,
    Anchor,
    UnorderedList,
    ListItem,
    Paragraph,
}

impl Tag {
    /// The HTML tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Button => "button",
            Self::Anchor => "a",
            Self::UnorderedList => "ul",
            Self::ListItem => "li",
            Self::Paragraph => "p",
        }
    }
}

// =============================================================================
// Attribute values
// =============================================================================

/// A single DOM attribute value.
///
/// Booleans render as `"true"` / `"false"` strings (ARIA state attributes
/// like `aria-disabled` are string-valued in the DOM). `None` means "omit"
/// - see the module docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
    Int(i64),
    /// Explicitly omit the attribute. A later `None` in a merge removes
    /// the attribute set by an earlier entry.
    None,
}

impl AttrValue {
    /// Render to the string the DOM would carry, or `Option::None` for
    /// [`AttrValue::None`].
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::None => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

// =============================================================================
// Attribute sets
// =============================================================================

/// DOM attributes for one part, keyed by attribute name.
///
/// `BTreeMap` keeps iteration deterministic, so resolving twice with equal
/// inputs yields structurally equal output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: BTreeMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// The rendered string for an attribute, if present and not omitted.
    pub fn get_rendered(&self, name: &str) -> Option<String> {
        self.entries.get(name).and_then(AttrValue::render)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render to plain name/value pairs, skipping omitted attributes.
    pub fn rendered(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.render().map(|r| (k.clone(), r)))
            .collect()
    }
}

impl Merge for Attributes {
    /// Later entries win per attribute. A later [`AttrValue::None`]
    /// removes the attribute (explicit omission); an attribute absent
    /// from `later` is left untouched.
    fn merge_from(&mut self, later: Self) {
        for (name, value) in later.entries {
            match value {
                AttrValue::None => {
                    self.entries.remove(&name);
                }
                v => {
                    self.entries.insert(name, v);
                }
            }
        }
    }
}

impl FromIterator<(String, AttrValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value_render() {
        assert_eq!(AttrValue::Str("button".into()).render(), Some("button".into()));
        assert_eq!(AttrValue::Bool(true).render(), Some("true".into()));
        assert_eq!(AttrValue::Bool(false).render(), Some("false".into()));
        assert_eq!(AttrValue::Int(-1).render(), Some("-1".into()));
        assert_eq!(AttrValue::None.render(), None);
    }

    #[test]
    fn test_attributes_set_get() {
        let attrs = Attributes::new().with("role", "button").with("tabindex", 0);
        assert_eq!(attrs.get_rendered("role"), Some("button".into()));
        assert_eq!(attrs.get_rendered("tabindex"), Some("0".into()));
        assert_eq!(attrs.get("missing"), None);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = Attributes::new().with("role", "button");
        base.merge_from(Attributes::new().with("role", "tab"));
        assert_eq!(base.get_rendered("role"), Some("tab".into()));
    }

    #[test]
    fn test_merge_none_removes() {
        let mut base = Attributes::new().with("role", "button").with("tabindex", 0);
        base.merge_from(Attributes::new().with("role", AttrValue::None));
        assert_eq!(base.get("role"), None);
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_merge_absent_key_untouched() {
        let mut base = Attributes::new().with("role", "button");
        base.merge_from(Attributes::new().with("aria-disabled", true));
        assert_eq!(base.get_rendered("role"), Some("button".into()));
        assert_eq!(base.get_rendered("aria-disabled"), Some("true".into()));
    }

    #[test]
    fn test_rendered_skips_omitted() {
        let attrs = Attributes::new()
            .with("role", AttrValue::None)
            .with("aria-disabled", false);
        let rendered = attrs.rendered();
        assert!(!rendered.contains_key("role"));
        assert_eq!(rendered.get("aria-disabled").map(String::as_str), Some("false"));
    }

    #[test]
    fn test_tag_as_str() {
        assert_eq!(Tag::Button.as_str(), "button");
        assert_eq!(Tag::Anchor.as_str(), "a");
        assert_eq!(Tag::default().as_str(), "div");
    }
}
