//! Accessibility behavior resolution.
//!
//! A behavior is a pure function from a component's props to a
//! declarative set of DOM attributes per part, plus optional key-action
//! bindings. Components ship a default behavior; callers may supply an
//! override through the `accessibility` prop, and the override *fully
//! replaces* the default - the two are never merged. Explicit literal
//! attributes (an explicit `role` prop, pass-through attributes) win
//! over both, per attribute.
//!
//! Behaviors never mutate props and are safe to call any number of
//! times per render pass. A panicking override propagates to the
//! rendering layer; there is no silent fallback to the default.

use std::collections::BTreeMap;

use crate::merge::Merge;
use crate::types::{Attributes, PartName};

pub mod definitions;
pub mod keys;

pub use definitions::{
    button_behavior, default_behavior, list_behavior, list_item_behavior, menu_behavior,
    menu_item_behavior, tab_behavior, toolbar_button_behavior, AnchorLabeled, ButtonLike,
    FocusableItem, MenuLike, ANCHOR,
};
pub use keys::{Action, Key, KeyAction, KeyActions, KeyCombination, Modifiers};

// =============================================================================
// Behavior output
// =============================================================================

/// What a behavior computes: attributes and key actions, both per part.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Behavior {
    pub attributes: BTreeMap<PartName, Attributes>,
    pub key_actions: BTreeMap<PartName, KeyActions>,
}

impl Behavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute set for one part.
    pub fn with_attributes(mut self, part: PartName, attrs: Attributes) -> Self {
        self.attributes.insert(part, attrs);
        self
    }

    /// Builder-style key action binding for one part.
    pub fn with_key_action(mut self, part: PartName, action: Action, binding: KeyAction) -> Self {
        self.key_actions.entry(part).or_default().insert(action, binding);
        self
    }

    /// Attributes computed for a part, if any.
    pub fn attrs(&self, part: PartName) -> Option<&Attributes> {
        self.attributes.get(part)
    }
}

/// A behavior definition: pure function from props to [`Behavior`].
///
/// Plain `fn` pointers keep definitions trivially copyable and rule out
/// captured state.
pub type BehaviorFn<P> = fn(&P) -> Behavior;

/// Literal attributes supplied directly by the caller, per part.
pub type PartLiterals = BTreeMap<PartName, Attributes>;

// =============================================================================
// Resolution
// =============================================================================

/// Resolve the effective behavior for one render pass.
///
/// Precedence, lowest to highest: default behavior, override behavior
/// (replaces the default outright when present), literal attributes.
/// Literals merge per attribute, so a literal `role` beats whatever the
/// chosen behavior computed for `role` while leaving its other
/// attributes intact. A literal [`AttrValue::None`](crate::types::AttrValue)
/// removes the attribute from the output.
pub fn resolve_behavior<P>(
    default: BehaviorFn<P>,
    override_behavior: Option<BehaviorFn<P>>,
    props: &P,
    literals: &PartLiterals,
) -> Behavior {
    let mut behavior = match override_behavior {
        Some(behavior_fn) => behavior_fn(props),
        None => default(props),
    };

    for (part, attrs) in literals {
        if attrs.is_empty() {
            continue;
        }
        behavior
            .attributes
            .entry(*part)
            .or_default()
            .merge_from(attrs.clone());
    }

    behavior
}

/// Convenience for the common case: literals that target only the root part.
pub fn root_literals(attrs: Attributes) -> PartLiterals {
    let mut literals = PartLiterals::new();
    literals.insert(crate::types::ROOT, attrs);
    literals
}

// =============================================================================
// Tests
// =============================================================================
