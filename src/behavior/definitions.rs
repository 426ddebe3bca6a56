//! Built-in behavior definitions.
//!
//! Each definition is a plain generic function over a small prop-view
//! trait, so a behavior can serve any component whose props expose the
//! inputs it reads. `MenuItem` uses this to swap between
//! [`menu_item_behavior`], [`toolbar_button_behavior`] and
//! [`tab_behavior`] without touching its markup.

use crate::types::{AttrValue, Attributes, Tag, ROOT};

use super::keys::{Action, Key, KeyAction};
use super::Behavior;

/// Part name used by item components that render `li > a`.
pub const ANCHOR: &str = "anchor";

// =============================================================================
// Prop views
// =============================================================================

/// Props that can drive [`button_behavior`].
pub trait ButtonLike {
    /// The element the component renders as.
    fn tag(&self) -> Tag;
    /// Whether the control is disabled.
    fn disabled(&self) -> bool;
}

/// Props that can drive [`list_item_behavior`] - items participating in
/// roving-tabindex focus.
pub trait FocusableItem {
    fn is_focused(&self) -> bool;
}

/// Props carrying caller-supplied ARIA labels that belong on a nested
/// anchor part rather than on the root.
pub trait AnchorLabeled {
    fn aria_label(&self) -> Option<&str>;
    fn aria_labelledby(&self) -> Option<&str>;
}

/// Props that can drive [`menu_behavior`].
pub trait MenuLike {
    fn vertical(&self) -> bool;
}

// =============================================================================
// Definitions
// =============================================================================

/// The empty behavior: no attributes, no key actions.
pub fn default_behavior<P>(_props: &P) -> Behavior {
    Behavior::new()
}

/// Adds `role="button"` when the element type is not natively a button,
/// so screen readers handle the component as one. Mirrors the `disabled`
/// prop into `aria-disabled`.
pub fn button_behavior<P: ButtonLike>(props: &P) -> Behavior {
    let native = props.tag() == Tag::Button;

    let mut root = Attributes::new();
    root.set("role", if native { AttrValue::None } else { "button".into() });
    root.set("aria-disabled", props.disabled());

    let mut behavior = Behavior::new().with_attributes(ROOT, root);
    if !native {
        // Native buttons activate on their own; role="button" needs help.
        behavior = behavior.with_key_action(
            ROOT,
            Action::Activate,
            KeyAction::keys([Key::Enter, Key::Space]),
        );
    }
    behavior
}

/// Adds `role="list"`.
pub fn list_behavior<P>(_props: &P) -> Behavior {
    Behavior::new().with_attributes(ROOT, Attributes::new().with("role", "list"))
}

/// Adds `role="listitem"` and a roving tabindex: `0` for the focused
/// item, `-1` otherwise. `moveNext` fires on ArrowDown or ArrowRight.
pub fn list_item_behavior<P: FocusableItem>(props: &P) -> Behavior {
    let tabindex = if props.is_focused() { 0 } else { -1 };

    Behavior::new()
        .with_attributes(
            ROOT,
            Attributes::new()
                .with("role", "listitem")
                .with("tabindex", tabindex),
        )
        .with_key_action(
            ROOT,
            Action::MoveNext,
            KeyAction::keys([Key::ArrowDown, Key::ArrowRight]),
        )
}

/// Adds `role="menu"` plus `aria-orientation` for vertical menus, and
/// lets Escape dismiss an open menu.
pub fn menu_behavior<P: MenuLike>(props: &P) -> Behavior {
    let mut root = Attributes::new().with("role", "menu");
    if props.vertical() {
        root.set("aria-orientation", "vertical");
    }

    Behavior::new()
        .with_attributes(ROOT, root)
        .with_key_action(ROOT, Action::Dismiss, KeyAction::keys([Key::Escape]))
}

/// The `li > a` item shape: the root is presentational, the anchor is
/// the `menuitem`. Caller labels route to the anchor, not the root.
pub fn menu_item_behavior<P: AnchorLabeled>(props: &P) -> Behavior {
    let mut anchor = Attributes::new().with("role", "menuitem");
    apply_anchor_labels(&mut anchor, props);

    Behavior::new()
        .with_attributes(ROOT, Attributes::new().with("role", "presentation"))
        .with_attributes(ANCHOR, anchor)
        .with_key_action(
            ANCHOR,
            Action::Activate,
            KeyAction::keys([Key::Enter, Key::Space]),
        )
        .with_key_action(ANCHOR, Action::MoveNext, KeyAction::keys([Key::ArrowRight]))
        .with_key_action(ANCHOR, Action::MovePrevious, KeyAction::keys([Key::ArrowLeft]))
        .with_key_action(ANCHOR, Action::MoveFirst, KeyAction::keys([Key::Home]))
        .with_key_action(ANCHOR, Action::MoveLast, KeyAction::keys([Key::End]))
}

/// Alternate item behavior: the anchor acts as a toolbar button.
pub fn toolbar_button_behavior<P: AnchorLabeled + ButtonLike>(props: &P) -> Behavior {
    let mut anchor = Attributes::new()
        .with("role", "button")
        .with("aria-disabled", props.disabled());
    apply_anchor_labels(&mut anchor, props);

    Behavior::new()
        .with_attributes(ROOT, Attributes::new().with("role", "presentation"))
        .with_attributes(ANCHOR, anchor)
        .with_key_action(
            ANCHOR,
            Action::Activate,
            KeyAction::keys([Key::Enter, Key::Space]),
        )
}

/// Alternate item behavior: the anchor acts as a tab.
pub fn tab_behavior<P: AnchorLabeled>(props: &P) -> Behavior {
    let mut anchor = Attributes::new().with("role", "tab");
    apply_anchor_labels(&mut anchor, props);

    Behavior::new()
        .with_attributes(ROOT, Attributes::new().with("role", "presentation"))
        .with_attributes(ANCHOR, anchor)
        .with_key_action(ANCHOR, Action::Activate, KeyAction::keys([Key::Enter, Key::Space]))
        .with_key_action(ANCHOR, Action::MoveNext, KeyAction::keys([Key::ArrowRight]))
        .with_key_action(ANCHOR, Action::MovePrevious, KeyAction::keys([Key::ArrowLeft]))
}

fn apply_anchor_labels<P: AnchorLabeled>(anchor: &mut Attributes, props: &P) {
    if let Some(label) = props.aria_label() {
        anchor.set("aria-label", label);
    }
    if let Some(labelledby) = props.aria_labelledby() {
        anchor.set("aria-labelledby", labelledby);
    }
}

// =============================================================================
// Tests
// =============================================================================
