//! Theme system.
//!
//! A theme is pure input to resolution: a set of site-wide variables
//! plus, per component type, optional overrides for variables, styles
//! and behavior. Swapping themes never touches component logic - every
//! per-theme difference routes through these tables.
//!
//! The tables are explicit: [`ComponentSlots`] is a plain struct with
//! one [`ComponentSlot`] field per component type, built at startup and
//! passed by reference. There is no global registry and nothing mutates
//! after construction.

use std::collections::BTreeMap;

use crate::behavior::BehaviorFn;
use crate::components::accordion::{
    AccordionContentProps, AccordionProps, AccordionTitleProps, AccordionVariables,
};
use crate::components::avatar::{AvatarProps, AvatarVariables};
use crate::components::button::{ButtonProps, ButtonVariables};
use crate::components::chat::{ChatMessageProps, ChatProps, ChatVariables};
use crate::components::grid::{GridProps, GridVariables};
use crate::components::list::{ListItemProps, ListProps, ListVariables};
use crate::components::menu::{MenuItemProps, MenuProps, MenuVariables};
use crate::components::text::{TextProps, TextVariables};
use crate::style::StyleDef;
use crate::types::PartName;

pub mod presets;

pub use presets::{get_preset, require_preset};

// =============================================================================
// Site variables
// =============================================================================

/// Site-wide design tokens every component variable resolver starts from.
///
/// Colors are CSS color strings; font sizes are pixel values that
/// resolvers normalize through
/// [`px_to_rem`](crate::style::px_to_rem).
#[derive(Debug, Clone, PartialEq)]
pub struct SiteVariables {
    // Palette
    pub brand: String,
    pub black: String,
    pub white: String,
    pub gray02: String,
    pub gray03: String,
    pub gray04: String,
    pub gray06: String,
    pub gray08: String,
    pub gray09: String,
    pub gray10: String,
    pub red: String,
    pub orange04: String,
    pub green04: String,

    // Body
    pub body_background: String,
    pub body_color: String,
    pub body_font_family: String,

    // Type scale, in pixels
    pub font_size_smaller: f64,
    pub font_size_small: f64,
    pub font_size_medium: f64,
    pub font_size_large: f64,
    pub font_size_larger: f64,

    /// Pixels per rem for this document.
    pub rem_size: f64,
}

impl Default for SiteVariables {
    fn default() -> Self {
        Self {
            brand: "#6264a7".into(),
            black: "#252424".into(),
            white: "#ffffff".into(),
            gray02: "#484644".into(),
            gray03: "#605e5c".into(),
            gray04: "#979593".into(),
            gray06: "#c8c6c4".into(),
            gray08: "#e1dfdd".into(),
            gray09: "#edebe9".into(),
            gray10: "#f3f2f1".into(),
            red: "#c4314b".into(),
            orange04: "#cc4a31".into(),
            green04: "#92c353".into(),
            body_background: "#ffffff".into(),
            body_color: "#252424".into(),
            body_font_family: "Segoe UI, system-ui, sans-serif".into(),
            font_size_smaller: 10.0,
            font_size_small: 12.0,
            font_size_medium: 14.0,
            font_size_large: 18.0,
            font_size_larger: 24.0,
            rem_size: 16.0,
        }
    }
}

// =============================================================================
// Component slots
// =============================================================================

/// A theme-level variable override: receives the site variables and the
/// component's default-resolved variables, returns the effective ones.
pub type VariablesFn<V> = fn(&SiteVariables, V) -> V;

/// Per-component-type theme overrides.
pub struct ComponentSlot<P, V> {
    /// Adjust the component's resolved variables.
    pub variables: Option<VariablesFn<V>>,
    /// Per-part style overrides, merged over the component defaults.
    pub styles: BTreeMap<PartName, StyleDef<P, V>>,
    /// Replace the component's default behavior.
    pub behavior: Option<BehaviorFn<P>>,
}

impl<P, V> ComponentSlot<P, V> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P, V> Default for ComponentSlot<P, V> {
    fn default() -> Self {
        Self {
            variables: None,
            styles: BTreeMap::new(),
            behavior: None,
        }
    }
}

impl<P, V> Clone for ComponentSlot<P, V> {
    fn clone(&self) -> Self {
        Self {
            variables: self.variables,
            styles: self.styles.clone(),
            behavior: self.behavior,
        }
    }
}

/// One slot per component type. Families that share a variable contract
/// (menu and menu item, chat and chat message) share its type, not its
/// slot.
#[derive(Clone, Default)]
pub struct ComponentSlots {
    pub button: ComponentSlot<ButtonProps, ButtonVariables>,
    pub list: ComponentSlot<ListProps, ListVariables>,
    pub list_item: ComponentSlot<ListItemProps, ListVariables>,
    pub accordion: ComponentSlot<AccordionProps, AccordionVariables>,
    pub accordion_title: ComponentSlot<AccordionTitleProps, AccordionVariables>,
    pub accordion_content: ComponentSlot<AccordionContentProps, AccordionVariables>,
    pub menu: ComponentSlot<MenuProps, MenuVariables>,
    pub menu_item: ComponentSlot<MenuItemProps, MenuVariables>,
    pub avatar: ComponentSlot<AvatarProps, AvatarVariables>,
    pub text: ComponentSlot<TextProps, TextVariables>,
    pub grid: ComponentSlot<GridProps, GridVariables>,
    pub chat: ComponentSlot<ChatProps, ChatVariables>,
    pub chat_message: ComponentSlot<ChatMessageProps, ChatVariables>,
}

// =============================================================================
// Theme
// =============================================================================

/// The active theme: site variables plus component override slots.
#[derive(Clone)]
pub struct Theme {
    pub name: String,
    pub site: SiteVariables,
    pub components: ComponentSlots,
}

impl Theme {
    /// A theme with the given site variables and no component overrides.
    pub fn from_site(name: impl Into<String>, site: SiteVariables) -> Self {
        Self {
            name: name.into(),
            site,
            components: ComponentSlots::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        presets::light()
    }
}

// =============================================================================
// Tests
// =============================================================================
