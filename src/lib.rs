//! # weft-ui
//!
//! Themeable, accessibility-first UI component contracts.
//!
//! Components here are not widgets but pure resolvers: each one maps
//! `(props, theme)` to a [`ComponentRender`](resolve::ComponentRender) -
//! per-part ARIA attributes, key actions and a merged style object -
//! with no hidden state and no side effects. A host renderer (DOM,
//! terminal, anything that can apply attributes and styles) consumes
//! the result.
//!
//! ## Architecture
//!
//! Everything resolves through override chains: a list of values or
//! functions evaluated against one shared context, then merged
//! left-to-right so later entries win.
//!
//! ```text
//! component default → theme slot → caller prop
//! ```
//!
//! Behaviors are the exception: an override behavior replaces the
//! default outright instead of merging, so a component never ships a
//! blend of two accessibility contracts. Explicit attribute literals
//! from the caller still win over whichever behavior ran.
//!
//! ## Modules
//!
//! - [`types`] - attributes, tags, part names
//! - [`merge`] - the [`Merge`](merge::Merge) trait and override chains
//! - [`behavior`] - accessibility behaviors and key action tables
//! - [`style`] - style objects, style chains, unit helpers
//! - [`theme`] - site variables, component slots, presets
//! - [`components`] - per-component props, variables and resolvers

pub mod behavior;
pub mod components;
pub mod controlled;
pub mod error;
pub mod merge;
pub mod resolve;
pub mod style;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use behavior::{Action, Behavior, BehaviorFn, Key, KeyAction, KeyActions, Modifiers};
pub use controlled::AutoControlled;
pub use error::ResolveError;
pub use merge::{merge_all, resolve_chain, Def, Merge};
pub use resolve::{ComponentRender, ResolvedPart};
pub use style::{px_to_rem, px_to_rem_base, StyleContext, StyleDef, StyleFn, StyleObject, StyleValue};
pub use theme::{
    get_preset, require_preset, ComponentSlot, ComponentSlots, SiteVariables, Theme, VariablesFn,
};
pub use types::{AttrValue, Attributes, PartName, Tag, ROOT};
