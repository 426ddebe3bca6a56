//! Key actions - logical input actions bound to key combinations.
//!
//! Behaviors declare *what* an interaction means ("moveNext fires on
//! ArrowDown or ArrowRight") without hardcoding focus management. The
//! focus-management collaborator consumes the closed [`Action`]
//! vocabulary and performs the actual traversal; [`KeyAction::matches`]
//! is the lookup it uses when a DOM key event arrives.

use bitflags::bitflags;
use std::collections::BTreeMap;

bitflags! {
    /// Modifier keys held during a combination.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Modifiers: u8 {
        const CTRL  = 1 << 0;
        const ALT   = 1 << 1;
        const SHIFT = 1 << 2;
        const META  = 1 << 3;
    }
}

/// A physical key, named after the DOM `KeyboardEvent.key` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Escape,
    Home,
    End,
    Tab,
    Char(char),
}

/// A key plus the modifiers that must accompany it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombination {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombination {
    /// A combination with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self { key, modifiers: Modifiers::empty() }
    }
}

impl From<Key> for KeyCombination {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

/// The closed vocabulary of logical actions.
///
/// This is the integration surface with the focus-management
/// collaborator; it stays stable across components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Activate,
    Dismiss,
    MoveFirst,
    MoveLast,
    MoveNext,
    MovePrevious,
}

/// A logical action bound to one or more key combinations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyAction {
    pub combinations: Vec<KeyCombination>,
}

impl KeyAction {
    /// Bind an action to plain (unmodified) keys.
    pub fn keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            combinations: keys.into_iter().map(KeyCombination::plain).collect(),
        }
    }

    /// Whether a key event satisfies any bound combination.
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        self.combinations
            .iter()
            .any(|combo| combo.key == key && combo.modifiers == modifiers)
    }
}

/// Actions for one part, keyed by logical action name.
pub type KeyActions = BTreeMap<Action, KeyAction>;

// =============================================================================
// Tests
// =============================================================================
