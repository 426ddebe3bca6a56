//! Resolution errors.
//!
//! Everything here is an authoring mistake, not a user-facing condition:
//! a part name that the component never declared, or a preset that does
//! not exist. Resolution fails fast instead of degrading to a default.

use thiserror::Error;

/// Errors raised while resolving a component's behavior or styles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A style or behavior override targeted a part the component
    /// never registered.
    #[error("part `{part}` is not registered for component `{component}`")]
    UnknownPart {
        /// Component type name (e.g. "Avatar").
        component: &'static str,
        /// The offending part name.
        part: String,
    },

    /// A theme preset name that no built-in preset answers to.
    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),
}
