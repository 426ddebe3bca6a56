//! Component contract layer.
//!
//! Every component's `resolve` entry point funnels through
//! [`assemble`]: behavior output and per-part style chains become one
//! [`ComponentRender`] the host renderer applies to its output nodes.
//! This is the only place part names are validated - an override keyed
//! by a part the component never declared is an authoring error and
//! fails resolution outright.

use std::collections::BTreeMap;

use crate::behavior::{Behavior, KeyActions};
use crate::error::ResolveError;
use crate::style::{resolve_styles, StyleContext, StyleDef, StyleFn, StyleObject};
use crate::theme::ComponentSlot;
use crate::types::{Attributes, PartName, ROOT};

// =============================================================================
// Resolved output
// =============================================================================

/// Everything resolved for one part: DOM attributes, effective style,
/// key-action bindings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedPart {
    pub attributes: Attributes,
    pub style: StyleObject,
    pub key_actions: KeyActions,
}

/// The resolved render for a whole component, keyed by part.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRender {
    component: &'static str,
    parts: BTreeMap<PartName, ResolvedPart>,
}

impl ComponentRender {
    /// The component type name.
    pub fn component(&self) -> &'static str {
        self.component
    }

    /// The resolved root part.
    ///
    /// # Panics
    ///
    /// If the component's `PARTS` list omits `"root"`. Every component
    /// declares a root part; violating that is an authoring error in the
    /// component module itself, not something a caller can cause.
    pub fn root(&self) -> &ResolvedPart {
        self.parts
            .get(ROOT)
            .expect("component must declare a root part")
    }

    /// A resolved part by name; unknown names are an authoring error.
    pub fn part(&self, name: &str) -> Result<&ResolvedPart, ResolveError> {
        self.parts.get(name).ok_or_else(|| ResolveError::UnknownPart {
            component: self.component,
            part: name.to_string(),
        })
    }

    pub fn parts(&self) -> impl Iterator<Item = (PartName, &ResolvedPart)> {
        self.parts.iter().map(|(name, part)| (*name, part))
    }
}

// =============================================================================
// Assembly
// =============================================================================

fn empty_style<P, V>(_ctx: &StyleContext<'_, P, V>) -> StyleObject {
    StyleObject::new()
}

/// Assemble a component render from its resolved behavior and style
/// definitions.
///
/// `defaults` maps parts to the component's built-in style functions;
/// `slot` carries the theme's overrides; `caller_style` is the
/// instance-level override and applies to the root part. Chain order per
/// part: default, theme, caller.
pub(crate) fn assemble<P, V>(
    component: &'static str,
    parts: &'static [PartName],
    behavior: Behavior,
    defaults: &[(PartName, StyleFn<P, V>)],
    slot: &ComponentSlot<P, V>,
    caller_style: Option<&StyleDef<P, V>>,
    ctx: &StyleContext<'_, P, V>,
) -> Result<ComponentRender, ResolveError> {
    let unknown = |part: &str| ResolveError::UnknownPart {
        component,
        part: part.to_string(),
    };

    for key in slot.styles.keys() {
        if !parts.contains(key) {
            return Err(unknown(key));
        }
    }
    for key in behavior.attributes.keys().chain(behavior.key_actions.keys()) {
        if !parts.contains(key) {
            return Err(unknown(key));
        }
    }

    let Behavior {
        mut attributes,
        mut key_actions,
    } = behavior;

    let mut resolved = BTreeMap::new();
    for &part in parts {
        let default = defaults
            .iter()
            .find(|(name, _)| *name == part)
            .map(|(_, style_fn)| *style_fn)
            .unwrap_or(empty_style::<P, V>);

        let mut chain: Vec<StyleDef<P, V>> = Vec::new();
        if let Some(theme_def) = slot.styles.get(part) {
            chain.push(theme_def.clone());
        }
        if part == ROOT {
            if let Some(caller_def) = caller_style {
                chain.push(caller_def.clone());
            }
        }

        resolved.insert(
            part,
            ResolvedPart {
                attributes: attributes.remove(part).unwrap_or_default(),
                style: resolve_styles(default, &chain, ctx),
                key_actions: key_actions.remove(part).unwrap_or_default(),
            },
        );
    }

    Ok(ComponentRender {
        component,
        parts: resolved,
    })
}

// =============================================================================
// Tests
// =============================================================================
