//! Accordion, AccordionTitle and AccordionContent components.
//!
//! The open/closed bookkeeping lives in [`ActiveIndex`]: exclusive
//! accordions track at most one open panel, non-exclusive ones a set.
//! Pair it with [`AutoControlled`] to support both controlled and
//! uncontrolled usage.

use crate::behavior::{default_behavior, resolve_behavior, root_literals, BehaviorFn, PartLiterals};
use crate::controlled::AutoControlled;
use crate::error::ResolveError;
use crate::resolve::{assemble, ComponentRender};
use crate::style::{px_to_rem, StyleContext, StyleDef, StyleFn, StyleObject};
use crate::theme::{ComponentSlot, SiteVariables, Theme, VariablesFn};
use crate::types::{Attributes, PartName, ROOT};

pub const ACCORDION_NAME: &str = "Accordion";
pub const ACCORDION_TITLE_NAME: &str = "AccordionTitle";
pub const ACCORDION_CONTENT_NAME: &str = "AccordionContent";
pub const ACCORDION_PARTS: &[PartName] = &[ROOT];
pub const ACCORDION_TITLE_PARTS: &[PartName] = &[ROOT];
pub const ACCORDION_CONTENT_PARTS: &[PartName] = &[ROOT];

// =============================================================================
// Active index
// =============================================================================

/// Which panels are open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveIndex {
    /// At most one open panel.
    Exclusive(Option<usize>),
    /// Any number of open panels.
    Multiple(Vec<usize>),
}

impl ActiveIndex {
    /// The all-closed state for the given mode.
    pub fn closed(exclusive: bool) -> Self {
        if exclusive {
            Self::Exclusive(None)
        } else {
            Self::Multiple(Vec::new())
        }
    }

    /// Whether the panel at `index` is open.
    pub fn is_active(&self, index: usize) -> bool {
        match self {
            Self::Exclusive(active) => *active == Some(index),
            Self::Multiple(active) => active.contains(&index),
        }
    }

    /// The state after a click on the title at `index`. An open panel
    /// closes; a closed one opens, closing its sibling in exclusive
    /// mode.
    pub fn toggled(&self, index: usize) -> Self {
        match self {
            Self::Exclusive(active) => {
                if *active == Some(index) {
                    Self::Exclusive(None)
                } else {
                    Self::Exclusive(Some(index))
                }
            }
            Self::Multiple(active) => {
                let mut next = active.clone();
                match next.iter().position(|open| *open == index) {
                    Some(position) => {
                        next.remove(position);
                    }
                    None => next.push(index),
                }
                Self::Multiple(next)
            }
        }
    }
}

/// Applies a title click to a controlled-or-uncontrolled index holder.
/// Controlled holders ignore the toggle, same as every other write
/// through [`AutoControlled`].
pub fn toggle_index(state: &mut AutoControlled<ActiveIndex>, index: usize) -> bool {
    let next = state.get().toggled(index);
    state.try_set(next)
}

// =============================================================================
// Variables (shared by all three components)
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AccordionVariables {
    pub title_color: String,
    pub title_active_color: String,
    pub content_color: String,
    /// Title padding in pixels.
    pub title_padding: f64,
    /// Content padding in pixels.
    pub content_padding: f64,
}

impl AccordionVariables {
    pub fn from_site(site: &SiteVariables) -> Self {
        Self {
            title_color: site.body_color.clone(),
            title_active_color: site.black.clone(),
            content_color: site.body_color.clone(),
            title_padding: 4.0,
            content_padding: 4.0,
        }
    }
}

fn accordion_variables<P>(
    slot: &ComponentSlot<P, AccordionVariables>,
    instance: Option<VariablesFn<AccordionVariables>>,
    theme: &Theme,
) -> AccordionVariables {
    let mut variables = AccordionVariables::from_site(&theme.site);
    if let Some(theme_fn) = slot.variables {
        variables = theme_fn(&theme.site, variables);
    }
    if let Some(instance_fn) = instance {
        variables = instance_fn(&theme.site, variables);
    }
    variables
}

// =============================================================================
// Accordion
// =============================================================================

#[derive(Default)]
pub struct AccordionProps {
    /// Only allow one panel open at a time.
    pub exclusive: bool,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<AccordionProps>>,
    pub styles: Option<StyleDef<AccordionProps, AccordionVariables>>,
    pub variables: Option<VariablesFn<AccordionVariables>>,
    pub extra: Attributes,
}

impl AccordionProps {
    /// The uncontrolled starting state for this accordion's mode.
    pub fn initial_state(&self) -> AutoControlled<ActiveIndex> {
        AutoControlled::uncontrolled(ActiveIndex::closed(self.exclusive))
    }
}

fn accordion_root_styles(
    _ctx: &StyleContext<'_, AccordionProps, AccordionVariables>,
) -> StyleObject {
    StyleObject::new()
}

pub fn resolve_accordion(
    props: &AccordionProps,
    theme: &Theme,
) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.accordion;
    let behavior = resolve_behavior(
        default_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &literals(&props.extra, &props.role),
    );

    let variables = accordion_variables(slot, props.variables, theme);
    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        ACCORDION_NAME,
        ACCORDION_PARTS,
        behavior,
        &[(ROOT, accordion_root_styles as StyleFn<AccordionProps, AccordionVariables>)],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

// =============================================================================
// AccordionTitle
// =============================================================================

#[derive(Default)]
pub struct AccordionTitleProps {
    pub content: String,
    /// Whether the panel this title controls is open.
    pub active: bool,
    /// Position of the panel within the accordion.
    pub index: usize,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<AccordionTitleProps>>,
    pub styles: Option<StyleDef<AccordionTitleProps, AccordionVariables>>,
    pub variables: Option<VariablesFn<AccordionVariables>>,
    pub extra: Attributes,
}

fn title_root_styles(
    ctx: &StyleContext<'_, AccordionTitleProps, AccordionVariables>,
) -> StyleObject {
    let v = ctx.variables;
    let mut style = StyleObject::new()
        .with("cursor", "pointer")
        .with("padding", px_to_rem(v.title_padding))
        .with("color", v.title_color.as_str());

    if ctx.props.active {
        style.set("color", v.title_active_color.as_str());
        style.set("fontWeight", 700);
    }
    style
}

pub fn resolve_accordion_title(
    props: &AccordionTitleProps,
    theme: &Theme,
) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.accordion_title;
    let behavior = resolve_behavior(
        default_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &literals(&props.extra, &props.role),
    );

    let variables = accordion_variables(slot, props.variables, theme);
    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        ACCORDION_TITLE_NAME,
        ACCORDION_TITLE_PARTS,
        behavior,
        &[(ROOT, title_root_styles as StyleFn<AccordionTitleProps, AccordionVariables>)],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

// =============================================================================
// AccordionContent
// =============================================================================

#[derive(Default)]
pub struct AccordionContentProps {
    pub content: String,
    /// Whether this panel is open.
    pub active: bool,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<AccordionContentProps>>,
    pub styles: Option<StyleDef<AccordionContentProps, AccordionVariables>>,
    pub variables: Option<VariablesFn<AccordionVariables>>,
    pub extra: Attributes,
}

fn content_root_styles(
    ctx: &StyleContext<'_, AccordionContentProps, AccordionVariables>,
) -> StyleObject {
    let v = ctx.variables;
    let mut style = StyleObject::new()
        .with("color", v.content_color.as_str())
        .with("padding", px_to_rem(v.content_padding));

    if !ctx.props.active {
        style.set("display", "none");
    }
    style
}

pub fn resolve_accordion_content(
    props: &AccordionContentProps,
    theme: &Theme,
) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.accordion_content;
    let behavior = resolve_behavior(
        default_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &literals(&props.extra, &props.role),
    );

    let variables = accordion_variables(slot, props.variables, theme);
    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        ACCORDION_CONTENT_NAME,
        ACCORDION_CONTENT_PARTS,
        behavior,
        &[(ROOT, content_root_styles as StyleFn<AccordionContentProps, AccordionVariables>)],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

fn literals(extra: &Attributes, role: &Option<String>) -> PartLiterals {
    let mut root = extra.clone();
    if let Some(role) = role {
        root.set("role", role.as_str());
    }
    root_literals(root)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::presets;

    #[test]
    fn test_exclusive_toggle_swaps_and_closes() {
        let state = ActiveIndex::closed(true);
        assert!(!state.is_active(0));

        let opened = state.toggled(0);
        assert_eq!(opened, ActiveIndex::Exclusive(Some(0)));

        // Opening a sibling closes the first.
        let swapped = opened.toggled(2);
        assert!(swapped.is_active(2));
        assert!(!swapped.is_active(0));

        // Toggling the open panel closes everything.
        assert_eq!(swapped.toggled(2), ActiveIndex::Exclusive(None));
    }

    #[test]
    fn test_multiple_toggle_accumulates() {
        let state = ActiveIndex::closed(false).toggled(0).toggled(2);
        assert!(state.is_active(0));
        assert!(state.is_active(2));
        assert!(!state.is_active(1));

        let removed = state.toggled(0);
        assert!(!removed.is_active(0));
        assert!(removed.is_active(2));
    }

    #[test]
    fn test_toggle_index_respects_controlled_state() {
        let props = AccordionProps { exclusive: true, ..Default::default() };
        let mut state = props.initial_state();
        assert!(toggle_index(&mut state, 1));
        assert!(state.get().is_active(1));

        let mut controlled = AutoControlled::controlled(ActiveIndex::Exclusive(Some(0)));
        assert!(!toggle_index(&mut controlled, 1));
        assert!(controlled.get().is_active(0));
    }

    #[test]
    fn test_active_title_styles() {
        let theme = presets::light();

        let inactive =
            resolve_accordion_title(&AccordionTitleProps::default(), &theme).unwrap();
        assert_eq!(inactive.root().style.get("fontWeight"), None);

        let props = AccordionTitleProps { active: true, index: 1, ..Default::default() };
        let active = resolve_accordion_title(&props, &theme).unwrap();
        assert_eq!(
            active.root().style.get_str("color"),
            Some(theme.site.black.as_str())
        );
    }

    #[test]
    fn test_inactive_content_is_hidden() {
        let theme = presets::light();

        let hidden =
            resolve_accordion_content(&AccordionContentProps::default(), &theme).unwrap();
        assert_eq!(hidden.root().style.get_str("display"), Some("none"));

        let props = AccordionContentProps { active: true, ..Default::default() };
        let shown = resolve_accordion_content(&props, &theme).unwrap();
        assert_eq!(shown.root().style.get("display"), None);
    }
}
