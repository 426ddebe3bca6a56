//! List and ListItem components.
//!
//! The list itself is mostly markup; the item carries the interesting
//! accessibility: a roving tabindex driven by `is_focused` and a
//! `moveNext` key action the focus collaborator binds to ArrowDown /
//! ArrowRight.

use crate::behavior::{
    list_behavior, list_item_behavior, resolve_behavior, root_literals, BehaviorFn,
    FocusableItem, PartLiterals,
};
use crate::error::ResolveError;
use crate::resolve::{assemble, ComponentRender};
use crate::style::{px_to_rem, StyleContext, StyleDef, StyleFn, StyleObject};
use crate::theme::{SiteVariables, Theme, VariablesFn};
use crate::types::{Attributes, PartName, ROOT};

pub const LIST_NAME: &str = "List";
pub const LIST_ITEM_NAME: &str = "ListItem";
pub const LIST_PARTS: &[PartName] = &[ROOT];
pub const LIST_ITEM_PARTS: &[PartName] = &[ROOT];

// =============================================================================
// Variables (shared by List and ListItem)
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ListVariables {
    pub color: String,
    pub selected_background: String,
    pub focus_border_color: String,
    /// Vertical item padding in pixels.
    pub item_padding: f64,
}

impl ListVariables {
    pub fn from_site(site: &SiteVariables) -> Self {
        Self {
            color: site.body_color.clone(),
            selected_background: site.gray10.clone(),
            focus_border_color: site.brand.clone(),
            item_padding: 8.0,
        }
    }
}

// =============================================================================
// List
// =============================================================================

#[derive(Default)]
pub struct ListProps {
    /// Whether items render selection state.
    pub selectable: bool,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<ListProps>>,
    pub styles: Option<StyleDef<ListProps, ListVariables>>,
    pub variables: Option<VariablesFn<ListVariables>>,
    pub extra: Attributes,
}

fn list_root_styles(_ctx: &StyleContext<'_, ListProps, ListVariables>) -> StyleObject {
    StyleObject::new()
        .with("display", "block")
        .with("listStyle", "none")
        .with("margin", "0")
        .with("padding", "0")
}

pub fn resolve_list(props: &ListProps, theme: &Theme) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.list;
    let behavior = resolve_behavior(
        list_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &list_literals(props),
    );

    let mut variables = ListVariables::from_site(&theme.site);
    if let Some(theme_fn) = slot.variables {
        variables = theme_fn(&theme.site, variables);
    }
    if let Some(instance_fn) = props.variables {
        variables = instance_fn(&theme.site, variables);
    }

    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        LIST_NAME,
        LIST_PARTS,
        behavior,
        &[(ROOT, list_root_styles as StyleFn<ListProps, ListVariables>)],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

fn list_literals(props: &ListProps) -> PartLiterals {
    let mut root = props.extra.clone();
    if let Some(role) = &props.role {
        root.set("role", role.as_str());
    }
    root_literals(root)
}

// =============================================================================
// ListItem
// =============================================================================

#[derive(Default)]
pub struct ListItemProps {
    pub content: String,
    /// Whether this item currently holds the roving focus.
    pub is_focused: bool,
    pub selected: bool,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<ListItemProps>>,
    pub styles: Option<StyleDef<ListItemProps, ListVariables>>,
    pub variables: Option<VariablesFn<ListVariables>>,
    pub extra: Attributes,
}

impl FocusableItem for ListItemProps {
    fn is_focused(&self) -> bool {
        self.is_focused
    }
}

fn list_item_root_styles(ctx: &StyleContext<'_, ListItemProps, ListVariables>) -> StyleObject {
    let v = ctx.variables;
    let mut style = StyleObject::new()
        .with("position", "relative")
        .with("color", v.color.as_str())
        .with("padding", format!("{} 0", px_to_rem(v.item_padding)))
        .with("cursor", "pointer");

    if ctx.props.selected {
        style.set("backgroundColor", v.selected_background.as_str());
    }
    if ctx.props.is_focused {
        style.set("outline", format!("2px solid {}", v.focus_border_color));
    }

    style
}

pub fn resolve_list_item(
    props: &ListItemProps,
    theme: &Theme,
) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.list_item;
    let behavior = resolve_behavior(
        list_item_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &list_item_literals(props),
    );

    let mut variables = ListVariables::from_site(&theme.site);
    if let Some(theme_fn) = slot.variables {
        variables = theme_fn(&theme.site, variables);
    }
    if let Some(instance_fn) = props.variables {
        variables = instance_fn(&theme.site, variables);
    }

    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        LIST_ITEM_NAME,
        LIST_ITEM_PARTS,
        behavior,
        &[(ROOT, list_item_root_styles as StyleFn<ListItemProps, ListVariables>)],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

fn list_item_literals(props: &ListItemProps) -> PartLiterals {
    let mut root = props.extra.clone();
    if let Some(role) = &props.role {
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
    use crate::behavior::{Action, Key, Modifiers};
    use crate::theme::presets;

    #[test]
    fn test_list_root_role() {
        let theme = presets::light();
        let rendered = resolve_list(&ListProps::default(), &theme).unwrap();
        assert_eq!(
            rendered.root().attributes.get_rendered("role"),
            Some("list".into())
        );
    }

    #[test]
    fn test_item_tabindex_follows_focus() {
        let theme = presets::light();

        let focused = ListItemProps { is_focused: true, ..Default::default() };
        let rendered = resolve_list_item(&focused, &theme).unwrap();
        assert_eq!(
            rendered.root().attributes.get_rendered("tabindex"),
            Some("0".into())
        );

        let blurred = ListItemProps { is_focused: false, ..Default::default() };
        let rendered = resolve_list_item(&blurred, &theme).unwrap();
        assert_eq!(
            rendered.root().attributes.get_rendered("tabindex"),
            Some("-1".into())
        );
    }

    #[test]
    fn test_item_move_next_key_action() {
        let theme = presets::light();
        let rendered = resolve_list_item(&ListItemProps::default(), &theme).unwrap();
        let move_next = rendered.root().key_actions.get(&Action::MoveNext).unwrap();
        assert!(move_next.matches(Key::ArrowDown, Modifiers::empty()));
        assert!(move_next.matches(Key::ArrowRight, Modifiers::empty()));
    }

    #[test]
    fn test_selected_item_background() {
        let theme = presets::light();
        let props = ListItemProps { selected: true, ..Default::default() };
        let rendered = resolve_list_item(&props, &theme).unwrap();
        assert_eq!(
            rendered.root().style.get_str("backgroundColor"),
            Some(theme.site.gray10.as_str())
        );
    }

    #[test]
    fn test_item_focus_outline_uses_variable() {
        let theme = presets::light();
        let props = ListItemProps { is_focused: true, ..Default::default() };
        let rendered = resolve_list_item(&props, &theme).unwrap();
        let expected = format!("2px solid {}", theme.site.brand);
        assert_eq!(rendered.root().style.get_str("outline"), Some(expected.as_str()));
    }
}
