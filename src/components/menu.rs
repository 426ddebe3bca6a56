//! Menu and MenuItem components.
//!
//! A menu item renders `li > a`: the root `li` is presentational and
//! the anchor carries `role="menuitem"` plus any caller labels. The
//! item styles are where nested blocks earn their keep - the separator
//! is a `::before` block, the pointing beak a `::after` block, and the
//! underlined treatment lives inside `:hover`.

use crate::behavior::{
    menu_behavior, menu_item_behavior, resolve_behavior, root_literals, AnchorLabeled,
    BehaviorFn, ButtonLike, MenuLike, PartLiterals, ANCHOR,
};
use crate::error::ResolveError;
use crate::merge::Merge;
use crate::resolve::{assemble, ComponentRender};
use crate::style::{px_to_rem, StyleContext, StyleDef, StyleFn, StyleObject};
use crate::theme::{SiteVariables, Theme, VariablesFn};
use crate::types::{Attributes, PartName, Tag, ROOT};

pub const MENU_NAME: &str = "Menu";
pub const MENU_ITEM_NAME: &str = "MenuItem";
pub const MENU_PARTS: &[PartName] = &[ROOT];
pub const MENU_ITEM_PARTS: &[PartName] = &[ROOT, ANCHOR];

// =============================================================================
// Prop enums
// =============================================================================

/// Visual kind of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuKind {
    #[default]
    Default,
    Primary,
}

/// Which edge the active item's beak points from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointing {
    Start,
    End,
}

// =============================================================================
// Variables (shared by Menu and MenuItem)
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MenuVariables {
    pub default_color: String,
    pub default_background_color: String,
    pub default_active_color: String,
    pub default_active_background_color: String,
    pub default_border_color: String,
    pub type_primary_active_color: String,
    pub type_primary_active_background_color: String,
    pub type_primary_active_border_color: String,
    pub type_primary_border_color: String,
    /// Square size of icon-only items, in pixels.
    pub icons_menu_item_size: f64,
}

impl MenuVariables {
    pub fn from_site(site: &SiteVariables) -> Self {
        Self {
            default_color: site.gray02.clone(),
            default_background_color: site.body_background.clone(),
            default_active_color: site.black.clone(),
            default_active_background_color: site.gray10.clone(),
            default_border_color: site.gray08.clone(),
            type_primary_active_color: site.white.clone(),
            type_primary_active_background_color: site.brand.clone(),
            type_primary_active_border_color: site.brand.clone(),
            type_primary_border_color: site.brand.clone(),
            icons_menu_item_size: 32.0,
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

#[derive(Default)]
pub struct MenuProps {
    pub vertical: bool,
    pub underlined: bool,
    pub icon_only: bool,
    pub pills: bool,
    pub pointing: Option<Pointing>,
    pub kind: MenuKind,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<MenuProps>>,
    pub styles: Option<StyleDef<MenuProps, MenuVariables>>,
    pub variables: Option<VariablesFn<MenuVariables>>,
    pub extra: Attributes,
}

impl MenuLike for MenuProps {
    fn vertical(&self) -> bool {
        self.vertical
    }
}

fn menu_root_styles(ctx: &StyleContext<'_, MenuProps, MenuVariables>) -> StyleObject {
    let p = ctx.props;
    let v = ctx.variables;

    let mut style = StyleObject::new()
        .with("display", "flex")
        .with("listStyle", "none")
        .with("margin", "0")
        .with("padding", "0")
        .with("color", v.default_color.as_str())
        .with("backgroundColor", v.default_background_color.as_str());

    if p.vertical {
        style.set("flexDirection", "column");
    }
    if !p.underlined && !p.pills {
        style.set("border", format!("1px solid {}", border_color(p.kind, v)));
        style.set("borderRadius", px_to_rem(4.0));
    }
    if p.underlined {
        style.set("borderBottom", format!("2px solid {}", v.default_border_color));
    }

    style
}

pub fn resolve_menu(props: &MenuProps, theme: &Theme) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.menu;
    let behavior = resolve_behavior(
        menu_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &menu_literals(props),
    );

    let variables = menu_variables(&theme.components.menu, props.variables, theme);
    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        MENU_NAME,
        MENU_PARTS,
        behavior,
        &[(ROOT, menu_root_styles as StyleFn<MenuProps, MenuVariables>)],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

fn menu_literals(props: &MenuProps) -> PartLiterals {
    let mut root = props.extra.clone();
    if let Some(role) = &props.role {
        root.set("role", role.as_str());
    }
    root_literals(root)
}

// =============================================================================
// MenuItem
// =============================================================================

pub struct MenuItemProps {
    pub content: String,
    pub active: bool,
    pub disabled: bool,
    /// Whether focus arrived via keyboard (suppresses hover-only looks).
    pub is_from_keyboard: bool,

    // Layout flags inherited from the owning menu.
    pub vertical: bool,
    pub underlined: bool,
    pub icon_only: bool,
    pub pills: bool,
    pub pointing: Option<Pointing>,
    pub kind: MenuKind,

    pub aria_label: Option<String>,
    pub aria_labelledby: Option<String>,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<MenuItemProps>>,
    pub styles: Option<StyleDef<MenuItemProps, MenuVariables>>,
    pub variables: Option<VariablesFn<MenuVariables>>,
    pub extra: Attributes,
}

impl Default for MenuItemProps {
    fn default() -> Self {
        Self {
            content: String::new(),
            active: false,
            disabled: false,
            is_from_keyboard: false,
            vertical: false,
            underlined: false,
            icon_only: false,
            pills: false,
            pointing: None,
            kind: MenuKind::Default,
            aria_label: None,
            aria_labelledby: None,
            role: None,
            accessibility: None,
            styles: None,
            variables: None,
            extra: Attributes::new(),
        }
    }
}

impl AnchorLabeled for MenuItemProps {
    fn aria_label(&self) -> Option<&str> {
        self.aria_label.as_deref()
    }
    fn aria_labelledby(&self) -> Option<&str> {
        self.aria_labelledby.as_deref()
    }
}

impl ButtonLike for MenuItemProps {
    fn tag(&self) -> Tag {
        Tag::Anchor
    }
    fn disabled(&self) -> bool {
        self.disabled
    }
}

fn border_color(kind: MenuKind, v: &MenuVariables) -> &str {
    match kind {
        MenuKind::Primary => &v.type_primary_border_color,
        MenuKind::Default => &v.default_border_color,
    }
}

/// The underlined active/hover treatment.
fn underlined_item(color: &str) -> StyleObject {
    StyleObject::new()
        .with("paddingBottom", "0")
        .with("borderBottom", format!("solid {} {}", px_to_rem(4.0), color))
        .with("transition", "color .1s ease")
}

/// Separator between plain items, drawn as a `::before` block.
fn item_separator(p: &MenuItemProps, v: &MenuVariables) -> Option<StyleObject> {
    let suppressed =
        p.pills || p.underlined || (p.pointing.is_some() && p.vertical) || p.icon_only;
    if suppressed {
        return None;
    }

    let mut before = StyleObject::new()
        .with("position", "absolute")
        .with("content", "\"\"")
        .with("top", "0")
        .with("right", "0")
        .with("background", border_color(p.kind, v));
    if p.vertical {
        before.set("width", "100%");
        before.set("height", "1px");
    } else {
        before.set("width", "1px");
        before.set("height", "100%");
    }
    Some(before)
}

/// The beak under (or above) an active pointing item, as `::after`.
fn pointing_beak(p: &MenuItemProps, v: &MenuVariables) -> Option<StyleObject> {
    let pointing = p.pointing?;
    if !p.active {
        return None;
    }

    let (background, border) = match p.kind {
        MenuKind::Primary => (
            &v.type_primary_active_background_color,
            &v.type_primary_border_color,
        ),
        MenuKind::Default => (&v.default_active_background_color, &v.default_border_color),
    };

    let mut after = StyleObject::new()
        .with("visibility", "visible")
        .with("background", background.as_str())
        .with("position", "absolute")
        .with("content", "\"\"")
        .with("left", "50%")
        .with("transform", "translateX(-50%) translateY(-50%) rotate(45deg)")
        .with("margin", ".5px 0 0")
        .with("width", px_to_rem(10.0))
        .with("height", px_to_rem(10.0))
        .with("border", "none");

    match pointing {
        Pointing::Start => {
            after.set("top", "-1px");
            after.set("borderTop", format!("1px solid {border}"));
            after.set("borderLeft", format!("1px solid {border}"));
        }
        Pointing::End => {
            after.set("top", "100%");
            after.set("borderBottom", format!("1px solid {border}"));
            after.set("borderRight", format!("1px solid {border}"));
        }
    }
    Some(after)
}

fn menu_item_root_styles(ctx: &StyleContext<'_, MenuItemProps, MenuVariables>) -> StyleObject {
    let p = ctx.props;
    let v = ctx.variables;

    let mut style = StyleObject::new().with("position", "relative").with(
        "display",
        if p.vertical { "block" } else { "inline-block" },
    );

    if let Some(before) = item_separator(p, v) {
        style.set("::before", before);
    }
    if let Some(after) = pointing_beak(p, v) {
        style.set("::after", after);
    }

    // Active, non-underlined items color the whole li.
    if p.active && !p.underlined {
        match p.kind {
            MenuKind::Primary => {
                style.set("color", v.type_primary_active_color.as_str());
                style.set("background", v.type_primary_active_background_color.as_str());
            }
            MenuKind::Default => {
                style.set("color", v.default_active_color.as_str());
                style.set("background", v.default_active_background_color.as_str());
            }
        }
    }

    style
}

fn menu_item_anchor_styles(ctx: &StyleContext<'_, MenuItemProps, MenuVariables>) -> StyleObject {
    let p = ctx.props;
    let v = ctx.variables;

    let mut style = StyleObject::new()
        .with("color", "inherit")
        .with("display", "block")
        .with("cursor", "pointer");

    if p.underlined {
        style.set("padding", format!("0 0 {} 0", px_to_rem(8.0)));
    } else if p.pointing.is_some() && p.vertical {
        style.set("padding", format!("{} {}", px_to_rem(8.0), px_to_rem(18.0)));
    } else {
        style.set("padding", format!("{} {}", px_to_rem(14.0), px_to_rem(18.0)));
    }

    if p.icon_only {
        let size = px_to_rem(v.icons_menu_item_size);
        style.set("width", size.as_str());
        style.set("height", size.as_str());
        style.set("padding", "0");
        style.set("display", "flex");
        style.set("alignItems", "center");
        style.set("justifyContent", "center");
    }

    let mut hover = StyleObject::new().with("color", "inherit");
    if p.underlined && !p.is_from_keyboard {
        hover.set("paddingBottom", px_to_rem(4.0));
        hover.merge_from(underlined_item(&v.default_active_background_color));
        if p.kind == MenuKind::Primary {
            hover.merge_from(underlined_item(&v.type_primary_active_border_color));
        }
    }
    style.set(":hover", hover);

    if p.active && p.underlined {
        style.set("color", v.default_color.as_str());
        style.set("paddingBottom", px_to_rem(4.0));
        style.merge_from(underlined_item(&v.default_active_color));
        match p.kind {
            MenuKind::Primary => {
                style.set("color", v.type_primary_active_color.as_str());
                style.merge_from(underlined_item(&v.type_primary_active_border_color));
            }
            MenuKind::Default => {
                style.set("fontWeight", 700);
            }
        }
    }

    style
}

pub fn resolve_menu_item(
    props: &MenuItemProps,
    theme: &Theme,
) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.menu_item;
    let behavior = resolve_behavior(
        menu_item_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &menu_item_literals(props),
    );

    let variables = menu_variables(slot, props.variables, theme);
    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        MENU_ITEM_NAME,
        MENU_ITEM_PARTS,
        behavior,
        &[
            (ROOT, menu_item_root_styles as StyleFn<MenuItemProps, MenuVariables>),
            (ANCHOR, menu_item_anchor_styles as StyleFn<MenuItemProps, MenuVariables>),
        ],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

fn menu_item_literals(props: &MenuItemProps) -> PartLiterals {
    let mut root = props.extra.clone();
    if let Some(role) = &props.role {
        root.set("role", role.as_str());
    }
    root_literals(root)
}

fn menu_variables<P>(
    slot: &crate::theme::ComponentSlot<P, MenuVariables>,
    instance: Option<VariablesFn<MenuVariables>>,
    theme: &Theme,
) -> MenuVariables {
    let mut variables = MenuVariables::from_site(&theme.site);
    if let Some(theme_fn) = slot.variables {
        variables = theme_fn(&theme.site, variables);
    }
    if let Some(instance_fn) = instance {
        variables = instance_fn(&theme.site, variables);
    }
    variables
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{tab_behavior, toolbar_button_behavior};
    use crate::theme::presets;

    #[test]
    fn test_menu_root_role_and_orientation() {
        let theme = presets::light();

        let horizontal = resolve_menu(&MenuProps::default(), &theme).unwrap();
        assert_eq!(
            horizontal.root().attributes.get_rendered("role"),
            Some("menu".into())
        );
        assert_eq!(horizontal.root().attributes.get("aria-orientation"), None);

        let vertical = resolve_menu(
            &MenuProps { vertical: true, ..Default::default() },
            &theme,
        )
        .unwrap();
        assert_eq!(
            vertical.root().attributes.get_rendered("aria-orientation"),
            Some("vertical".into())
        );
    }

    #[test]
    fn test_item_root_is_presentational_anchor_is_menuitem() {
        let theme = presets::light();
        let rendered = resolve_menu_item(&MenuItemProps::default(), &theme).unwrap();
        assert_eq!(
            rendered.root().attributes.get_rendered("role"),
            Some("presentation".into())
        );
        assert_eq!(
            rendered.part(ANCHOR).unwrap().attributes.get_rendered("role"),
            Some("menuitem".into())
        );
    }

    #[test]
    fn test_aria_label_routes_to_anchor_not_root() {
        let theme = presets::light();
        let props = MenuItemProps {
            aria_label: Some("Useful Tool Tip".into()),
            ..Default::default()
        };
        let rendered = resolve_menu_item(&props, &theme).unwrap();
        assert_eq!(rendered.root().attributes.get("aria-label"), None);
        assert_eq!(
            rendered.part(ANCHOR).unwrap().attributes.get_rendered("aria-label"),
            Some("Useful Tool Tip".into())
        );
    }

    #[test]
    fn test_toolbar_button_override_keeps_presentation_root() {
        let theme = presets::light();
        let props = MenuItemProps {
            aria_labelledby: Some("element-that-labels".into()),
            accessibility: Some(toolbar_button_behavior),
            ..Default::default()
        };
        let rendered = resolve_menu_item(&props, &theme).unwrap();
        assert_eq!(
            rendered.root().attributes.get_rendered("role"),
            Some("presentation".into())
        );
        let anchor = &rendered.part(ANCHOR).unwrap().attributes;
        assert_eq!(anchor.get_rendered("role"), Some("button".into()));
        assert_eq!(
            anchor.get_rendered("aria-labelledby"),
            Some("element-that-labels".into())
        );
    }

    #[test]
    fn test_tab_override_swaps_anchor_role() {
        let theme = presets::light();
        let props = MenuItemProps {
            accessibility: Some(tab_behavior),
            ..Default::default()
        };
        let rendered = resolve_menu_item(&props, &theme).unwrap();
        assert_eq!(
            rendered.part(ANCHOR).unwrap().attributes.get_rendered("role"),
            Some("tab".into())
        );
    }

    #[test]
    fn test_separator_block_for_plain_items() {
        let theme = presets::light();
        let rendered = resolve_menu_item(&MenuItemProps::default(), &theme).unwrap();
        let before = rendered.root().style.get_block("::before").unwrap();
        assert_eq!(before.get_str("width"), Some("1px"));
        assert_eq!(before.get_str("height"), Some("100%"));
    }

    #[test]
    fn test_no_separator_when_underlined() {
        let theme = presets::light();
        let props = MenuItemProps { underlined: true, ..Default::default() };
        let rendered = resolve_menu_item(&props, &theme).unwrap();
        assert!(rendered.root().style.get_block("::before").is_none());
    }

    #[test]
    fn test_pointing_beak_only_when_active() {
        let theme = presets::light();

        let inactive = MenuItemProps { pointing: Some(Pointing::Start), ..Default::default() };
        let rendered = resolve_menu_item(&inactive, &theme).unwrap();
        assert!(rendered.root().style.get_block("::after").is_none());

        let active = MenuItemProps {
            pointing: Some(Pointing::Start),
            active: true,
            ..Default::default()
        };
        let rendered = resolve_menu_item(&active, &theme).unwrap();
        let after = rendered.root().style.get_block("::after").unwrap();
        assert_eq!(after.get_str("top"), Some("-1px"));
    }

    #[test]
    fn test_active_underlined_primary_anchor() {
        let theme = presets::light();
        let props = MenuItemProps {
            active: true,
            underlined: true,
            kind: MenuKind::Primary,
            ..Default::default()
        };
        let rendered = resolve_menu_item(&props, &theme).unwrap();
        let anchor = &rendered.part(ANCHOR).unwrap().style;
        assert_eq!(anchor.get_str("color"), Some(theme.site.white.as_str()));
        let expected = format!("solid 0.25rem {}", theme.site.brand);
        assert_eq!(anchor.get_str("borderBottom"), Some(expected.as_str()));
    }

    #[test]
    fn test_icon_only_anchor_is_square() {
        let theme = presets::light();
        let props = MenuItemProps { icon_only: true, ..Default::default() };
        let rendered = resolve_menu_item(&props, &theme).unwrap();
        let anchor = &rendered.part(ANCHOR).unwrap().style;
        assert_eq!(anchor.get_str("width"), Some("2rem"));
        assert_eq!(anchor.get_str("padding"), Some("0"));
    }
}
