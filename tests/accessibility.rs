//! Accessibility conformance suite.
//!
//! Every component must handle the same override ladder for roles:
//! default behavior < behavior override < explicit `role` prop. The
//! `check_role_ladder!` macro runs that ladder against one component;
//! component-specific routing (anchor parts, disabled mirroring) gets
//! explicit tests below.
//!
//! Run with: cargo test --test accessibility

use weft_ui::behavior::{default_behavior, tab_behavior, toolbar_button_behavior, Behavior, ANCHOR};
use weft_ui::components::{avatar, button, chat, grid, list, menu, text};
use weft_ui::theme::presets;
use weft_ui::types::{Attributes, Tag, ROOT};
use weft_ui::ComponentRender;

fn root_role(rendered: &ComponentRender) -> Option<String> {
    rendered.root().attributes.get_rendered("role")
}

/// A behavior override that stamps a recognizable role on the root.
fn mock_behavior<P>(_props: &P) -> Behavior {
    Behavior::new().with_attributes(ROOT, Attributes::new().with("role", "test-mock-role"))
}

// =============================================================================
// The role override ladder
// =============================================================================

/// Asserts the four-rung ladder for one component: the default behavior
/// supplies (or omits) the root role, overriding with the default
/// behavior clears it, a behavior override replaces it, and an explicit
/// `role` prop beats everything.
macro_rules! check_role_ladder {
    ($module:ident, $resolver:path, $props:ty, $default_role:expr) => {
        mod $module {
            use super::*;

            #[test]
            fn default_behavior_supplies_role() {
                let theme = presets::light();
                let rendered = $resolver(&<$props>::default(), &theme).unwrap();
                assert_eq!(root_role(&rendered).as_deref(), $default_role);
            }

            #[test]
            fn default_behavior_override_clears_role() {
                let theme = presets::light();
                let mut props = <$props>::default();
                props.accessibility = Some(default_behavior);
                let rendered = $resolver(&props, &theme).unwrap();
                assert_eq!(root_role(&rendered), None);
            }

            #[test]
            fn behavior_override_replaces_role() {
                let theme = presets::light();
                let mut props = <$props>::default();
                props.accessibility = Some(mock_behavior);
                let rendered = $resolver(&props, &theme).unwrap();
                assert_eq!(root_role(&rendered).as_deref(), Some("test-mock-role"));
            }

            #[test]
            fn role_prop_beats_behavior_override() {
                let theme = presets::light();
                let mut props = <$props>::default();
                props.accessibility = Some(mock_behavior);
                props.role = Some("test-role".into());
                let rendered = $resolver(&props, &theme).unwrap();
                assert_eq!(root_role(&rendered).as_deref(), Some("test-role"));
            }
        }
    };
}

check_role_ladder!(button_ladder, button::resolve, button::ButtonProps, None);
check_role_ladder!(list_ladder, list::resolve_list, list::ListProps, Some("list"));
check_role_ladder!(
    list_item_ladder,
    list::resolve_list_item,
    list::ListItemProps,
    Some("listitem")
);
check_role_ladder!(menu_ladder, menu::resolve_menu, menu::MenuProps, Some("menu"));
check_role_ladder!(
    menu_item_ladder,
    menu::resolve_menu_item,
    menu::MenuItemProps,
    Some("presentation")
);
check_role_ladder!(chat_ladder, chat::resolve_chat, chat::ChatProps, Some("list"));
check_role_ladder!(
    chat_message_ladder,
    chat::resolve_chat_message,
    chat::ChatMessageProps,
    Some("listitem")
);
check_role_ladder!(avatar_ladder, avatar::resolve, avatar::AvatarProps, None);
check_role_ladder!(text_ladder, text::resolve, text::TextProps, None);
check_role_ladder!(grid_ladder, grid::resolve, grid::GridProps, None);

// =============================================================================
// Button specifics
// =============================================================================

#[test]
fn button_rendered_as_div_gets_button_role() {
    let theme = presets::light();
    let props = button::ButtonProps { tag: Tag::Div, ..Default::default() };
    let rendered = button::resolve(&props, &theme).unwrap();
    assert_eq!(root_role(&rendered).as_deref(), Some("button"));
}

#[test]
fn native_button_gets_no_role() {
    let theme = presets::light();
    let props = button::ButtonProps { tag: Tag::Button, ..Default::default() };
    let rendered = button::resolve(&props, &theme).unwrap();
    assert_eq!(root_role(&rendered), None);
}

#[test]
fn button_mirrors_disabled_into_aria_disabled() {
    let theme = presets::light();
    for disabled in [true, false] {
        let props = button::ButtonProps { disabled, ..Default::default() };
        let rendered = button::resolve(&props, &theme).unwrap();
        assert_eq!(
            rendered.root().attributes.get_rendered("aria-disabled"),
            Some(disabled.to_string())
        );
    }
}

// =============================================================================
// MenuItem part routing
// =============================================================================

#[test]
fn menu_item_anchor_carries_menuitem_role() {
    let theme = presets::light();
    let rendered = menu::resolve_menu_item(&menu::MenuItemProps::default(), &theme).unwrap();
    assert_eq!(
        rendered.part(ANCHOR).unwrap().attributes.get_rendered("role"),
        Some("menuitem".into())
    );
}

#[test]
fn menu_item_labels_route_to_anchor() {
    let theme = presets::light();
    let props = menu::MenuItemProps {
        aria_label: Some("Useful Tool Tip".into()),
        aria_labelledby: Some("labelling-element".into()),
        ..Default::default()
    };
    let rendered = menu::resolve_menu_item(&props, &theme).unwrap();

    let root = &rendered.root().attributes;
    assert_eq!(root.get("aria-label"), None);
    assert_eq!(root.get("aria-labelledby"), None);

    let anchor = &rendered.part(ANCHOR).unwrap().attributes;
    assert_eq!(anchor.get_rendered("aria-label"), Some("Useful Tool Tip".into()));
    assert_eq!(
        anchor.get_rendered("aria-labelledby"),
        Some("labelling-element".into())
    );
}

#[test]
fn toolbar_button_behavior_turns_anchor_into_button() {
    let theme = presets::light();
    let props = menu::MenuItemProps {
        accessibility: Some(toolbar_button_behavior),
        disabled: true,
        ..Default::default()
    };
    let rendered = menu::resolve_menu_item(&props, &theme).unwrap();

    let anchor = &rendered.part(ANCHOR).unwrap().attributes;
    assert_eq!(anchor.get_rendered("role"), Some("button".into()));
    assert_eq!(anchor.get_rendered("aria-disabled"), Some("true".into()));
}

#[test]
fn tab_behavior_turns_anchor_into_tab() {
    let theme = presets::light();
    let props = menu::MenuItemProps {
        accessibility: Some(tab_behavior),
        ..Default::default()
    };
    let rendered = menu::resolve_menu_item(&props, &theme).unwrap();
    assert_eq!(
        rendered.part(ANCHOR).unwrap().attributes.get_rendered("role"),
        Some("tab".into())
    );
}

// =============================================================================
// Resolution is pure
// =============================================================================

#[test]
fn resolving_twice_yields_identical_output() {
    let theme = presets::light();
    let props = menu::MenuItemProps {
        active: true,
        underlined: true,
        aria_label: Some("repeat".into()),
        ..Default::default()
    };

    let first = menu::resolve_menu_item(&props, &theme).unwrap();
    let second = menu::resolve_menu_item(&props, &theme).unwrap();
    assert_eq!(first, second);
}

#[test]
fn themes_change_styles_not_semantics() {
    let light = presets::light();
    let dark = presets::dark();
    let props = chat::ChatMessageProps { mine: true, ..Default::default() };

    let on_light = chat::resolve_chat_message(&props, &light).unwrap();
    let on_dark = chat::resolve_chat_message(&props, &dark).unwrap();

    assert_eq!(
        on_light.root().attributes.rendered(),
        on_dark.root().attributes.rendered()
    );
    assert_ne!(
        on_light.root().style.get_str("backgroundColor"),
        on_dark.root().style.get_str("backgroundColor")
    );
}
