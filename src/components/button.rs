//! Button component.
//!
//! Renders as a native `<button>` by default; callers can render it as
//! any element and `ButtonBehavior` supplies `role="button"` in that
//! case. `disabled` mirrors into `aria-disabled` either way.

use crate::behavior::{button_behavior, resolve_behavior, root_literals, BehaviorFn, ButtonLike, PartLiterals};
use crate::error::ResolveError;
use crate::resolve::{assemble, ComponentRender};
use crate::style::{px_to_rem, StyleContext, StyleDef, StyleFn, StyleObject};
use crate::theme::{SiteVariables, Theme, VariablesFn};
use crate::types::{Attributes, PartName, Tag, ROOT};

pub const NAME: &str = "Button";
pub const PARTS: &[PartName] = &[ROOT];

// =============================================================================
// Props
// =============================================================================

pub struct ButtonProps {
    /// Visible label.
    pub content: String,
    /// Element to render as.
    pub tag: Tag,
    pub disabled: bool,
    /// Explicit literal role; wins over any behavior output.
    pub role: Option<String>,
    /// Behavior override; replaces the default outright.
    pub accessibility: Option<BehaviorFn<ButtonProps>>,
    /// Instance-level style override for the root part.
    pub styles: Option<StyleDef<ButtonProps, ButtonVariables>>,
    /// Instance-level variable override.
    pub variables: Option<VariablesFn<ButtonVariables>>,
    /// Unrecognized attributes, passed through to the root element.
    pub extra: Attributes,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            content: String::new(),
            tag: Tag::Button,
            disabled: false,
            role: None,
            accessibility: None,
            styles: None,
            variables: None,
            extra: Attributes::new(),
        }
    }
}

impl ButtonLike for ButtonProps {
    fn tag(&self) -> Tag {
        self.tag
    }
    fn disabled(&self) -> bool {
        self.disabled
    }
}

// =============================================================================
// Variables
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonVariables {
    pub color: String,
    pub background: String,
    pub hover_background: String,
    pub border_color: String,
    pub disabled_color: String,
    pub disabled_background: String,
    /// Control height in pixels.
    pub height: f64,
}

impl ButtonVariables {
    pub fn from_site(site: &SiteVariables) -> Self {
        Self {
            color: site.body_color.clone(),
            background: site.gray10.clone(),
            hover_background: site.gray08.clone(),
            border_color: site.gray08.clone(),
            disabled_color: site.gray06.clone(),
            disabled_background: site.gray09.clone(),
            height: 32.0,
        }
    }
}

// =============================================================================
// Styles
// =============================================================================

fn root_styles(ctx: &StyleContext<'_, ButtonProps, ButtonVariables>) -> StyleObject {
    let v = ctx.variables;
    let mut style = StyleObject::new()
        .with("display", "inline-block")
        .with("textAlign", "center")
        .with("verticalAlign", "middle")
        .with("height", px_to_rem(v.height))
        .with("padding", format!("0 {}", px_to_rem(20.0)))
        .with("borderRadius", px_to_rem(3.0))
        .with("border", format!("1px solid {}", v.border_color));

    if ctx.props.disabled {
        style.set("color", v.disabled_color.as_str());
        style.set("backgroundColor", v.disabled_background.as_str());
        style.set("cursor", "default");
    } else {
        style.set("color", v.color.as_str());
        style.set("backgroundColor", v.background.as_str());
        style.set("cursor", "pointer");
        style.set(
            ":hover",
            StyleObject::new().with("backgroundColor", v.hover_background.as_str()),
        );
    }

    style
}

// =============================================================================
// Resolution
// =============================================================================

fn resolved_variables(props: &ButtonProps, theme: &Theme) -> ButtonVariables {
    let mut vars = ButtonVariables::from_site(&theme.site);
    if let Some(theme_fn) = theme.components.button.variables {
        vars = theme_fn(&theme.site, vars);
    }
    if let Some(instance_fn) = props.variables {
        vars = instance_fn(&theme.site, vars);
    }
    vars
}

fn literals(props: &ButtonProps) -> PartLiterals {
    let mut root = props.extra.clone();
    if let Some(role) = &props.role {
        root.set("role", role.as_str());
    }
    root_literals(root)
}

/// Resolve the button's attributes, styles and key actions for one
/// render pass.
pub fn resolve(props: &ButtonProps, theme: &Theme) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.button;
    let behavior = resolve_behavior(
        button_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &literals(props),
    );

    let variables = resolved_variables(props, theme);
    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        NAME,
        PARTS,
        behavior,
        &[(ROOT, root_styles as StyleFn<ButtonProps, ButtonVariables>)],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::presets;

    #[test]
    fn test_native_button_has_no_role() {
        let theme = presets::light();
        let rendered = resolve(&ButtonProps::default(), &theme).unwrap();
        assert_eq!(rendered.root().attributes.get_rendered("role"), None);
    }

    #[test]
    fn test_non_native_element_gets_button_role() {
        let theme = presets::light();
        let props = ButtonProps { tag: Tag::Div, ..Default::default() };
        let rendered = resolve(&props, &theme).unwrap();
        assert_eq!(
            rendered.root().attributes.get_rendered("role"),
            Some("button".into())
        );
    }

    #[test]
    fn test_disabled_mirrors_into_aria_disabled() {
        let theme = presets::light();
        for disabled in [true, false] {
            let props = ButtonProps { disabled, ..Default::default() };
            let rendered = resolve(&props, &theme).unwrap();
            assert_eq!(
                rendered.root().attributes.get_rendered("aria-disabled"),
                Some(disabled.to_string())
            );
        }
    }

    #[test]
    fn test_literal_role_wins() {
        let theme = presets::light();
        let props = ButtonProps {
            tag: Tag::Div,
            role: Some("custom".into()),
            ..Default::default()
        };
        let rendered = resolve(&props, &theme).unwrap();
        assert_eq!(
            rendered.root().attributes.get_rendered("role"),
            Some("custom".into())
        );
    }

    #[test]
    fn test_extra_attributes_pass_through_to_root() {
        let theme = presets::light();
        let props = ButtonProps {
            extra: Attributes::new().with("data-testid", "save"),
            ..Default::default()
        };
        let rendered = resolve(&props, &theme).unwrap();
        assert_eq!(
            rendered.root().attributes.get_rendered("data-testid"),
            Some("save".into())
        );
    }

    #[test]
    fn test_disabled_styles() {
        let theme = presets::light();
        let props = ButtonProps { disabled: true, ..Default::default() };
        let rendered = resolve(&props, &theme).unwrap();
        let style = &rendered.root().style;
        assert_eq!(style.get_str("cursor"), Some("default"));
        assert!(style.get_block(":hover").is_none());
    }

    #[test]
    fn test_caller_style_override_wins() {
        let theme = presets::light();
        let props = ButtonProps {
            styles: Some(StyleDef::Value(StyleObject::new().with("height", "3rem"))),
            ..Default::default()
        };
        let rendered = resolve(&props, &theme).unwrap();
        assert_eq!(rendered.root().style.get_str("height"), Some("3rem"));
    }

    #[test]
    fn test_resolve_is_pure() {
        let theme = presets::light();
        let props = ButtonProps { tag: Tag::Div, disabled: true, ..Default::default() };
        assert_eq!(resolve(&props, &theme).unwrap(), resolve(&props, &theme).unwrap());
    }
}
