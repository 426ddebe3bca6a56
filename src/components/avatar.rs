//! Avatar component.
//!
//! Four parts: root, image, label (initials fallback), status badge.
//! All sizing derives from the single `size` prop (pixels), normalized
//! to rem; the label font scales with it.

use crate::behavior::{default_behavior, resolve_behavior, root_literals, BehaviorFn, PartLiterals};
use crate::error::ResolveError;
use crate::resolve::{assemble, ComponentRender};
use crate::style::{px_to_rem, StyleContext, StyleDef, StyleFn, StyleObject};
use crate::theme::{SiteVariables, Theme, VariablesFn};
use crate::types::{Attributes, PartName, ROOT};

pub const NAME: &str = "Avatar";
pub const PARTS: &[PartName] = &[ROOT, "image", "label", "status"];

/// Divisor mapping avatar size to label font size.
const LABEL_FONT_RATIO: f64 = 2.333;

// =============================================================================
// Props
// =============================================================================

pub struct AvatarProps {
    /// Person name; initials render in the label part when no image.
    pub name: String,
    pub image: Option<String>,
    /// Diameter in pixels.
    pub size: f64,
    /// Status badge accent, e.g. "green".
    pub status: Option<String>,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<AvatarProps>>,
    pub styles: Option<StyleDef<AvatarProps, AvatarVariables>>,
    pub variables: Option<VariablesFn<AvatarVariables>>,
    pub extra: Attributes,
}

impl Default for AvatarProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: None,
            size: 32.0,
            status: None,
            role: None,
            accessibility: None,
            styles: None,
            variables: None,
            extra: Attributes::new(),
        }
    }
}

// =============================================================================
// Variables
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarVariables {
    pub status_border_color: String,
    /// Border around the status badge, in pixels.
    pub status_border_width: f64,
}

impl AvatarVariables {
    pub fn from_site(site: &SiteVariables) -> Self {
        Self {
            status_border_color: site.body_background.clone(),
            status_border_width: 2.0,
        }
    }
}

// =============================================================================
// Styles
// =============================================================================

fn root_styles(ctx: &StyleContext<'_, AvatarProps, AvatarVariables>) -> StyleObject {
    let size = ctx.props.size;
    StyleObject::new()
        .with("position", "relative")
        .with("backgroundColor", "inherit")
        .with("display", "inline-block")
        .with("verticalAlign", "middle")
        .with("height", px_to_rem(size))
        .with("width", px_to_rem(size))
}

fn image_styles(_ctx: &StyleContext<'_, AvatarProps, AvatarVariables>) -> StyleObject {
    StyleObject::new().with("verticalAlign", "top")
}

fn label_styles(ctx: &StyleContext<'_, AvatarProps, AvatarVariables>) -> StyleObject {
    let size = ctx.props.size;
    StyleObject::new()
        .with("display", "inline-block")
        .with("width", px_to_rem(size))
        .with("height", px_to_rem(size))
        .with("lineHeight", px_to_rem(size))
        .with("fontSize", px_to_rem(size / LABEL_FONT_RATIO))
        .with("verticalAlign", "top")
        .with("textAlign", "center")
        .with("padding", "0px")
}

fn status_styles(ctx: &StyleContext<'_, AvatarProps, AvatarVariables>) -> StyleObject {
    let v = ctx.variables;
    StyleObject::new()
        .with("position", "absolute")
        .with("bottom", format!("-{}px", v.status_border_width))
        .with("right", format!("-{}px", v.status_border_width))
        .with(
            "border",
            format!("{}px solid {}", v.status_border_width, v.status_border_color),
        )
}

// =============================================================================
// Resolution
// =============================================================================

fn literals(props: &AvatarProps) -> PartLiterals {
    let mut root = props.extra.clone();
    if let Some(role) = &props.role {
        root.set("role", role.as_str());
    }
    if !props.name.is_empty() {
        root.set("aria-label", props.name.as_str());
    }
    root_literals(root)
}

pub fn resolve(props: &AvatarProps, theme: &Theme) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.avatar;
    let behavior = resolve_behavior(
        default_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &literals(props),
    );

    let mut variables = AvatarVariables::from_site(&theme.site);
    if let Some(theme_fn) = slot.variables {
        variables = theme_fn(&theme.site, variables);
    }
    if let Some(instance_fn) = props.variables {
        variables = instance_fn(&theme.site, variables);
    }

    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        NAME,
        PARTS,
        behavior,
        &[
            (ROOT, root_styles as StyleFn<AvatarProps, AvatarVariables>),
            ("image", image_styles as StyleFn<AvatarProps, AvatarVariables>),
            ("label", label_styles as StyleFn<AvatarProps, AvatarVariables>),
            ("status", status_styles as StyleFn<AvatarProps, AvatarVariables>),
        ],
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
    fn test_root_dimensions_from_size() {
        let theme = presets::light();
        let props = AvatarProps { size: 40.0, ..Default::default() };
        let rendered = resolve(&props, &theme).unwrap();
        let root = &rendered.root().style;
        assert_eq!(root.get_str("height"), Some("2.5rem"));
        assert_eq!(root.get_str("width"), Some("2.5rem"));
    }

    #[test]
    fn test_label_font_scales_with_size() {
        let theme = presets::light();
        let props = AvatarProps { size: 32.0, ..Default::default() };
        let rendered = resolve(&props, &theme).unwrap();
        let label = &rendered.part("label").unwrap().style;
        assert_eq!(label.get_str("lineHeight"), Some("2rem"));
        assert_eq!(
            label.get_str("fontSize"),
            Some(px_to_rem(32.0 / LABEL_FONT_RATIO).as_str())
        );
    }

    #[test]
    fn test_status_offset_uses_border_width_variable() {
        let theme = presets::light();
        let rendered = resolve(&AvatarProps::default(), &theme).unwrap();
        let status = &rendered.part("status").unwrap().style;
        assert_eq!(status.get_str("bottom"), Some("-2px"));
        assert_eq!(status.get_str("right"), Some("-2px"));
    }

    #[test]
    fn test_instance_variables_override() {
        let theme = presets::light();
        let props = AvatarProps {
            variables: Some(|_site, mut vars| {
                vars.status_border_width = 4.0;
                vars
            }),
            ..Default::default()
        };
        let rendered = resolve(&props, &theme).unwrap();
        let status = &rendered.part("status").unwrap().style;
        assert_eq!(status.get_str("bottom"), Some("-4px"));
    }

    #[test]
    fn test_name_becomes_root_aria_label() {
        let theme = presets::light();
        let props = AvatarProps { name: "Jane Doe".into(), ..Default::default() };
        let rendered = resolve(&props, &theme).unwrap();
        assert_eq!(
            rendered.root().attributes.get_rendered("aria-label"),
            Some("Jane Doe".into())
        );
    }

    #[test]
    fn test_unknown_part_is_error() {
        let theme = presets::light();
        let rendered = resolve(&AvatarProps::default(), &theme).unwrap();
        assert!(rendered.part("badge").is_err());
    }
}
