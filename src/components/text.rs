//! Text component.
//!
//! A span with a fixed vocabulary of typographic props - size and weight
//! enums plus semantic flags - every one of which routes through
//! [`TextVariables`] so themes can restyle text without touching this
//! module.

use crate::behavior::{default_behavior, resolve_behavior, root_literals, BehaviorFn, PartLiterals};
use crate::error::ResolveError;
use crate::resolve::{assemble, ComponentRender};
use crate::style::{px_to_rem_base, StyleContext, StyleDef, StyleFn, StyleObject};
use crate::theme::{SiteVariables, Theme, VariablesFn};
use crate::types::{Attributes, PartName, ROOT};

pub const NAME: &str = "Text";
pub const PARTS: &[PartName] = &[ROOT];

// =============================================================================
// Prop enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Smaller,
    Small,
    Medium,
    Large,
    Larger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextWeight {
    Light,
    Semilight,
    Regular,
    Semibold,
    Bold,
}

/// Whom an `@mention` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mention {
    /// Mentions someone else.
    Other,
    /// Mentions the current user.
    Me,
}

// =============================================================================
// Props
// =============================================================================

#[derive(Default)]
pub struct TextProps {
    pub content: String,
    pub size: Option<TextSize>,
    pub weight: Option<TextWeight>,
    pub at_mention: Option<Mention>,
    pub disabled: bool,
    pub error: bool,
    pub success: bool,
    pub important: bool,
    pub temporary: bool,
    pub timestamp: bool,
    pub truncated: bool,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<TextProps>>,
    pub styles: Option<StyleDef<TextProps, TextVariables>>,
    pub variables: Option<VariablesFn<TextVariables>>,
    pub extra: Attributes,
}

// =============================================================================
// Variables
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct TextVariables {
    pub at_mention_other_text_color: String,
    pub at_mention_me_text_color: String,
    pub at_mention_me_font_weight: f64,
    pub disabled_text_color: String,
    pub error_text_color: String,
    pub success_text_color: String,
    pub timestamp_text_color: String,
    pub timestamp_hover_text_color: String,
    pub important_text_color: String,
    pub important_weight: f64,

    pub text_weight_light: f64,
    pub text_weight_semilight: f64,
    pub text_weight_regular: f64,
    pub text_weight_semibold: f64,
    pub text_weight_bold: f64,

    /// Font sizes as rem strings, derived from the site type scale.
    pub text_extra_small_font_size: String,
    pub text_small_font_size: String,
    pub text_medium_font_size: String,
    pub text_large_font_size: String,
    pub text_extra_large_font_size: String,

    /// Unitless line heights.
    pub text_extra_small_line_height: f64,
    pub text_small_line_height: f64,
    pub text_medium_line_height: f64,
    pub text_large_line_height: f64,
    pub text_extra_large_line_height: f64,
}

impl TextVariables {
    pub fn from_site(site: &SiteVariables) -> Self {
        let rem = site.rem_size;
        Self {
            at_mention_other_text_color: site.orange04.clone(),
            at_mention_me_text_color: site.orange04.clone(),
            at_mention_me_font_weight: 700.0,
            disabled_text_color: site.gray06.clone(),
            error_text_color: site.red.clone(),
            success_text_color: site.green04.clone(),
            timestamp_text_color: site.gray04.clone(),
            timestamp_hover_text_color: site.gray02.clone(),
            important_text_color: site.red.clone(),
            important_weight: 700.0,
            text_weight_light: 200.0,
            text_weight_semilight: 300.0,
            text_weight_regular: 400.0,
            text_weight_semibold: 600.0,
            text_weight_bold: 700.0,
            text_extra_small_font_size: px_to_rem_base(site.font_size_smaller, rem),
            text_small_font_size: px_to_rem_base(site.font_size_small, rem),
            text_medium_font_size: px_to_rem_base(site.font_size_medium, rem),
            text_large_font_size: px_to_rem_base(site.font_size_large, rem),
            text_extra_large_font_size: px_to_rem_base(site.font_size_larger, rem),
            text_extra_small_line_height: 1.2,
            text_small_line_height: 1.3333,
            text_medium_line_height: 1.4286,
            text_large_line_height: 1.3333,
            text_extra_large_line_height: 1.3333,
        }
    }
}

// =============================================================================
// Styles
// =============================================================================

fn root_styles(ctx: &StyleContext<'_, TextProps, TextVariables>) -> StyleObject {
    let p = ctx.props;
    let v = ctx.variables;
    let mut style = StyleObject::new();

    if p.truncated {
        style.set("overflow", "hidden");
        style.set("textOverflow", "ellipsis");
        style.set("whiteSpace", "nowrap");
    }
    match p.at_mention {
        Some(Mention::Other) => {
            style.set("color", v.at_mention_other_text_color.as_str());
        }
        Some(Mention::Me) => {
            style.set("color", v.at_mention_me_text_color.as_str());
            style.set("fontWeight", v.at_mention_me_font_weight);
        }
        None => {}
    }
    if p.disabled {
        style.set("color", v.disabled_text_color.as_str());
    }
    if p.error {
        style.set("color", v.error_text_color.as_str());
    }
    if p.success {
        style.set("color", v.success_text_color.as_str());
    }
    if p.temporary {
        style.set("fontStyle", "italic");
    }
    if p.timestamp {
        style.set("color", v.timestamp_text_color.as_str());
        style.set(
            ":hover",
            StyleObject::new().with("color", v.timestamp_hover_text_color.as_str()),
        );
    }

    if let Some(weight) = p.weight {
        let value = match weight {
            TextWeight::Light => v.text_weight_light,
            TextWeight::Semilight => v.text_weight_semilight,
            TextWeight::Regular => v.text_weight_regular,
            TextWeight::Semibold => v.text_weight_semibold,
            TextWeight::Bold => v.text_weight_bold,
        };
        style.set("fontWeight", value);
    }

    // Important wins over any weight/color set above.
    if p.important {
        style.set("fontWeight", v.important_weight);
        style.set("color", v.important_text_color.as_str());
    }

    if let Some(size) = p.size {
        let (font_size, line_height) = match size {
            TextSize::Smaller => (&v.text_extra_small_font_size, v.text_extra_small_line_height),
            TextSize::Small => (&v.text_small_font_size, v.text_small_line_height),
            TextSize::Medium => (&v.text_medium_font_size, v.text_medium_line_height),
            TextSize::Large => (&v.text_large_font_size, v.text_large_line_height),
            TextSize::Larger => (&v.text_extra_large_font_size, v.text_extra_large_line_height),
        };
        style.set("fontSize", font_size.as_str());
        style.set("lineHeight", line_height);
    }

    style
}

// =============================================================================
// Resolution
// =============================================================================

fn literals(props: &TextProps) -> PartLiterals {
    let mut root = props.extra.clone();
    if let Some(role) = &props.role {
        root.set("role", role.as_str());
    }
    root_literals(root)
}

pub fn resolve(props: &TextProps, theme: &Theme) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.text;
    let behavior = resolve_behavior(
        default_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &literals(props),
    );

    let mut variables = TextVariables::from_site(&theme.site);
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
        &[(ROOT, root_styles as StyleFn<TextProps, TextVariables>)],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

// =============================================================================
// Tests
// =============================================================================
