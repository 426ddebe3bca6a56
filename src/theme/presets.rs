//! Built-in theme presets.
//!
//! `light` is the reference palette. `dark` flips the body colors and
//! remaps the gray ramp; it also carries a couple of component-level
//! variable overrides to show the slot mechanism - component code never
//! changes between the two.

use crate::components::chat::ChatVariables;
use crate::components::text::TextVariables;
use crate::error::ResolveError;
use crate::style::{StyleDef, StyleObject};
use crate::types::ROOT;

use super::{SiteVariables, Theme};

/// Look up a built-in preset by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "light" => Some(light()),
        "dark" => Some(dark()),
        _ => None,
    }
}

/// Like [`get_preset`], but unknown names are an error.
pub fn require_preset(name: &str) -> Result<Theme, ResolveError> {
    get_preset(name).ok_or_else(|| ResolveError::UnknownPreset(name.to_string()))
}

/// Names of all built-in presets.
pub const PRESET_NAMES: &[&str] = &["light", "dark"];

/// The default light theme.
pub fn light() -> Theme {
    Theme::from_site("light", SiteVariables::default())
}

/// Dark theme: inverted body colors, brand held, grays remapped.
pub fn dark() -> Theme {
    let site = SiteVariables {
        brand: "#9ea2ff".into(),
        black: "#faf9f8".into(),
        white: "#201f1f".into(),
        gray02: "#c8c6c4".into(),
        gray03: "#b3b0ad".into(),
        gray04: "#8a8886".into(),
        gray06: "#605e5c".into(),
        gray08: "#3b3a39".into(),
        gray09: "#323130".into(),
        gray10: "#2d2c2c".into(),
        body_background: "#201f1f".into(),
        body_color: "#faf9f8".into(),
        ..SiteVariables::default()
    };

    let mut theme = Theme::from_site("dark", site);
    theme.components.text.variables = Some(dark_text_variables);
    theme.components.chat.variables = Some(dark_chat_variables);
    theme.components.chat_message.variables = Some(dark_chat_variables);
    theme.components.chat_message.styles.insert(
        ROOT,
        StyleDef::Value(StyleObject::new().with("boxShadow", "none")),
    );
    theme
}

fn dark_text_variables(site: &SiteVariables, mut vars: TextVariables) -> TextVariables {
    // Timestamps need a lighter gray to stay legible on dark surfaces.
    vars.timestamp_text_color = site.gray03.clone();
    vars.timestamp_hover_text_color = site.body_color.clone();
    vars
}

fn dark_chat_variables(site: &SiteVariables, mut vars: ChatVariables) -> ChatVariables {
    vars.message_background = site.gray09.clone();
    vars.message_mine_background = "#32336a".into();
    vars
}
