//! Chat and ChatMessage components.
//!
//! The chat is a plain message list; the message is where theming gets
//! exercised: `mine` flips the bubble background and alignment through
//! variables, and the dark preset restyles both without any prop
//! changes.

use crate::behavior::{
    list_behavior, resolve_behavior, root_literals, BehaviorFn, PartLiterals,
};
use crate::error::ResolveError;
use crate::resolve::{assemble, ComponentRender};
use crate::style::{px_to_rem, StyleContext, StyleDef, StyleFn, StyleObject};
use crate::theme::{ComponentSlot, SiteVariables, Theme, VariablesFn};
use crate::types::{Attributes, PartName, ROOT};

pub const CHAT_NAME: &str = "Chat";
pub const CHAT_MESSAGE_NAME: &str = "ChatMessage";
pub const CHAT_PARTS: &[PartName] = &[ROOT];
pub const CHAT_MESSAGE_PARTS: &[PartName] = &[ROOT, "content"];

// =============================================================================
// Variables (shared by Chat and ChatMessage)
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ChatVariables {
    pub background: String,
    pub message_color: String,
    pub message_background: String,
    pub message_mine_background: String,
    /// Bubble width as a CSS value.
    pub message_width: String,
    /// Bubble padding in pixels.
    pub message_padding: f64,
    pub message_shadow: String,
}

impl ChatVariables {
    pub fn from_site(site: &SiteVariables) -> Self {
        Self {
            background: site.body_background.clone(),
            message_color: site.body_color.clone(),
            message_background: site.white.clone(),
            message_mine_background: "#e5e5f1".into(),
            message_width: "70%".into(),
            message_padding: 16.0,
            message_shadow: "0 1px 1px rgba(0, 0, 0, 0.1)".into(),
        }
    }
}

fn chat_variables<P>(
    slot: &ComponentSlot<P, ChatVariables>,
    instance: Option<VariablesFn<ChatVariables>>,
    theme: &Theme,
) -> ChatVariables {
    let mut variables = ChatVariables::from_site(&theme.site);
    if let Some(theme_fn) = slot.variables {
        variables = theme_fn(&theme.site, variables);
    }
    if let Some(instance_fn) = instance {
        variables = instance_fn(&theme.site, variables);
    }
    variables
}

// =============================================================================
// Chat
// =============================================================================

#[derive(Default)]
pub struct ChatProps {
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<ChatProps>>,
    pub styles: Option<StyleDef<ChatProps, ChatVariables>>,
    pub variables: Option<VariablesFn<ChatVariables>>,
    pub extra: Attributes,
}

fn chat_root_styles(ctx: &StyleContext<'_, ChatProps, ChatVariables>) -> StyleObject {
    StyleObject::new()
        .with("display", "flex")
        .with("flexDirection", "column")
        .with("listStyle", "none")
        .with("margin", "0")
        .with("padding", px_to_rem(10.0))
        .with("backgroundColor", ctx.variables.background.as_str())
}

pub fn resolve_chat(props: &ChatProps, theme: &Theme) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.chat;
    let behavior = resolve_behavior(
        list_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &literals(&props.extra, &props.role),
    );

    let variables = chat_variables(slot, props.variables, theme);
    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        CHAT_NAME,
        CHAT_PARTS,
        behavior,
        &[(ROOT, chat_root_styles as StyleFn<ChatProps, ChatVariables>)],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

// =============================================================================
// ChatMessage
// =============================================================================

#[derive(Default)]
pub struct ChatMessageProps {
    pub content: String,
    pub author: String,
    pub timestamp: String,
    /// Whether the current user sent this message.
    pub mine: bool,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<ChatMessageProps>>,
    pub styles: Option<StyleDef<ChatMessageProps, ChatVariables>>,
    pub variables: Option<VariablesFn<ChatVariables>>,
    pub extra: Attributes,
}

fn message_root_styles(ctx: &StyleContext<'_, ChatMessageProps, ChatVariables>) -> StyleObject {
    let v = ctx.variables;
    let mut style = StyleObject::new()
        .with("position", "relative")
        .with("padding", px_to_rem(v.message_padding))
        .with("color", v.message_color.as_str())
        .with("maxWidth", v.message_width.as_str())
        .with("borderRadius", px_to_rem(3.0))
        .with("boxShadow", v.message_shadow.as_str());

    if ctx.props.mine {
        style.set("backgroundColor", v.message_mine_background.as_str());
        // Own messages sit on the far edge.
        style.set("marginLeft", "auto");
    } else {
        style.set("backgroundColor", v.message_background.as_str());
    }
    style
}

fn message_content_styles(
    _ctx: &StyleContext<'_, ChatMessageProps, ChatVariables>,
) -> StyleObject {
    StyleObject::new().with("display", "block")
}

pub fn resolve_chat_message(
    props: &ChatMessageProps,
    theme: &Theme,
) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.chat_message;
    let behavior = resolve_behavior(
        default_message_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &literals(&props.extra, &props.role),
    );

    let variables = chat_variables(slot, props.variables, theme);
    let ctx = StyleContext { props, variables: &variables, theme };
    assemble(
        CHAT_MESSAGE_NAME,
        CHAT_MESSAGE_PARTS,
        behavior,
        &[
            (ROOT, message_root_styles as StyleFn<ChatMessageProps, ChatVariables>),
            ("content", message_content_styles as StyleFn<ChatMessageProps, ChatVariables>),
        ],
        slot,
        props.styles.as_ref(),
        &ctx,
    )
}

/// Messages are list items within the chat log.
fn default_message_behavior(_props: &ChatMessageProps) -> crate::behavior::Behavior {
    crate::behavior::Behavior::new()
        .with_attributes(ROOT, Attributes::new().with("role", "listitem"))
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
