//! Component contracts.
//!
//! Each module owns one component family: its props, its typed
//! variables, its default part styles and its `resolve` entry point.
//! Every resolver is a pure function of `(props, theme)`.

pub mod accordion;
pub mod avatar;
pub mod button;
pub mod chat;
pub mod grid;
pub mod list;
pub mod menu;
pub mod text;
