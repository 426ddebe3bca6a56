//! Grid component.
//!
//! `rows` and `columns` accept either a track count - rendered as
//! `repeat(n, 1fr)` - or a raw CSS template string. With neither given,
//! the column count falls back to the `default_column_count` variable.

use crate::behavior::{default_behavior, resolve_behavior, root_literals, BehaviorFn, PartLiterals};
use crate::error::ResolveError;
use crate::resolve::{assemble, ComponentRender};
use crate::style::{StyleContext, StyleDef, StyleFn, StyleObject};
use crate::theme::{SiteVariables, Theme, VariablesFn};
use crate::types::{Attributes, PartName, ROOT};

pub const NAME: &str = "Grid";
pub const PARTS: &[PartName] = &[ROOT];

// =============================================================================
// Templates
// =============================================================================

/// A grid track template: a count or a raw CSS value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridTemplate {
    /// `repeat(n, 1fr)`.
    Count(u32),
    /// Used verbatim, e.g. `"repeat(3, minmax(0, 1fr))"` or `"1fr 2fr"`.
    Template(String),
}

impl GridTemplate {
    /// The CSS value this template renders to.
    pub fn css_value(&self) -> String {
        match self {
            Self::Count(n) => format!("repeat({n}, 1fr)"),
            Self::Template(raw) => raw.clone(),
        }
    }
}

impl From<u32> for GridTemplate {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl From<&str> for GridTemplate {
    fn from(raw: &str) -> Self {
        Self::Template(raw.to_string())
    }
}

// =============================================================================
// Props
// =============================================================================

#[derive(Default)]
pub struct GridProps {
    pub rows: Option<GridTemplate>,
    pub columns: Option<GridTemplate>,
    pub role: Option<String>,
    pub accessibility: Option<BehaviorFn<GridProps>>,
    pub styles: Option<StyleDef<GridProps, GridVariables>>,
    pub variables: Option<VariablesFn<GridVariables>>,
    pub extra: Attributes,
}

// =============================================================================
// Variables
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct GridVariables {
    pub height: String,
    pub width: String,
    pub default_column_count: u32,
    pub grid_gap: String,
    pub padding: String,
}

impl GridVariables {
    pub fn from_site(_site: &SiteVariables) -> Self {
        Self {
            height: "100%".into(),
            width: "100%".into(),
            default_column_count: 5,
            grid_gap: "0".into(),
            padding: "0".into(),
        }
    }
}

// =============================================================================
// Styles
// =============================================================================

fn root_styles(ctx: &StyleContext<'_, GridProps, GridVariables>) -> StyleObject {
    let p = ctx.props;
    let v = ctx.variables;

    let mut style = StyleObject::new()
        .with("height", v.height.as_str())
        .with("width", v.width.as_str())
        .with("padding", v.padding.as_str())
        .with("gridGap", v.grid_gap.as_str())
        .with("display", "grid")
        .with("justifyContent", "space-evenly");

    // Explicit rows without columns flow items down the columns.
    if p.rows.is_some() && p.columns.is_none() {
        style.set("gridAutoFlow", "column");
    }
    if let Some(rows) = &p.rows {
        style.set("gridTemplateRows", rows.css_value());
    }

    let columns = match (&p.columns, &p.rows) {
        (Some(columns), _) => Some(columns.css_value()),
        (None, None) => Some(GridTemplate::Count(v.default_column_count).css_value()),
        (None, Some(_)) => None,
    };
    if let Some(columns) = columns {
        style.set("gridTemplateColumns", columns);
    }

    style
}

// =============================================================================
// Resolution
// =============================================================================

fn literals(props: &GridProps) -> PartLiterals {
    let mut root = props.extra.clone();
    if let Some(role) = &props.role {
        root.set("role", role.as_str());
    }
    root_literals(root)
}

pub fn resolve(props: &GridProps, theme: &Theme) -> Result<ComponentRender, ResolveError> {
    let slot = &theme.components.grid;
    let behavior = resolve_behavior(
        default_behavior,
        props.accessibility.or(slot.behavior),
        props,
        &literals(props),
    );

    let mut variables = GridVariables::from_site(&theme.site);
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
        &[(ROOT, root_styles as StyleFn<GridProps, GridVariables>)],
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

    fn styled(props: GridProps) -> StyleObject {
        let theme = presets::light();
        resolve(&props, &theme).unwrap().root().style.clone()
    }

    #[test]
    fn test_count_renders_repeat() {
        assert_eq!(GridTemplate::Count(3).css_value(), "repeat(3, 1fr)");
    }

    #[test]
    fn test_raw_template_used_verbatim() {
        assert_eq!(GridTemplate::from("1fr 2fr").css_value(), "1fr 2fr");
    }

    #[test]
    fn test_default_column_count_applies() {
        let style = styled(GridProps::default());
        assert_eq!(style.get_str("gridTemplateColumns"), Some("repeat(5, 1fr)"));
        assert_eq!(style.get("gridTemplateRows"), None);
    }

    #[test]
    fn test_rows_without_columns_flows_column_wise() {
        let style = styled(GridProps { rows: Some(2.into()), ..Default::default() });
        assert_eq!(style.get_str("gridAutoFlow"), Some("column"));
        assert_eq!(style.get_str("gridTemplateRows"), Some("repeat(2, 1fr)"));
        assert_eq!(style.get("gridTemplateColumns"), None);
    }

    #[test]
    fn test_rows_and_columns_both_set() {
        let style = styled(GridProps {
            rows: Some(2.into()),
            columns: Some("1fr 2fr".into()),
            ..Default::default()
        });
        assert_eq!(style.get("gridAutoFlow"), None);
        assert_eq!(style.get_str("gridTemplateColumns"), Some("1fr 2fr"));
    }

    #[test]
    fn test_theme_variable_override_changes_default_count() {
        let mut theme = presets::light();
        theme.components.grid.variables = Some(|_site, mut vars| {
            vars.default_column_count = 3;
            vars
        });
        let rendered = resolve(&GridProps::default(), &theme).unwrap();
        assert_eq!(
            rendered.root().style.get_str("gridTemplateColumns"),
            Some("repeat(3, 1fr)")
        );
    }
}
