//! Options shown in a combobox dropdown.

use serde::{Deserialize, Serialize};

/// Opaque display glyph rendered in front of an option label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single selectable entry.
///
/// Identity is by `value`. Options are read-only once handed to the widget;
/// duplicate values are not validated.
///
/// # Example
///
/// ```ignore
/// let options = vec![
///     ComboOption::new("us", "United States").icon("🇺🇸"),
///     ComboOption::new("uk", "United Kingdom"),
///     ComboOption::new("fr", "France").disabled(),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboOption {
    /// Identifier reported through `on_value_change`.
    pub value: String,
    /// Display text, also the text the search filters on.
    pub label: String,
    /// Disabled options are visible but can't be highlighted or selected.
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl ComboOption {
    /// Create an enabled option without an icon.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            icon: None,
        }
    }

    /// Mark this option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Attach an icon glyph.
    pub fn icon(mut self, glyph: impl Into<String>) -> Self {
        self.icon = Some(Icon::new(glyph));
        self
    }

    /// Check whether the label contains an already lower-cased query.
    pub(crate) fn label_contains(&self, query_lower: &str) -> bool {
        self.label.to_lowercase().contains(query_lower)
    }
}

impl<V, L> From<(V, L)> for ComboOption
where
    V: Into<String>,
    L: Into<String>,
{
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}
