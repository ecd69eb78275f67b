use serde::{Deserialize, Serialize};

/// Rendering configuration for an enum select control.
///
/// Set once per usage; everything else the widget derives is
/// recomputed on every render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectConfig {
    /// Prefix each option's label with `"<int> : "`.
    #[serde(default = "default_show_int_values")]
    pub show_int_values: bool,

    /// Render empty visible text for the member whose integer value
    /// matches; the option's `value` attribute is kept.
    #[serde(default)]
    pub empty_text_value: Option<i64>,

    /// Extra CSS classes prepended to the widget's own class list.
    #[serde(default)]
    pub additional_css_classes: Option<String>,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            show_int_values: true,
            empty_text_value: None,
            additional_css_classes: None,
        }
    }
}

fn default_show_int_values() -> bool {
    true
}
