//! # Label Derivation
//!
//! Human-readable labels for enum member names. The default strategy
//! decamelizes the bare identifier; hosts that need proper
//! localization substitute their own [`LabelStrategy`] without
//! touching the widget.

use heck::ToSnakeCase;

/// Pluggable `name -> label` transform.
///
/// Implementations must be pure: identical input names yield identical
/// labels within one render pass.
pub trait LabelStrategy: Send + Sync {
    /// Derives the visible label for a bare member name.
    fn label(&self, name: &str) -> String;
}

/// Default decamelization heuristic.
///
/// `"FirstOption"` becomes `"First option"`: words are split on case
/// boundaries, joined with spaces, and only the leading word keeps a
/// capital. The exact casing is a presentation heuristic, not a
/// contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decamelize;

impl LabelStrategy for Decamelize {
    fn label(&self, name: &str) -> String {
        decamelize(name)
    }
}

/// Shared instance of the default strategy.
pub fn default_strategy() -> &'static dyn LabelStrategy {
    static DECAMELIZE: Decamelize = Decamelize;
    &DECAMELIZE
}

/// Converts an identifier-style name into spaced, sentence-cased text.
pub fn decamelize(name: &str) -> String {
    let spaced = name.to_snake_case().replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}
