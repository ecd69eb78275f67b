//! Insertion-ordered attribute sets for rendered elements.

use indexmap::IndexMap;

/// Attribute set preserving insertion order.
///
/// Setting an existing name overwrites the value in place, so merged
/// widget-owned attributes keep a deterministic position relative to
/// host passthrough attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttrSet {
    entries: IndexMap<String, String>,
}

impl AttrSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, overwriting any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Copies every attribute of `other` into this set.
    pub fn merge(&mut self, other: &AttrSet) {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for AttrSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = AttrSet::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// Prepends configured extra classes to the widget's own class list.
///
/// Whitespace-only extras are ignored so the rendered `class`
/// attribute never starts with a stray space.
pub fn compound_css_class(additional: Option<&str>, base: &str) -> String {
    match additional {
        Some(extra) if !extra.trim().is_empty() => format!("{} {}", extra.trim(), base),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut attrs = AttrSet::new();
        attrs.set("id", "priority-select");
        attrs.set("data-test", "1");
        attrs.set("class", "custom");
        let names: Vec<_> = attrs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "data-test", "class"]);
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut attrs = AttrSet::new();
        attrs.set("class", "a");
        attrs.set("id", "x");
        attrs.set("class", "b");
        let entries: Vec<_> = attrs.iter().collect();
        assert_eq!(entries, vec![("class", "b"), ("id", "x")]);
    }

    #[test]
    fn merge_unions_both_sets() {
        let mut base: AttrSet = [("id", "s1"), ("class", "host")].into_iter().collect();
        let overlay: AttrSet = [("class", "widget"), ("value", "Red")].into_iter().collect();
        base.merge(&overlay);
        assert_eq!(base.get("id"), Some("s1"));
        assert_eq!(base.get("class"), Some("widget"));
        assert_eq!(base.get("value"), Some("Red"));
        assert_eq!(base.len(), 3);
    }

    #[test]
    fn compound_class_prepends_extras() {
        assert_eq!(compound_css_class(Some("custom-select"), "valid"), "custom-select valid");
        assert_eq!(compound_css_class(Some("a b"), "invalid"), "a b invalid");
    }

    #[test]
    fn compound_class_ignores_blank_extras() {
        assert_eq!(compound_css_class(None, "valid"), "valid");
        assert_eq!(compound_css_class(Some("   "), "valid"), "valid");
    }
}
