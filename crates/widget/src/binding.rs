//! Input-binding contract and an in-memory reference implementation.

use enumsel_types::{SelectEnum, SelectValue};
use enumsel_util::attrs::AttrSet;

/// Host-owned bound value and validation channel for one form field.
///
/// The widget only reads through this trait during rendering and
/// writes through it when a selection change is handled; ownership of
/// the value stays with the host's form layer.
pub trait InputBinding<V: SelectValue> {
    /// The current bound value.
    fn value(&self) -> &V;

    /// Stores a newly parsed value.
    fn set_value(&mut self, value: V);

    /// The bound field's identifier, used in validation messages.
    fn field_name(&self) -> &str;

    /// Host-supplied attributes splatted onto the rendered element.
    fn passthrough_attrs(&self) -> &AttrSet;

    /// The current per-field validation message, if any.
    fn validation_message(&self) -> Option<&str>;

    /// Replaces the per-field validation message.
    fn set_validation_message(&mut self, message: Option<String>);

    /// Widget-facing CSS class reflecting validation state.
    fn css_class(&self) -> &'static str {
        if self.validation_message().is_some() {
            "invalid"
        } else {
            "valid"
        }
    }

    /// The current value formatted for the `value` attribute.
    ///
    /// An optional binding with no value formats as the empty string.
    fn value_as_text(&self) -> &'static str {
        match self.value().as_member() {
            Some(member) => member.name(),
            None => "",
        }
    }
}

/// In-memory binding used by tests and simple hosts.
#[derive(Clone, Debug)]
pub struct FormBinding<V> {
    value: V,
    field_name: String,
    attrs: AttrSet,
    validation_message: Option<String>,
}

impl<V: SelectValue> FormBinding<V> {
    pub fn new(field_name: impl Into<String>, value: V) -> Self {
        Self {
            value,
            field_name: field_name.into(),
            attrs: AttrSet::new(),
            validation_message: None,
        }
    }

    /// Adds a passthrough attribute, builder style.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }
}

impl<V: SelectValue> InputBinding<V> for FormBinding<V> {
    fn value(&self) -> &V {
        &self.value
    }

    fn set_value(&mut self, value: V) {
        self.value = value;
    }

    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn passthrough_attrs(&self) -> &AttrSet {
        &self.attrs
    }

    fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    fn set_validation_message(&mut self, message: Option<String>) {
        self.validation_message = message;
    }
}
