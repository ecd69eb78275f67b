use std::marker::PhantomData;

use enumsel_types::{SelectEnum, SelectError, SelectValue};
use enumsel_util::attrs::compound_css_class;
use enumsel_util::labels::{LabelStrategy, default_strategy};
use tracing::{debug, warn};

use super::config::SelectConfig;
use super::options::option_entries;
use crate::binding::InputBinding;
use crate::render::RenderSink;

/// Select control bound to a strongly typed enum form value.
///
/// `V` is the bound value type: either a registered enum for a
/// required binding or `Option<Enum>` for an optional one. The widget
/// itself is stateless across interactions; the bound value and its
/// validation message live in the host's [`InputBinding`].
pub struct EnumSelect<V: SelectValue> {
    config: SelectConfig,
    strategy: &'static dyn LabelStrategy,
    _value: PhantomData<V>,
}

impl<V: SelectValue> Default for EnumSelect<V> {
    fn default() -> Self {
        Self::new(SelectConfig::default())
    }
}

impl<V: SelectValue> EnumSelect<V> {
    pub fn new(config: SelectConfig) -> Self {
        Self {
            config,
            strategy: default_strategy(),
            _value: PhantomData,
        }
    }

    /// Substitutes the label strategy, e.g. for localized labels.
    pub fn with_label_strategy(mut self, strategy: &'static dyn LabelStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Emits the `select`/`option` tree for the current binding state.
    ///
    /// Pure with respect to its inputs: identical binding state and
    /// configuration produce identical sink calls. The option list is
    /// derived from scratch on every call.
    pub fn render<B, S>(&self, binding: &B, sink: &mut S)
    where
        B: InputBinding<V>,
        S: RenderSink + ?Sized,
    {
        let entries = option_entries::<V::Enum>(&self.config, self.strategy);
        debug!(
            field = binding.field_name(),
            options = entries.len(),
            "rendering enum select"
        );

        sink.open_element("select");
        let mut attrs = binding.passthrough_attrs().clone();
        attrs.set(
            "class",
            compound_css_class(self.config.additional_css_classes.as_deref(), binding.css_class()),
        );
        attrs.set("value", binding.value_as_text());
        for (name, value) in attrs.iter() {
            sink.attribute(name, value);
        }
        sink.listener("change");

        for entry in &entries {
            sink.open_element("option");
            sink.attribute("value", entry.value);
            sink.content(&entry.text);
            sink.close_element();
        }

        sink.close_element();
    }

    /// Converts selected text back into the bound value.
    ///
    /// Generic conversion first (member name, then the integer value's
    /// string form); failing that, empty text on an optional binding
    /// yields the no-value result. Anything else is an invalid
    /// selection carrying the field name.
    pub fn parse_value(&self, text: &str, field: &str) -> Result<V, SelectError> {
        if let Some(member) = Self::convert(text) {
            return Ok(V::from_member(member));
        }

        if text.is_empty()
            && let Some(empty) = V::empty()
        {
            return Ok(empty);
        }

        Err(SelectError::InvalidSelection {
            field: field.to_string(),
        })
    }

    /// Change-event entry point.
    ///
    /// Parses the selected text and either stores the value and clears
    /// the field's validation message, or leaves the value untouched
    /// and sets the message. Never panics; the failure stays in-band.
    pub fn handle_change<B: InputBinding<V>>(&self, binding: &mut B, text: &str) {
        match self.parse_value(text, binding.field_name()) {
            Ok(value) => {
                binding.set_value(value);
                binding.set_validation_message(None);
                debug!(field = binding.field_name(), selected = text, "selection applied");
            }
            Err(error) => {
                warn!(field = binding.field_name(), input = text, "invalid selection");
                binding.set_validation_message(Some(error.to_string()));
            }
        }
    }

    // Member name first, then the integer value's string form. Empty
    // text never matches a member.
    fn convert(text: &str) -> Option<V::Enum> {
        if text.is_empty() {
            return None;
        }
        if let Some(member) = V::Enum::from_name(text) {
            return Some(member);
        }
        text.parse::<i64>().ok().and_then(V::Enum::from_int)
    }
}
