//! Validation errors surfaced through a field's message channel.

use thiserror::Error;

/// The single failure a select binding can produce.
///
/// Reported in-band as a per-field validation message; never fatal to
/// the surrounding form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The selected text could not be converted to the bound enum type
    /// and was not an acceptable empty case for an optional binding.
    #[error("The {field} field is not valid.")]
    InvalidSelection {
        /// The bound field's identifier
        field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_selection_message_names_the_field() {
        let error = SelectError::InvalidSelection {
            field: "priority".to_string(),
        };
        assert_eq!(error.to_string(), "The priority field is not valid.");
    }
}
