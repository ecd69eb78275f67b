//! Render-scoped option derivation.
//!
//! Everything here is rebuilt from the registered member table on
//! every render call and discarded afterwards; nothing is cached
//! across renders.

use enumsel_types::{EnumMember, SelectEnum};
use enumsel_util::labels::LabelStrategy;

use super::config::SelectConfig;

/// One rendered option: the member name, its sort rank, and the
/// visible text. Ephemeral.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    /// The `value` attribute: the member's declared name
    pub value: &'static str,
    /// The member's backing integer value
    pub int_value: i64,
    /// The visible option text
    pub text: String,
}

/// Members of `E` sorted ascending by integer value.
///
/// The sort is stable, so members registered with equal values keep
/// declaration order.
pub fn sorted_members<E: SelectEnum>() -> Vec<EnumMember<E>> {
    let mut members: Vec<EnumMember<E>> = E::members().to_vec();
    members.sort_by_key(|member| member.int_value);
    members
}

/// The human-readable label for one member.
///
/// An explicit display annotation wins verbatim; otherwise the
/// configured strategy transforms the bare name. Always succeeds.
pub fn display_label<E: SelectEnum>(member: &EnumMember<E>, strategy: &dyn LabelStrategy) -> String {
    match member.display_name {
        Some(display) => display.to_string(),
        None => strategy.label(member.name),
    }
}

/// Builds the full option list for one render pass, in sorted order.
pub fn option_entries<E: SelectEnum>(config: &SelectConfig, strategy: &dyn LabelStrategy) -> Vec<OptionEntry> {
    sorted_members::<E>()
        .into_iter()
        .map(|member| {
            let text = if config.empty_text_value == Some(member.int_value) {
                String::new()
            } else if config.show_int_values {
                format!("{} : {}", member.int_value, display_label(&member, strategy))
            } else {
                display_label(&member, strategy)
            };
            OptionEntry {
                value: member.name,
                int_value: member.int_value,
                text,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumsel_types::select_enum;
    use enumsel_util::labels::default_strategy;

    select_enum! {
        pub enum Priority {
            High = 2,
            NotSet = 0,
            Low = 1 => "Take it easy",
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Tied {
        First,
        Second,
        Third,
    }

    select_enum! {
        impl Tied {
            First = 5,
            Second = 0,
            Third = 5,
        }
    }

    #[test]
    fn members_sort_ascending_by_int_value() {
        let order: Vec<_> = sorted_members::<Priority>().iter().map(|m| m.name).collect();
        assert_eq!(order, vec!["NotSet", "Low", "High"]);
    }

    #[test]
    fn equal_int_values_keep_declaration_order() {
        let order: Vec<_> = sorted_members::<Tied>().iter().map(|m| m.name).collect();
        assert_eq!(order, vec!["Second", "First", "Third"]);
    }

    #[test]
    fn entry_count_matches_member_count() {
        let entries = option_entries::<Priority>(&SelectConfig::default(), default_strategy());
        assert_eq!(entries.len(), Priority::members().len());
    }

    #[test]
    fn labels_use_int_prefix_and_decamelized_names() {
        let entries = option_entries::<Priority>(&SelectConfig::default(), default_strategy());
        let texts: Vec<_> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["0 : Not set", "1 : Take it easy", "2 : High"]);
    }

    #[test]
    fn display_annotation_wins_over_decamelization() {
        let member = sorted_members::<Priority>()[1];
        assert_eq!(display_label(&member, default_strategy()), "Take it easy");
    }

    #[test]
    fn int_prefix_can_be_disabled() {
        let config = SelectConfig {
            show_int_values: false,
            ..SelectConfig::default()
        };
        let entries = option_entries::<Priority>(&config, default_strategy());
        let texts: Vec<_> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Not set", "Take it easy", "High"]);
        assert!(texts.iter().all(|text| !text.contains(" : ")));
    }

    #[test]
    fn empty_text_value_blanks_the_matching_option_only() {
        let config = SelectConfig {
            empty_text_value: Some(0),
            ..SelectConfig::default()
        };
        let entries = option_entries::<Priority>(&config, default_strategy());
        assert_eq!(entries[0].value, "NotSet");
        assert_eq!(entries[0].text, "");
        assert_eq!(entries[1].text, "1 : Take it easy");
    }
}
