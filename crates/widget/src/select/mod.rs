//! The enum select component and its render-scoped option model.

mod config;
mod options;
mod select_component;

pub use config::SelectConfig;
pub use options::{OptionEntry, display_label, option_entries, sorted_members};
pub use select_component::EnumSelect;
