//! Select control whose options are derived from a registered enum.
//!
//! The widget reads the host-owned bound value through an
//! [`InputBinding`], emits its `select`/`option` tree through a
//! [`RenderSink`], and feeds selection changes back through
//! [`EnumSelect::handle_change`]. Everything it derives is
//! render-scoped; the only durable state is the configuration.

pub mod binding;
pub mod render;
pub mod select;

pub use binding::{FormBinding, InputBinding};
pub use render::{HtmlSink, RenderSink};
pub use select::{EnumSelect, OptionEntry, SelectConfig};
