//! Label derivation and attribute helpers shared by the widget crates.

pub mod attrs;
pub mod labels;
