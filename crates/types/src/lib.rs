//! Shared value-model types for enum-backed select controls.
//!
//! An enum participates in a select binding by registering a member
//! table: one [`EnumMember`] row per variant carrying the declared
//! name, the backing integer value, and an optional display
//! annotation. The [`select_enum!`] macro builds that table at compile
//! time, replacing the runtime reflection a dynamic UI framework
//! would use.

pub mod error;
mod select_enum_macro;

pub use error::SelectError;

/// One registration-time metadata row describing an enum member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumMember<T: 'static> {
    /// The typed member value
    pub value: T,
    /// The member's declared identifier, used as the option `value`
    pub name: &'static str,
    /// The backing integer value; sorted ascending when rendering.
    ///
    /// Widened to `i64` so enums backed by wide integer types order
    /// correctly at the extremes.
    pub int_value: i64,
    /// Optional display annotation overriding the derived label
    pub display_name: Option<&'static str>,
}

/// Metadata surface of a registered select enum.
///
/// Implementations come from [`select_enum!`]; the provided lookup
/// helpers all run against the registered member table.
pub trait SelectEnum: Copy + PartialEq + Sized + 'static {
    /// All members, in declaration order.
    fn members() -> &'static [EnumMember<Self>];

    /// Metadata row for this member, if registered.
    fn member_of(self) -> Option<&'static EnumMember<Self>> {
        Self::members().iter().find(|member| member.value == self)
    }

    /// The member's declared identifier.
    ///
    /// Members registered through [`select_enum!`] always resolve; an
    /// unregistered value yields the empty string.
    fn name(self) -> &'static str {
        self.member_of().map(|member| member.name).unwrap_or_default()
    }

    /// The member's backing integer value, if registered.
    fn int_value(self) -> Option<i64> {
        self.member_of().map(|member| member.int_value)
    }

    /// Looks a member up by its declared identifier.
    fn from_name(name: &str) -> Option<Self> {
        Self::members()
            .iter()
            .find(|member| member.name == name)
            .map(|member| member.value)
    }

    /// Looks a member up by its backing integer value.
    ///
    /// When several members share a value, the first declared wins.
    fn from_int(value: i64) -> Option<Self> {
        Self::members()
            .iter()
            .find(|member| member.int_value == value)
            .map(|member| member.value)
    }
}

/// Bound-value model connecting a form value type to its underlying
/// enum.
///
/// Implemented by [`select_enum!`] for the enum itself (required
/// binding) and blanket-implemented for `Option<E>` (optional binding
/// with an explicit no-value state). The optional wrapper is unwrapped
/// at the type level: `Self::Enum` is always the discrete enum type.
pub trait SelectValue: Sized + 'static {
    /// The effective enum type behind the binding.
    type Enum: SelectEnum;

    /// Whether the binding admits an explicit no-value state.
    const OPTIONAL: bool;

    /// Wraps a selected member into the bound value.
    fn from_member(member: Self::Enum) -> Self;

    /// The no-value result, present only for optional bindings.
    fn empty() -> Option<Self>;

    /// The currently selected member, if any.
    fn as_member(&self) -> Option<Self::Enum>;
}

impl<E: SelectEnum + 'static> SelectValue for Option<E> {
    type Enum = E;

    const OPTIONAL: bool = true;

    fn from_member(member: E) -> Self {
        Some(member)
    }

    fn empty() -> Option<Self> {
        Some(None)
    }

    fn as_member(&self) -> Option<E> {
        *self
    }
}
