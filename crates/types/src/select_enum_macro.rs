//! Declarative registration of an enum's select metadata.

/// Registers an enum's member table for select bindings.
///
/// The declaring form defines the enum and its table in one place; the
/// discriminants double as the backing integer values:
///
/// ```ignore
/// select_enum! {
///     pub enum Color {
///         Red = 0,
///         Green = 1 => "Go",
///         Blue = 2,
///     }
/// }
/// ```
///
/// The `impl` form registers a table for an already-declared enum.
/// Because the table's integer values are metadata rather than Rust
/// discriminants, members may share a value there (aliases); rendering
/// keeps declaration order for such ties.
///
/// ```ignore
/// select_enum! {
///     impl Severity {
///         Info = 0,
///         Warning = 10 => "Needs attention",
///     }
/// }
/// ```
///
/// Both forms also implement [`SelectValue`](crate::SelectValue) for
/// the enum itself; the `Option<E>` implementation is blanket-provided.
#[macro_export]
macro_rules! select_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $member:ident = $int:expr $(=> $display:literal)? ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        $vis enum $name {
            $( $member = $int ),+
        }

        $crate::select_enum! {
            impl $name {
                $( $member = $int $(=> $display)? ),+
            }
        }
    };
    (
        impl $name:ident {
            $( $member:ident = $int:expr $(=> $display:literal)? ),+ $(,)?
        }
    ) => {
        impl $crate::SelectEnum for $name {
            fn members() -> &'static [$crate::EnumMember<Self>] {
                const MEMBERS: &[$crate::EnumMember<$name>] = &[
                    $(
                        $crate::EnumMember {
                            value: $name::$member,
                            name: stringify!($member),
                            int_value: $int,
                            display_name: $crate::select_enum!(@display $($display)?),
                        }
                    ),+
                ];
                MEMBERS
            }
        }

        impl $crate::SelectValue for $name {
            type Enum = $name;

            const OPTIONAL: bool = false;

            fn from_member(member: Self::Enum) -> Self {
                member
            }

            fn empty() -> Option<Self> {
                None
            }

            fn as_member(&self) -> Option<Self::Enum> {
                Some(*self)
            }
        }
    };
    (@display $display:literal) => {
        Some($display)
    };
    (@display) => {
        None
    };
}
