// ---------------------------------------------------------------------------
// Feature-gate helper macros.
//
// `validus_event!` forwards to `tracing` when the `tracing` feature is enabled on
// this crate and compiles to nothing otherwise, so call sites need no cfgs.
// ---------------------------------------------------------------------------

/// Emit a `tracing` event at the given level.
#[cfg(feature = "tracing")]
#[doc(hidden)]
#[macro_export]
macro_rules! validus_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

/// No-op: `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! validus_event {
    ($level:ident, $($arg:tt)+) => {};
}

/// Let every description shorthand double as a fixed tuple member and as a
/// required object property.
macro_rules! impl_description_members {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for $crate::collections::TupleMember {
                fn from(description: $t) -> Self {
                    $crate::collections::TupleMember::fixed(description)
                }
            }

            impl From<$t> for $crate::object::Property {
                fn from(description: $t) -> Self {
                    $crate::object::Property::new(description)
                }
            }
        )+
    };
}

/// Make builders usable wherever a [`Description`](crate::Description) is
/// expected.
macro_rules! impl_into_description {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for $crate::description::Description {
                fn from(builder: $t) -> Self {
                    $crate::description::Description::Declared(::std::sync::Arc::new(builder))
                }
            }
        )+
        $crate::macros::impl_description_members!($($t),+);
    };
}

pub(crate) use impl_description_members;
pub(crate) use impl_into_description;
