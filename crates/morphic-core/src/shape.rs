//! Introspection capability implemented by mappable shapes.
//!
//! Shapes usually get these impls from `#[derive(Source)]` and
//! `#[morphic::constructors]`, but hand-written impls are equally valid.

use crate::{AccessorDescriptor, ConstructorDescriptor};

/// A shape values can be mapped from.
pub trait Source {
    /// Zero-argument accessors bound to `self`, in declaration order.
    ///
    /// Only data accessors belong here. Trait machinery such as
    /// `PartialEq::eq`, `Hash::hash` or `Debug::fmt` is never described, so
    /// a field that happens to be called `hash` is an ordinary accessor.
    fn describe_accessors(&self) -> Vec<AccessorDescriptor<'_>>;
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn describe_accessors(&self) -> Vec<AccessorDescriptor<'_>> {
        (**self).describe_accessors()
    }
}

/// A shape values can be mapped into.
pub trait Target: Sized + 'static {
    /// Available constructors, in declaration order.
    fn describe_constructors() -> Vec<ConstructorDescriptor<Self>>;
}

/// Declare types with no accessors and no constructors.
///
/// Such shapes only take part in mappings through identity passthrough,
/// e.g. a `String -> String` contract method.
#[macro_export]
macro_rules! opaque_shape {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Source for $ty {
                fn describe_accessors(&self) -> ::std::vec::Vec<$crate::AccessorDescriptor<'_>> {
                    ::std::vec::Vec::new()
                }
            }

            impl $crate::Target for $ty {
                fn describe_constructors() -> ::std::vec::Vec<$crate::ConstructorDescriptor<Self>> {
                    ::std::vec::Vec::new()
                }
            }
        )*
    };
}

opaque_shape!(
    String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    ()
);
