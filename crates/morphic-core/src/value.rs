//! Type-erased values flowing from accessors into constructors.

use std::any::Any;
use std::fmt;

use crate::TypeTag;
use crate::error::ArgumentError;

/// A value produced by an accessor, tagged with its exact type.
pub struct Value {
    tag: TypeTag,
    inner: Box<dyn Any + Send>,
}

impl Value {
    pub fn new<T: Any + Send>(value: T) -> Self {
        Self {
            tag: TypeTag::of::<T>(),
            inner: Box::new(value),
        }
    }

    #[inline]
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.tag.is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Recover the concrete value, or get `self` back on a type mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Value> {
        let tag = self.tag;
        match self.inner.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(inner) => Err(Value { tag, inner }),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({})", self.tag)
    }
}

/// Ordered constructor arguments, consumed front to back.
///
/// Generated constructor glue calls [`take`](Self::take) once per parameter
/// in declaration order.
#[derive(Debug)]
pub struct Arguments {
    values: std::vec::IntoIter<Value>,
    position: usize,
}

impl Arguments {
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            values: values.into_iter(),
            position: 0,
        }
    }

    /// Number of arguments not yet taken.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Take the next argument as a `T`.
    pub fn take<T: Any>(&mut self) -> Result<T, ArgumentError> {
        let position = self.position;
        let expected = TypeTag::of::<T>();
        let value = self
            .values
            .next()
            .ok_or(ArgumentError::Missing { position, expected })?;
        self.position += 1;
        value.downcast::<T>().map_err(|value| ArgumentError::TypeMismatch {
            position,
            expected,
            found: value.type_tag(),
        })
    }

    /// Ensure every argument was consumed.
    pub fn finish(self) -> Result<(), ArgumentError> {
        match self.values.len() {
            0 => Ok(()),
            count => Err(ArgumentError::Surplus { count }),
        }
    }
}
