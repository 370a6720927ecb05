//! Accessor, parameter and constructor descriptors.
//!
//! These are the only view the engine has of source and target shapes.
//! Accessors are produced fresh for every mapping call and borrow the live
//! source instance; constructors are plain function pointers over
//! [`Arguments`].

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use crate::error::ArgumentError;
use crate::{Arguments, TypeTag, Value};

/// A zero-argument, value-producing member bound to a source instance.
///
/// The callable is `FnOnce`: invoking an accessor consumes its descriptor,
/// so one descriptor can feed at most one constructor parameter.
pub struct AccessorDescriptor<'a> {
    name: Cow<'static, str>,
    value_type: TypeTag,
    invoke: Box<dyn FnOnce() -> Value + 'a>,
}

impl<'a> AccessorDescriptor<'a> {
    /// Describe an accessor whose value type is the closure's return type.
    pub fn new<T, F>(name: impl Into<Cow<'static, str>>, invoke: F) -> Self
    where
        T: Any + Send,
        F: FnOnce() -> T + 'a,
    {
        Self {
            name: name.into(),
            value_type: TypeTag::of::<T>(),
            invoke: Box::new(move || Value::new(invoke())),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value_type(&self) -> TypeTag {
        self.value_type
    }

    pub fn invoke(self) -> Value {
        (self.invoke)()
    }
}

impl fmt::Debug for AccessorDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorDescriptor")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .finish_non_exhaustive()
    }
}

/// A constructor parameter. The name is optional: a shape may choose not to
/// publish the formal names of some constructors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterDescriptor {
    name: Option<Cow<'static, str>>,
    value_type: TypeTag,
}

impl ParameterDescriptor {
    pub fn named(name: impl Into<Cow<'static, str>>, value_type: TypeTag) -> Self {
        Self {
            name: Some(name.into()),
            value_type,
        }
    }

    pub fn unnamed(value_type: TypeTag) -> Self {
        Self {
            name: None,
            value_type,
        }
    }

    /// Shorthand for a named parameter of type `T`.
    pub fn of<T: Any>(name: &'static str) -> Self {
        Self::named(name, TypeTag::of::<T>())
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn value_type(&self) -> TypeTag {
        self.value_type
    }

    /// Display label: the name, or `#position` when the name is unknown.
    pub fn label(&self, position: usize) -> String {
        match &self.name {
            Some(name) => name.to_string(),
            None => format!("#{position}"),
        }
    }
}

/// Glue that builds a `T` from type-checked arguments.
pub type ConstructorFn<T> = fn(&mut Arguments) -> Result<T, ArgumentError>;

/// One way of building a target value.
pub struct ConstructorDescriptor<T> {
    label: &'static str,
    parameters: Vec<ParameterDescriptor>,
    primary: bool,
    invoke: ConstructorFn<T>,
}

impl<T> ConstructorDescriptor<T> {
    pub fn new(
        label: &'static str,
        parameters: Vec<ParameterDescriptor>,
        invoke: ConstructorFn<T>,
    ) -> Self {
        Self {
            label,
            parameters,
            primary: false,
            invoke,
        }
    }

    /// Mark this as the type's primary constructor.
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[inline]
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Build a `T` from exactly [`arity`](Self::arity) values.
    pub fn invoke(&self, values: Vec<Value>) -> Result<T, ArgumentError> {
        let mut args = Arguments::new(values);
        let built = (self.invoke)(&mut args)?;
        args.finish()?;
        Ok(built)
    }
}

impl<T> fmt::Debug for ConstructorDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorDescriptor")
            .field("label", &self.label)
            .field("parameters", &self.parameters)
            .field("primary", &self.primary)
            .finish_non_exhaustive()
    }
}
