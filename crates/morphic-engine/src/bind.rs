//! Argument binding.
//!
//! Parameters are bound in order. For each one:
//! 1. If the signature has field overrides, the parameter's name must be
//!    visible; an override targeting that name picks its accessor.
//! 2. Otherwise a selector pre-bound accessor is used, if still untaken.
//! 3. Otherwise the first untaken accessor of the exact parameter type, and
//!    of the same name when the name is visible.
//!
//! The chosen accessor is removed from the pool and invoked immediately.

use morphic_core::{ConstructorDescriptor, FieldOverride, ParameterDescriptor, Value};

use crate::error::{MapError, Result};
use crate::plan::PlannedAccessor;
use crate::pool::AccessorPool;
use crate::resolve::{Endpoints, ResolvedConstructor};
use crate::trace::{BindRule, Tracer};

/// Argument values in parameter order, with the accessors that produced them.
#[derive(Debug, Default)]
pub struct BoundArguments {
    pub values: Vec<Value>,
    pub accessors: Vec<PlannedAccessor>,
}

impl BoundArguments {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            accessors: Vec::with_capacity(capacity),
        }
    }
}

/// Everything the binder needs besides the pool.
pub struct BindContext<'c, T> {
    pub constructor: &'c ConstructorDescriptor<T>,
    pub resolved: &'c ResolvedConstructor,
    pub overrides: &'c [FieldOverride],
    /// Whether the constructor's parameter names may be used.
    pub names_visible: bool,
    pub endpoints: Endpoints,
}

/// Bind and invoke one accessor per constructor parameter.
pub fn bind_arguments<T>(
    cx: &BindContext<'_, T>,
    pool: &mut AccessorPool<'_>,
    tracer: &mut impl Tracer,
) -> Result<BoundArguments> {
    let parameters = cx.constructor.parameters();
    let mut bound = BoundArguments::with_capacity(parameters.len());

    for (position, parameter) in parameters.iter().enumerate() {
        let name = parameter.name().filter(|_| cx.names_visible);
        let (index, rule) = choose_accessor(cx, pool, position, parameter, name)?;
        let accessor = pool
            .take(index)
            .ok_or_else(|| unbound(cx, position, parameter, name))?;

        tracer.trace_bind(position, name, accessor.name(), rule);
        bound.accessors.push(PlannedAccessor {
            index,
            name: accessor.name().to_string(),
            value_type: accessor.value_type(),
        });
        bound.values.push(accessor.invoke());
    }

    Ok(bound)
}

fn choose_accessor<T>(
    cx: &BindContext<'_, T>,
    pool: &AccessorPool<'_>,
    position: usize,
    parameter: &ParameterDescriptor,
    name: Option<&str>,
) -> Result<(usize, BindRule)> {
    let expected = parameter.value_type();

    if !cx.overrides.is_empty() {
        let Some(name) = name else {
            return Err(MapError::OverrideRequiresParameterNames {
                target: cx.endpoints.target,
                constructor: cx.constructor.label(),
            });
        };
        if let Some(field) = cx.overrides.iter().find(|field| field.targets(name)) {
            return pool
                .position(|accessor| {
                    accessor.value_type() == expected && field.reads(accessor.name())
                })
                .map(|index| (index, BindRule::Override))
                .ok_or_else(|| MapError::OverrideAccessorNotFound {
                    source_name: field.source_name().to_string(),
                    parameter: name.to_string(),
                    expected,
                    source_type: cx.endpoints.source,
                });
        }
    }

    // A prebound accessor may already have been claimed by an override.
    if let Some(index) = cx.resolved.prebound(position) {
        if pool.is_available(index) {
            return Ok((index, BindRule::Selector));
        }
    }

    pool.position(|accessor| {
        accessor.value_type() == expected && name.is_none_or(|name| name == accessor.name())
    })
    .map(|index| (index, BindRule::Matched))
    .ok_or_else(|| unbound(cx, position, parameter, name))
}

fn unbound<T>(
    cx: &BindContext<'_, T>,
    position: usize,
    parameter: &ParameterDescriptor,
    name: Option<&str>,
) -> MapError {
    MapError::UnboundParameter {
        target: cx.endpoints.target,
        constructor: cx.constructor.label(),
        parameter: name.map_or_else(|| format!("#{position}"), str::to_string),
        expected: parameter.value_type(),
    }
}
