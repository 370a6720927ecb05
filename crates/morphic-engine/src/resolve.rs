//! Constructor resolution.
//!
//! Two modes:
//! - **Selector-driven**: each selector name claims a distinct accessor, in
//!   order; the constructor must have exactly as many parameters as the
//!   selector has names, with positionally equal types. Among several such
//!   constructors the first declared wins.
//! - **Type-driven**: every constructor with no more parameters than the pool
//!   has accessors is tried in declaration order. A trial claims, for each
//!   parameter, the first unclaimed accessor of exactly the parameter's type.
//!   Which satisfied constructor wins is decided by the [`AmbiguityPolicy`].

use morphic_core::{ConstructorDescriptor, ConstructorSelector, TypeTag};

use crate::error::{MapError, Result};
use crate::options::{AmbiguityPolicy, EngineOptions};
use crate::pool::AccessorPool;
use crate::trace::Tracer;

/// Source and target types of the call being resolved, for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub source: TypeTag,
    pub target: TypeTag,
}

impl Endpoints {
    pub(crate) fn no_matching_constructor(self) -> MapError {
        MapError::NoMatchingConstructor {
            source_type: self.source,
            target: self.target,
        }
    }
}

/// Outcome of resolution: which constructor, and for selector-driven
/// resolution, the accessor index pre-bound to each parameter position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConstructor {
    index: usize,
    prebound: Option<Vec<usize>>,
}

impl ResolvedConstructor {
    /// Index into the target's constructor list.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Accessor pre-bound to parameter `position` by a selector.
    pub fn prebound(&self, position: usize) -> Option<usize> {
        self.prebound.as_ref()?.get(position).copied()
    }

    pub fn is_selector_driven(&self) -> bool {
        self.prebound.is_some()
    }
}

/// Pick the constructor to invoke.
pub fn resolve_constructor<T>(
    constructors: &[ConstructorDescriptor<T>],
    pool: &AccessorPool<'_>,
    selector: Option<&ConstructorSelector>,
    options: &EngineOptions,
    endpoints: Endpoints,
    tracer: &mut impl Tracer,
) -> Result<ResolvedConstructor> {
    let resolved = match selector {
        Some(selector) => resolve_by_selector(constructors, pool, selector, endpoints, tracer)?,
        None => resolve_by_types(constructors, pool, options.ambiguity, endpoints, tracer)?,
    };
    let constructor = &constructors[resolved.index];
    tracer.trace_constructor(constructor.label(), constructor.arity());
    Ok(resolved)
}

fn resolve_by_selector<T>(
    constructors: &[ConstructorDescriptor<T>],
    pool: &AccessorPool<'_>,
    selector: &ConstructorSelector,
    endpoints: Endpoints,
    tracer: &mut impl Tracer,
) -> Result<ResolvedConstructor> {
    let mut claimed = vec![false; pool.capacity()];
    let mut bindings = Vec::with_capacity(selector.len());

    for name in selector.names() {
        let found = pool
            .iter()
            .find(|(index, accessor)| !claimed[*index] && selector.matches(name, accessor.name()));
        let Some((index, accessor)) = found else {
            return Err(MapError::UnresolvedAccessorName {
                name: name.clone(),
                source_type: endpoints.source,
            });
        };
        tracer.trace_selector(name, accessor.name());
        claimed[index] = true;
        bindings.push(index);
    }

    let selected_types: Vec<TypeTag> = bindings
        .iter()
        .filter_map(|&index| pool.get(index).map(|accessor| accessor.value_type()))
        .collect();

    let index = constructors
        .iter()
        .position(|constructor| {
            constructor.arity() == selected_types.len()
                && constructor
                    .parameters()
                    .iter()
                    .zip(&selected_types)
                    .all(|(parameter, &value_type)| parameter.value_type() == value_type)
        })
        .ok_or_else(|| endpoints.no_matching_constructor())?;

    Ok(ResolvedConstructor {
        index,
        prebound: Some(bindings),
    })
}

fn resolve_by_types<T>(
    constructors: &[ConstructorDescriptor<T>],
    pool: &AccessorPool<'_>,
    policy: AmbiguityPolicy,
    endpoints: Endpoints,
    tracer: &mut impl Tracer,
) -> Result<ResolvedConstructor> {
    let mut satisfied = Vec::new();

    for (index, constructor) in constructors.iter().enumerate() {
        if constructor.arity() > pool.len() {
            continue;
        }
        let ok = covers_parameters(constructor, pool);
        tracer.trace_trial(constructor.label(), ok);
        if !ok {
            continue;
        }
        if policy == AmbiguityPolicy::FirstDeclared {
            return Ok(ResolvedConstructor {
                index,
                prebound: None,
            });
        }
        satisfied.push(index);
    }

    let index = match policy {
        AmbiguityPolicy::FirstDeclared => None,
        // `max_by_key` keeps the last maximum; iterate in reverse so the
        // first declared constructor wins ties.
        AmbiguityPolicy::MostParameters => satisfied
            .iter()
            .rev()
            .copied()
            .max_by_key(|&index| constructors[index].arity()),
        AmbiguityPolicy::Reject => match satisfied.as_slice() {
            [] => None,
            [index] => Some(*index),
            _ => {
                return Err(MapError::AmbiguousConstructor {
                    source_type: endpoints.source,
                    target: endpoints.target,
                    candidates: satisfied
                        .iter()
                        .map(|&index| constructors[index].label())
                        .collect(),
                });
            }
        },
    };

    index
        .map(|index| ResolvedConstructor {
            index,
            prebound: None,
        })
        .ok_or_else(|| endpoints.no_matching_constructor())
}

/// Whether every parameter can claim a distinct accessor of its exact type.
fn covers_parameters<T>(constructor: &ConstructorDescriptor<T>, pool: &AccessorPool<'_>) -> bool {
    let mut claimed = vec![false; pool.capacity()];
    constructor.parameters().iter().all(|parameter| {
        let found = pool.iter().find(|(index, accessor)| {
            !claimed[*index] && accessor.value_type() == parameter.value_type()
        });
        match found {
            Some((index, _)) => {
                claimed[index] = true;
                true
            }
            None => false,
        }
    })
}
