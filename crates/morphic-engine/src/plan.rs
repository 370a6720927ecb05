//! Cached resolution plans.
//!
//! Resolution depends only on the signature, the target's constructors and
//! the names and types of the enumerated accessors, never on field values.
//! A successful resolution is recorded as a plan (constructor index plus
//! accessor index per parameter) together with the accessor layout it was
//! resolved against, and replayed only for pools with that same layout.
//! Replay still enumerates and invokes accessors on every call.

use dashmap::DashMap;
use morphic_core::{ConstructorDescriptor, TypeTag, Value};

use crate::pool::AccessorPool;
use crate::trace::{BindRule, Tracer};

/// Accessor chosen for one parameter position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedAccessor {
    /// Enumeration index in the source's accessor list.
    pub index: usize,
    pub name: String,
    pub value_type: TypeTag,
}

/// Names and types of every enumerated accessor, in enumeration order.
pub type AccessorLayout = Vec<(Box<str>, TypeTag)>;

/// Replayable outcome of one successful resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionPlan {
    constructor: usize,
    accessors: Vec<PlannedAccessor>,
    layout: AccessorLayout,
}

impl ResolutionPlan {
    /// `layout` is the pool layout the plan was resolved against, taken
    /// before any accessor was bound.
    pub fn new(constructor: usize, accessors: Vec<PlannedAccessor>, layout: AccessorLayout) -> Self {
        Self {
            constructor,
            accessors,
            layout,
        }
    }

    /// Index into the target's constructor list.
    pub fn constructor(&self) -> usize {
        self.constructor
    }

    pub fn accessors(&self) -> &[PlannedAccessor] {
        &self.accessors
    }

    pub fn layout(&self) -> &[(Box<str>, TypeTag)] {
        &self.layout
    }

    /// Whether the plan still lines up with these constructors and accessors.
    ///
    /// Hand-written sources may describe different accessors per instance.
    /// Fresh resolution over a different layout can pick a different
    /// constructor, so the whole untouched pool must match the recorded
    /// layout, not only the planned slots.
    pub fn fits<T>(&self, constructors: &[ConstructorDescriptor<T>], pool: &AccessorPool<'_>) -> bool {
        let Some(constructor) = constructors.get(self.constructor) else {
            return false;
        };
        pool.has_layout(&self.layout)
            && constructor.arity() == self.accessors.len()
            && constructor
                .parameters()
                .iter()
                .zip(&self.accessors)
                .all(|(parameter, planned)| parameter.value_type() == planned.value_type)
            && self.accessors.iter().all(|planned| {
                pool.get(planned.index).is_some_and(|accessor| {
                    accessor.name() == planned.name && accessor.value_type() == planned.value_type
                })
            })
    }

    /// Invoke the planned accessors in parameter order.
    ///
    /// Call only after [`fits`](Self::fits) returned true for this pool.
    pub fn replay(
        &self,
        pool: &mut AccessorPool<'_>,
        tracer: &mut impl Tracer,
    ) -> Option<Vec<Value>> {
        let mut values = Vec::with_capacity(self.accessors.len());
        for (position, planned) in self.accessors.iter().enumerate() {
            let accessor = pool.take(planned.index)?;
            tracer.trace_bind(position, None, accessor.name(), BindRule::Planned);
            values.push(accessor.invoke());
        }
        Some(values)
    }
}

/// Cache key: mapping method plus the call's source and target types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlanKey {
    method: Box<str>,
    source: TypeTag,
    target: TypeTag,
}

impl PlanKey {
    pub fn new(method: &str, source: TypeTag, target: TypeTag) -> Self {
        Self {
            method: method.into(),
            source,
            target,
        }
    }
}

/// Concurrent map of resolution plans.
#[derive(Debug, Default)]
pub struct PlanCache {
    plans: DashMap<PlanKey, ResolutionPlan>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the cached plan, so no shard lock is held while accessors
    /// and constructors run.
    pub fn get(&self, key: &PlanKey) -> Option<ResolutionPlan> {
        self.plans.get(key).map(|plan| plan.clone())
    }

    pub fn insert(&self, key: PlanKey, plan: ResolutionPlan) {
        self.plans.insert(key, plan);
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn clear(&self) {
        self.plans.clear();
    }
}
