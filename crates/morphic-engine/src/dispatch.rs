//! The mapping entry point.
//!
//! A [`Mapper`] owns one contract and runs every call through the same
//! pipeline: signature lookup, identity passthrough, accessor enumeration,
//! constructor resolution (or plan replay), argument binding, construction.

use std::any::Any;

use morphic_core::{ConstructorDescriptor, MappingContract, MappingSignature, Source, Target, TypeTag, Value};

use crate::bind::{BindContext, bind_arguments};
use crate::error::{MapError, Result};
use crate::options::EngineOptions;
use crate::plan::{PlanCache, PlanKey, ResolutionPlan};
use crate::pool::AccessorPool;
use crate::resolve::{Endpoints, resolve_constructor};
use crate::trace::{LogTracer, Tracer};

/// Maps values according to a [`MappingContract`].
///
/// Shareable across threads; the only mutable state is the plan cache.
#[derive(Debug)]
pub struct Mapper {
    contract: MappingContract,
    options: EngineOptions,
    plans: PlanCache,
}

impl Mapper {
    pub fn new(contract: MappingContract) -> Self {
        Self::with_options(contract, EngineOptions::default())
    }

    pub fn with_options(contract: MappingContract, options: EngineOptions) -> Self {
        Self {
            contract,
            options,
            plans: PlanCache::new(),
        }
    }

    pub fn contract(&self) -> &MappingContract {
        &self.contract
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn plans(&self) -> &PlanCache {
        &self.plans
    }

    /// Run mapping method `method` on `source`, logging through `tracing`.
    ///
    /// `S` is checked against the declared signature by type identity, so it
    /// must be an owned `'static` type such as `Person` or `Box<Person>`,
    /// never a borrowed `&Person`.
    pub fn map<S, T>(&self, method: &str, source: S) -> Result<T>
    where
        S: Source + 'static,
        T: Target,
    {
        self.map_traced(method, source, &mut LogTracer)
    }

    /// Like [`map`](Self::map), reporting each step to `tracer`.
    pub fn map_traced<S, T>(&self, method: &str, source: S, tracer: &mut impl Tracer) -> Result<T>
    where
        S: Source + 'static,
        T: Target,
    {
        let result = self.dispatch(method, source, tracer);
        if let Err(err) = &result {
            tracer.trace_failure(method, err);
        }
        result
    }

    fn dispatch<S, T>(&self, method: &str, source: S, tracer: &mut impl Tracer) -> Result<T>
    where
        S: Source + 'static,
        T: Target,
    {
        let signature = self
            .contract
            .get(method)
            .ok_or_else(|| MapError::UnknownMethod {
                method: method.to_string(),
            })?;

        let endpoints = Endpoints {
            source: TypeTag::of::<S>(),
            target: TypeTag::of::<T>(),
        };
        if signature.input() != endpoints.source || signature.output() != endpoints.target {
            return Err(signature_mismatch(signature, endpoints));
        }

        if signature.is_identity() {
            tracer.trace_passthrough(method);
            let mut slot = Some(source);
            return take_identity(&mut slot).ok_or_else(|| signature_mismatch(signature, endpoints));
        }

        tracer.trace_call(method, endpoints.source, endpoints.target);
        self.construct(signature, &source, endpoints, tracer)
    }

    fn construct<S, T>(
        &self,
        signature: &MappingSignature,
        source: &S,
        endpoints: Endpoints,
        tracer: &mut impl Tracer,
    ) -> Result<T>
    where
        S: Source,
        T: Target,
    {
        let method = signature.method();
        let constructors = T::describe_constructors();
        let mut pool = AccessorPool::enumerate(source);
        tracer.trace_accessors(&pool);

        let key = self
            .options
            .cache_plans
            .then(|| PlanKey::new(method, endpoints.source, endpoints.target));

        if let Some(key) = &key {
            let plan = self
                .plans
                .get(key)
                .filter(|plan| plan.fits(&constructors, &pool));
            tracer.trace_plan(method, plan.is_some());
            if let Some(plan) = plan {
                return replay(&plan, &constructors, &mut pool, endpoints, tracer);
            }
        }

        let layout = key.as_ref().map(|_| pool.layout());
        let resolved = resolve_constructor(
            &constructors,
            &pool,
            signature.selector(),
            &self.options,
            endpoints,
            tracer,
        )?;
        let constructor = &constructors[resolved.index()];
        let cx = BindContext {
            constructor,
            resolved: &resolved,
            overrides: signature.overrides(),
            names_visible: self.options.name_retention.exposes(constructor),
            endpoints,
        };
        let bound = bind_arguments(&cx, &mut pool, tracer)?;
        let target = invoke(constructor, bound.values, endpoints)?;

        if let (Some(key), Some(layout)) = (key, layout) {
            self.plans.insert(
                key,
                ResolutionPlan::new(resolved.index(), bound.accessors, layout),
            );
        }
        Ok(target)
    }
}

fn replay<T>(
    plan: &ResolutionPlan,
    constructors: &[ConstructorDescriptor<T>],
    pool: &mut AccessorPool<'_>,
    endpoints: Endpoints,
    tracer: &mut impl Tracer,
) -> Result<T> {
    let constructor = constructors
        .get(plan.constructor())
        .ok_or_else(|| endpoints.no_matching_constructor())?;
    tracer.trace_constructor(constructor.label(), constructor.arity());
    let values = plan
        .replay(pool, tracer)
        .ok_or_else(|| endpoints.no_matching_constructor())?;
    invoke(constructor, values, endpoints)
}

fn invoke<T>(constructor: &ConstructorDescriptor<T>, values: Vec<Value>, endpoints: Endpoints) -> Result<T> {
    constructor
        .invoke(values)
        .map_err(|source| MapError::ArgumentMismatch {
            target: endpoints.target,
            constructor: constructor.label(),
            source,
        })
}

/// Moves the input out of `slot` as a `T` when `S` and `T` are the same type.
fn take_identity<S: 'static, T: 'static>(slot: &mut Option<S>) -> Option<T> {
    (slot as &mut dyn Any).downcast_mut::<Option<T>>()?.take()
}

fn signature_mismatch(signature: &MappingSignature, endpoints: Endpoints) -> MapError {
    MapError::SignatureMismatch {
        method: signature.method().to_string(),
        declared_input: signature.input(),
        declared_output: signature.output(),
        input: endpoints.source,
        output: endpoints.target,
    }
}
