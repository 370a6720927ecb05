#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Mapping engine for morphic.
//!
//! Given a [`MappingContract`](morphic_core::MappingContract), a [`Mapper`]
//! turns source values into target values:
//! 1. enumerate the source's accessors into an [`AccessorPool`],
//! 2. pick a target constructor ([`resolve_constructor`]),
//! 3. bind one accessor to each parameter ([`bind_arguments`]),
//! 4. invoke the constructor.
//!
//! Successful resolutions are cached as [`ResolutionPlan`]s per method and
//! type pair.

mod bind;
mod dispatch;
mod error;
mod options;
mod plan;
mod pool;
mod resolve;
mod trace;

#[cfg(test)]
mod pool_tests;
#[cfg(test)]
mod test_utils;

pub use bind::{BindContext, BoundArguments, bind_arguments};
pub use dispatch::Mapper;
pub use error::{MapError, Result};
pub use options::{AmbiguityPolicy, EngineOptions, NameRetention};
pub use plan::{AccessorLayout, PlanCache, PlanKey, PlannedAccessor, ResolutionPlan};
pub use pool::AccessorPool;
pub use resolve::{Endpoints, ResolvedConstructor, resolve_constructor};
pub use trace::{BindRule, LogTracer, NoopTracer, PrintTracer, Tracer};
