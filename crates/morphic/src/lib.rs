#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime object mapping through type- and name-matched constructors.
//!
//! Declare mappings as a trait, derive the shapes, and let the engine pick a
//! target constructor and fill each parameter from a source accessor:
//!
//! ```ignore
//! use morphic::Source;
//!
//! #[derive(Clone, Source)]
//! #[morph(rename_all = "camelCase")]
//! struct Person { id: Uuid, first_name: String, sur_name: String }
//!
//! struct Contact { first_name: String, sur_name: String }
//!
//! #[morphic::constructors(rename_all = "camelCase")]
//! impl Contact {
//!     fn new(first_name: String, sur_name: String) -> Self { .. }
//! }
//!
//! #[morphic::contract]
//! trait People {
//!     fn contact(&self, person: Person) -> morphic::Result<Contact>;
//! }
//!
//! let contact = PeopleImpl::new()?.contact(person)?;
//! ```
//!
//! Matching is by exact type, and by name wherever the constructor's
//! parameter names are retained (the primary constructor, by default).
//! Per-method constructor selectors and field overrides refine it.

extern crate self as morphic;

pub use morphic_core::{
    AccessorDescriptor, ArgumentError, Arguments, ConfigError, ConstructorDescriptor,
    ConstructorFn, ConstructorSelector, ContractBuilder, ContractConfig, FieldOverride,
    MappingContract, MappingSignature, MethodConfig, ParameterDescriptor, Source, Target, TypeTag,
    Value, names_match, opaque_shape, parse_contract_config, utils,
};
pub use morphic_engine::{
    AccessorLayout, AccessorPool, AmbiguityPolicy, BindContext, BindRule, BoundArguments, Endpoints,
    EngineOptions, LogTracer, MapError, Mapper, NameRetention, NoopTracer, PlanCache, PlanKey,
    PlannedAccessor, PrintTracer, ResolutionPlan, ResolvedConstructor, Result, Tracer,
    bind_arguments, resolve_constructor,
};
pub use morphic_macros::{Source, constructors, contract};

#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod scenario_tests;
