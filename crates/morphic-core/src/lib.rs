#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for morphic.
//!
//! Two layers:
//! - **Shape layer**: [`TypeTag`], [`Value`] and the accessor / parameter /
//!   constructor descriptors through which the engine sees source and target
//!   types ([`Source`], [`Target`]).
//! - **Configuration layer**: per-method constructor selectors and field
//!   overrides, grouped into a read-only [`MappingContract`]. Configuration
//!   can be declared in code or loaded from JSON.

mod config;
mod contract;
mod descriptor;
mod error;
mod shape;
mod type_tag;
pub mod utils;
mod value;

#[cfg(test)]
mod type_tag_tests;

pub use config::{
    ConstructorSelector, ContractConfig, FieldOverride, MethodConfig, names_match,
    parse_contract_config,
};
pub use contract::{ContractBuilder, MappingContract, MappingSignature};
pub use descriptor::{AccessorDescriptor, ConstructorDescriptor, ConstructorFn, ParameterDescriptor};
pub use error::{ArgumentError, ConfigError};
pub use shape::{Source, Target};
pub use type_tag::TypeTag;
pub use value::{Arguments, Value};
