//! Errors that terminate a mapping call.

use morphic_core::{ArgumentError, TypeTag};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("mapping method `{method}` is not part of the contract")]
    UnknownMethod { method: String },

    #[error(
        "mapping method `{method}` is declared as `{declared_input} -> {declared_output}` \
         but was called as `{input} -> {output}`"
    )]
    SignatureMismatch {
        method: String,
        declared_input: TypeTag,
        declared_output: TypeTag,
        input: TypeTag,
        output: TypeTag,
    },

    /// A constructor selector names an accessor the source does not have.
    #[error("constructor selector names accessor `{name}` but `{source_type}` has no such accessor")]
    UnresolvedAccessorName { name: String, source_type: TypeTag },

    #[error("no constructor of `{target}` can be satisfied by the accessors of `{source_type}`")]
    NoMatchingConstructor {
        source_type: TypeTag,
        target: TypeTag,
    },

    /// More than one constructor qualifies and the ambiguity policy rejects that.
    #[error(
        "constructors {} of `{target}` can all be satisfied by the accessors of `{source_type}`",
        .candidates.join(", ")
    )]
    AmbiguousConstructor {
        source_type: TypeTag,
        target: TypeTag,
        candidates: Vec<&'static str>,
    },

    #[error(
        "field override maps `{source_name}` to `{parameter}` but `{source_type}` has no unused \
         accessor `{source_name}` of type `{expected}`"
    )]
    OverrideAccessorNotFound {
        source_name: String,
        parameter: String,
        expected: TypeTag,
        source_type: TypeTag,
    },

    /// Field overrides are addressed by parameter name; the chosen
    /// constructor does not publish its names.
    #[error(
        "constructor parameter names must be present when using field overrides: \
         `{target}::{constructor}` does not retain them, only the primary constructor \
         of a type retains its parameter names"
    )]
    OverrideRequiresParameterNames {
        target: TypeTag,
        constructor: &'static str,
    },

    #[error(
        "parameter `{parameter}` of `{target}::{constructor}` has no unused accessor of type \
         `{expected}` with a matching name"
    )]
    UnboundParameter {
        target: TypeTag,
        constructor: &'static str,
        parameter: String,
        expected: TypeTag,
    },

    #[error("constructor `{target}::{constructor}` rejected its arguments")]
    ArgumentMismatch {
        target: TypeTag,
        constructor: &'static str,
        #[source]
        source: ArgumentError,
    },
}

/// Result type for mapping calls.
pub type Result<T> = std::result::Result<T, MapError>;
