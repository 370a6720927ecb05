//! Errors raised while building contracts or feeding constructors.

use crate::TypeTag;

/// Errors from contract construction and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("mapping method `{method}` is declared more than once in contract `{contract}`")]
    DuplicateMethod { contract: String, method: String },

    #[error("configuration refers to unknown mapping method `{method}` in contract `{contract}`")]
    UnknownMethod { contract: String, method: String },

    /// Two overrides of one method fill the same constructor parameter.
    #[error("mapping method `{method}` has more than one field override targeting `{target}`")]
    ConflictingOverrides { method: String, target: String },

    #[error("invalid contract configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from extracting typed constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("argument #{position} of type `{expected}` is missing")]
    Missing { position: usize, expected: TypeTag },

    #[error("argument #{position} has type `{found}`, expected `{expected}`")]
    TypeMismatch {
        position: usize,
        expected: TypeTag,
        found: TypeTag,
    },

    #[error("{count} arguments were left unused")]
    Surplus { count: usize },
}
