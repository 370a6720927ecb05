//! Mapping signatures and the contracts that group them.

use indexmap::IndexMap;

use crate::config::{ConstructorSelector, ContractConfig, FieldOverride, MethodConfig};
use crate::error::ConfigError;
use crate::{TypeTag, parse_contract_config};

/// One `(Source) -> Target` mapping method, keyed by its name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingSignature {
    method: String,
    input: TypeTag,
    output: TypeTag,
    config: MethodConfig,
}

impl MappingSignature {
    pub fn new<S: 'static, T: 'static>(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            input: TypeTag::of::<S>(),
            output: TypeTag::of::<T>(),
            config: MethodConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MethodConfig) -> Self {
        self.config = config;
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn input(&self) -> TypeTag {
        self.input
    }

    pub fn output(&self) -> TypeTag {
        self.output
    }

    pub fn config(&self) -> &MethodConfig {
        &self.config
    }

    pub fn selector(&self) -> Option<&ConstructorSelector> {
        self.config.selector()
    }

    pub fn overrides(&self) -> &[FieldOverride] {
        self.config.overrides()
    }

    /// Input and output are the same type: mapping is the identity.
    pub fn is_identity(&self) -> bool {
        self.input == self.output
    }
}

/// Read-only set of mapping signatures, built once and shared freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingContract {
    name: String,
    signatures: IndexMap<String, MappingSignature>,
}

impl MappingContract {
    pub fn builder(name: impl Into<String>) -> ContractBuilder {
        ContractBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, method: &str) -> Option<&MappingSignature> {
        self.signatures.get(method)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Signatures in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &MappingSignature> {
        self.signatures.values()
    }
}

/// Builder for [`MappingContract`].
///
/// Declaration errors are deferred: the first one is reported by
/// [`build`](Self::build).
#[derive(Debug)]
pub struct ContractBuilder {
    name: String,
    signatures: IndexMap<String, MappingSignature>,
    error: Option<ConfigError>,
}

impl ContractBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signatures: IndexMap::new(),
            error: None,
        }
    }

    /// Declare `method` as an unconfigured `S -> T` mapping.
    pub fn signature<S: 'static, T: 'static>(self, method: impl Into<String>) -> Self {
        self.add(MappingSignature::new::<S, T>(method))
    }

    /// Declare `method` as an `S -> T` mapping with configuration.
    pub fn signature_with<S: 'static, T: 'static>(
        self,
        method: impl Into<String>,
        config: MethodConfig,
    ) -> Self {
        self.add(MappingSignature::new::<S, T>(method).with_config(config))
    }

    pub fn add(mut self, signature: MappingSignature) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.signatures.contains_key(signature.method()) {
            self.error = Some(ConfigError::DuplicateMethod {
                contract: self.name.clone(),
                method: signature.method.clone(),
            });
            return self;
        }
        self.signatures.insert(signature.method.clone(), signature);
        self
    }

    /// Layer loaded configuration onto already declared methods.
    pub fn configure(mut self, config: ContractConfig) -> Self {
        for (method, method_config) in config.methods {
            if self.error.is_some() {
                break;
            }
            match self.signatures.get_mut(&method) {
                Some(signature) => signature.config.merge(method_config),
                None => {
                    self.error = Some(ConfigError::UnknownMethod {
                        contract: self.name.clone(),
                        method,
                    });
                }
            }
        }
        self
    }

    /// Parse JSON configuration and layer it onto declared methods.
    pub fn configure_json(mut self, json: &str) -> Self {
        match parse_contract_config(json) {
            Ok(config) => self.configure(config),
            Err(err) => {
                self.error.get_or_insert(ConfigError::Json(err));
                self
            }
        }
    }

    pub fn build(self) -> Result<MappingContract, ConfigError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        for signature in self.signatures.values() {
            if let Some(target) = signature.config.conflicting_target() {
                return Err(ConfigError::ConflictingOverrides {
                    method: signature.method.clone(),
                    target: target.to_string(),
                });
            }
        }
        Ok(MappingContract {
            name: self.name,
            signatures: self.signatures,
        })
    }
}
