//! Per-method mapping configuration.
//!
//! Two layers:
//! - **Deserialization layer**: [`ContractConfig`], a 1:1 mapping of the
//!   JSON configuration format, keyed by method name.
//! - **Model layer**: [`ConstructorSelector`], [`FieldOverride`] and
//!   [`MethodConfig`], consumed by the engine. Both layers share types; the
//!   JSON layer only adds the method-name map.
//!
//! ```json
//! {
//!   "methods": {
//!     "to_summary": {
//!       "constructor": { "mappings": ["id", "surname"], "case_sensitive": false },
//!       "mappings": [{ "from": "surName", "to": "firstName" }]
//!     }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

fn case_sensitive_default() -> bool {
    true
}

/// Compare two member names, optionally ignoring case.
pub fn names_match(expected: &str, actual: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        return expected == actual;
    }
    expected
        .chars()
        .flat_map(char::to_lowercase)
        .eq(actual.chars().flat_map(char::to_lowercase))
}

/// Ordered source accessor names that pin down one target constructor.
///
/// A selector of `k` names only ever selects a constructor with exactly `k`
/// parameters, and its accessors fill those parameters in order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorSelector {
    #[serde(rename = "mappings")]
    names: Vec<String>,
    #[serde(default = "case_sensitive_default")]
    case_sensitive: bool,
}

impl ConstructorSelector {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            case_sensitive: true,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether selector entry `name` designates accessor `accessor`.
    pub fn matches(&self, name: &str, accessor: &str) -> bool {
        names_match(name, accessor, self.case_sensitive)
    }
}

/// Explicit source accessor for one named constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldOverride {
    #[serde(rename = "from")]
    source_name: String,
    #[serde(rename = "to")]
    target_name: String,
    #[serde(default = "case_sensitive_default")]
    case_sensitive: bool,
}

impl FieldOverride {
    pub fn new(source_name: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            target_name: target_name.into(),
            case_sensitive: true,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether this override fills the parameter called `parameter`.
    pub fn targets(&self, parameter: &str) -> bool {
        names_match(&self.target_name, parameter, self.case_sensitive)
    }

    /// Whether this override reads from the accessor called `accessor`.
    pub fn reads(&self, accessor: &str) -> bool {
        names_match(&self.source_name, accessor, self.case_sensitive)
    }
}

/// Configuration attached to one mapping method.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodConfig {
    #[serde(default)]
    constructor: Option<ConstructorSelector>,
    #[serde(default)]
    mappings: Vec<FieldOverride>,
}

impl MethodConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: ConstructorSelector) -> Self {
        self.constructor = Some(selector);
        self
    }

    pub fn with_override(mut self, field: FieldOverride) -> Self {
        self.mappings.push(field);
        self
    }

    pub fn selector(&self) -> Option<&ConstructorSelector> {
        self.constructor.as_ref()
    }

    pub fn overrides(&self) -> &[FieldOverride] {
        &self.mappings
    }

    pub fn is_empty(&self) -> bool {
        self.constructor.is_none() && self.mappings.is_empty()
    }

    /// Layer `other` on top of `self`: its selector replaces ours when
    /// present, its overrides are appended.
    pub fn merge(&mut self, other: MethodConfig) {
        if other.constructor.is_some() {
            self.constructor = other.constructor;
        }
        self.mappings.extend(other.mappings);
    }

    /// Name of the first parameter targeted by more than one override.
    pub(crate) fn conflicting_target(&self) -> Option<&str> {
        self.mappings.iter().enumerate().find_map(|(i, field)| {
            self.mappings[i + 1..]
                .iter()
                .any(|other| other.targets(&field.target_name) || field.targets(&other.target_name))
                .then_some(field.target_name.as_str())
        })
    }
}

/// Raw configuration for a whole contract, as loaded from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractConfig {
    #[serde(default)]
    pub methods: IndexMap<String, MethodConfig>,
}

/// Parse contract configuration JSON.
pub fn parse_contract_config(json: &str) -> Result<ContractConfig, serde_json::Error> {
    serde_json::from_str(json)
}
