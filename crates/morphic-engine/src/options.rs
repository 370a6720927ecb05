//! Engine policies.

use morphic_core::ConstructorDescriptor;

/// Which constructors expose their parameter names to the binder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NameRetention {
    /// Only the primary constructor's parameter names are visible. Name
    /// matching and field overrides are unavailable on every other one.
    #[default]
    PrimaryOnly,
    /// Every constructor's published names are visible.
    All,
}

impl NameRetention {
    /// Whether the binder may see `constructor`'s parameter names.
    pub fn exposes<T>(self, constructor: &ConstructorDescriptor<T>) -> bool {
        match self {
            Self::PrimaryOnly => constructor.is_primary(),
            Self::All => true,
        }
    }
}

/// How type-driven resolution picks among several satisfiable constructors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmbiguityPolicy {
    /// First satisfiable constructor in declaration order.
    #[default]
    FirstDeclared,
    /// Satisfiable constructor with the most parameters; declaration order
    /// breaks ties.
    MostParameters,
    /// Fail with `AmbiguousConstructor` when more than one qualifies.
    Reject,
}

/// Engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct EngineOptions {
    pub(crate) name_retention: NameRetention,
    pub(crate) ambiguity: AmbiguityPolicy,
    /// Replay resolution plans per (method, source type).
    pub(crate) cache_plans: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            name_retention: NameRetention::default(),
            ambiguity: AmbiguityPolicy::default(),
            cache_plans: true,
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_retention(mut self, retention: NameRetention) -> Self {
        self.name_retention = retention;
        self
    }

    pub fn ambiguity(mut self, policy: AmbiguityPolicy) -> Self {
        self.ambiguity = policy;
        self
    }

    pub fn cache_plans(mut self, enabled: bool) -> Self {
        self.cache_plans = enabled;
        self
    }

    pub fn get_name_retention(&self) -> NameRetention {
        self.name_retention
    }
    pub fn get_ambiguity(&self) -> AmbiguityPolicy {
        self.ambiguity
    }
    pub fn get_cache_plans(&self) -> bool {
        self.cache_plans
    }
}
