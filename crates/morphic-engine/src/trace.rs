//! Instrumentation for mapping calls.
//!
//! The engine reports each pipeline step to a [`Tracer`]. Three
//! implementations ship with the crate:
//! - [`NoopTracer`]: every method is an inlined empty body and compiles away.
//! - [`LogTracer`]: forwards events to `tracing` (`debug` for call-level
//!   events, `trace` for per-parameter ones).
//! - [`PrintTracer`]: collects one line per event, for tests and debugging.

use std::fmt;

use morphic_core::TypeTag;

use crate::error::MapError;
use crate::pool::AccessorPool;

/// Why the binder picked an accessor for a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindRule {
    /// A field override named the accessor.
    Override,
    /// The constructor selector pre-bound this position.
    Selector,
    /// Type (and name, when known) matched.
    Matched,
    /// Replayed from a cached resolution plan.
    Planned,
}

impl fmt::Display for BindRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Override => "override",
            Self::Selector => "selector",
            Self::Matched => "matched",
            Self::Planned => "planned",
        })
    }
}

/// Receives one callback per pipeline event of a mapping call.
pub trait Tracer {
    /// A call entered the engine (after the signature check).
    fn trace_call(&mut self, method: &str, source: TypeTag, target: TypeTag);

    /// Input and output types are equal; the input is returned as is.
    fn trace_passthrough(&mut self, method: &str);

    /// The source's accessors were enumerated.
    fn trace_accessors(&mut self, pool: &AccessorPool<'_>);

    /// Selector entry `name` resolved to accessor `accessor`.
    fn trace_selector(&mut self, name: &str, accessor: &str);

    /// A constructor was tried during type-driven resolution.
    fn trace_trial(&mut self, constructor: &'static str, satisfied: bool);

    /// A constructor was chosen.
    fn trace_constructor(&mut self, constructor: &'static str, arity: usize);

    /// Parameter `position` was bound to `accessor`.
    fn trace_bind(&mut self, position: usize, parameter: Option<&str>, accessor: &str, rule: BindRule);

    /// Plan cache lookup for `method`.
    fn trace_plan(&mut self, method: &str, hit: bool);

    /// The call failed with `error`.
    fn trace_failure(&mut self, method: &str, error: &MapError);
}

/// Tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_call(&mut self, _method: &str, _source: TypeTag, _target: TypeTag) {}

    #[inline(always)]
    fn trace_passthrough(&mut self, _method: &str) {}

    #[inline(always)]
    fn trace_accessors(&mut self, _pool: &AccessorPool<'_>) {}

    #[inline(always)]
    fn trace_selector(&mut self, _name: &str, _accessor: &str) {}

    #[inline(always)]
    fn trace_trial(&mut self, _constructor: &'static str, _satisfied: bool) {}

    #[inline(always)]
    fn trace_constructor(&mut self, _constructor: &'static str, _arity: usize) {}

    #[inline(always)]
    fn trace_bind(
        &mut self,
        _position: usize,
        _parameter: Option<&str>,
        _accessor: &str,
        _rule: BindRule,
    ) {
    }

    #[inline(always)]
    fn trace_plan(&mut self, _method: &str, _hit: bool) {}

    #[inline(always)]
    fn trace_failure(&mut self, _method: &str, _error: &MapError) {}
}

/// Tracer that emits `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace_call(&mut self, method: &str, source: TypeTag, target: TypeTag) {
        tracing::debug!(method, source = %source, target = %target, "mapping call");
    }

    fn trace_passthrough(&mut self, method: &str) {
        tracing::debug!(method, "identity passthrough");
    }

    fn trace_accessors(&mut self, pool: &AccessorPool<'_>) {
        tracing::trace!(count = pool.len(), names = ?pool.names(), "accessors enumerated");
    }

    fn trace_selector(&mut self, name: &str, accessor: &str) {
        tracing::trace!(name, accessor, "selector entry resolved");
    }

    fn trace_trial(&mut self, constructor: &'static str, satisfied: bool) {
        tracing::trace!(constructor, satisfied, "constructor trial");
    }

    fn trace_constructor(&mut self, constructor: &'static str, arity: usize) {
        tracing::debug!(constructor, arity, "constructor selected");
    }

    fn trace_bind(&mut self, position: usize, parameter: Option<&str>, accessor: &str, rule: BindRule) {
        tracing::trace!(position, parameter, accessor, rule = %rule, "parameter bound");
    }

    fn trace_plan(&mut self, method: &str, hit: bool) {
        tracing::trace!(method, hit, "plan cache lookup");
    }

    fn trace_failure(&mut self, method: &str, error: &MapError) {
        tracing::debug!(method, error = %error, "mapping failed");
    }
}

/// Tracer that collects one line per event.
#[derive(Clone, Debug, Default)]
pub struct PrintTracer {
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines.
    pub fn dump(&self) -> String {
        self.lines.join("\n")
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Tracer for PrintTracer {
    fn trace_call(&mut self, method: &str, source: TypeTag, target: TypeTag) {
        self.lines.push(format!("call {method}: {source} -> {target}"));
    }

    fn trace_passthrough(&mut self, method: &str) {
        self.lines.push(format!("passthrough {method}"));
    }

    fn trace_accessors(&mut self, pool: &AccessorPool<'_>) {
        self.lines
            .push(format!("accessors [{}]", pool.names().join(", ")));
    }

    fn trace_selector(&mut self, name: &str, accessor: &str) {
        self.lines.push(format!("  select {name} -> {accessor}"));
    }

    fn trace_trial(&mut self, constructor: &'static str, satisfied: bool) {
        let outcome = if satisfied { "satisfied" } else { "unsatisfied" };
        self.lines.push(format!("  try {constructor}: {outcome}"));
    }

    fn trace_constructor(&mut self, constructor: &'static str, arity: usize) {
        self.lines.push(format!("construct {constructor}/{arity}"));
    }

    fn trace_bind(&mut self, position: usize, parameter: Option<&str>, accessor: &str, rule: BindRule) {
        let line = match parameter {
            Some(parameter) => format!("  bind #{position} {parameter} <- {accessor} ({rule})"),
            None => format!("  bind #{position} <- {accessor} ({rule})"),
        };
        self.lines.push(line);
    }

    fn trace_plan(&mut self, method: &str, hit: bool) {
        let outcome = if hit { "hit" } else { "miss" };
        self.lines.push(format!("plan {outcome} {method}"));
    }

    fn trace_failure(&mut self, method: &str, error: &MapError) {
        self.lines.push(format!("fail {method}: {error}"));
    }
}
