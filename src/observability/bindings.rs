//! Applies configured scope bindings to a registry.

use crate::config::{AppConfig, ScopeBinding, SinkKind};
use crate::logger::{Logger, NullLogger, TracingLogger};
use crate::scope::Registry;

/// Construct the logger a binding asks for.
pub fn sink_for(binding: &ScopeBinding) -> Box<dyn Logger> {
    match binding.sink {
        SinkKind::Tracing => Box::new(TracingLogger::new(binding.id.as_str())),
        SinkKind::Null => Box::new(NullLogger),
    }
}

/// Set the logger of every bound scope, creating scopes as needed.
///
/// Returns the number of bindings applied. Scopes not mentioned keep their
/// current logger.
pub fn apply_bindings(registry: &Registry, config: &AppConfig) -> usize {
    for binding in &config.scopes {
        registry.scope(&binding.id).set_boxed(sink_for(binding));
        tracing::info!(scope = %binding.id, sink = ?binding.sink, "Scope bound");
    }
    config.scopes.len()
}

/// Apply `next` on top of `previous`, releasing dropped bindings.
///
/// Scopes bound by `previous` but absent from `next` are switched to the null
/// logger. They stay `Configured`; there is no way back to unconfigured.
/// Returns the released ids in `previous` order.
pub fn reapply_bindings(registry: &Registry, previous: &AppConfig, next: &AppConfig) -> Vec<String> {
    let released: Vec<String> = previous
        .scopes
        .iter()
        .filter(|old| !next.scopes.iter().any(|b| b.id == old.id))
        .map(|old| old.id.clone())
        .collect();

    for id in &released {
        registry.scope(id).set_logger(NullLogger);
        tracing::info!(scope = %id, "Scope released");
    }
    apply_bindings(registry, next);
    released
}
