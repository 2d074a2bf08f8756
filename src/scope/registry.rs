//! Identifier-keyed table of scopes.

use std::sync::OnceLock;

use dashmap::DashMap;
use thiserror::Error;

use super::handle::ScopeHandle;
use super::proxy::ScopeState;

/// Errors returned by [`Registry::try_scope`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// Scope ids must contain at least one character.
    #[error("scope id must not be empty")]
    EmptyId,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// A table of scopes keyed by exact id.
///
/// Scopes are created on first request and live as long as the registry.
/// The process-wide instance is [`Registry::global`]; a composition root may
/// also own a registry and pass it by reference to everything that needs
/// scopes.
#[derive(Debug, Default)]
pub struct Registry {
    scopes: DashMap<String, ScopeHandle>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Return the scope for `id`, creating it on first request.
    ///
    /// Concurrent first requests for the same id all receive the scope the
    /// first writer inserted.
    pub fn scope(&self, id: &str) -> ScopeHandle {
        if let Some(existing) = self.scopes.get(id) {
            return existing.value().clone();
        }

        self.scopes
            .entry(id.to_owned())
            .or_insert_with(|| {
                tracing::debug!(scope = %id, "Scope created");
                ScopeHandle::new(id)
            })
            .value()
            .clone()
    }

    /// Like [`scope`](Self::scope) but rejects an empty id.
    pub fn try_scope(&self, id: &str) -> Result<ScopeHandle, ScopeError> {
        if id.is_empty() {
            return Err(ScopeError::EmptyId);
        }
        Ok(self.scope(id))
    }

    /// The scope for `id` if it has been created.
    pub fn get(&self, id: &str) -> Option<ScopeHandle> {
        self.scopes.get(id).map(|r| r.value().clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.scopes.contains_key(id)
    }

    /// Ids of all created scopes, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.scopes.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        ids
    }

    /// State of every created scope, sorted by id.
    pub fn states(&self) -> Vec<(String, ScopeState)> {
        let mut states: Vec<(String, ScopeState)> = self
            .scopes
            .iter()
            .map(|r| (r.key().clone(), r.value().state()))
            .collect();
        states.sort_by(|a, b| a.0.cmp(&b.0));
        states
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
