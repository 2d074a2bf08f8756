//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject bindings that could never match or would conflict
//! - Check the subscriber filter directive parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AppConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("scope binding #{index} has an empty id")]
    EmptyScopeId { index: usize },

    #[error("scope {id:?} is bound more than once")]
    DuplicateScope { id: String },

    #[error("invalid subscriber filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },
}

/// Check a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, binding) in config.scopes.iter().enumerate() {
        if binding.id.is_empty() {
            errors.push(ValidationError::EmptyScopeId { index });
        } else if !seen.insert(binding.id.as_str()) {
            errors.push(ValidationError::DuplicateScope {
                id: binding.id.clone(),
            });
        }
    }

    if let Err(e) = EnvFilter::try_new(&config.subscriber.filter) {
        errors.push(ValidationError::InvalidFilter {
            filter: config.subscriber.filter.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
