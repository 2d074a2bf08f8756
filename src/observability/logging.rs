//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber for the process
//! - Configure the filter from config, overridable through `RUST_LOG`

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::SubscriberConfig;

/// Pick the filter directive: `env` if it is set and parses, `fallback` otherwise.
///
/// An unparsable `env` is reported on stderr, since no subscriber exists yet
/// to report it through.
pub fn filter_directive(env: Option<&str>, fallback: &str) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => {
            match EnvFilter::try_new(directive) {
                Ok(_) => directive.to_owned(),
                Err(e) => {
                    eprintln!(
                        "warning: ignoring invalid {}={:?} ({}); using {:?}",
                        EnvFilter::DEFAULT_ENV,
                        directive,
                        e,
                        fallback
                    );
                    fallback.to_owned()
                }
            }
        }
        _ => fallback.to_owned(),
    }
}

/// Build the filter: `RUST_LOG` if set and valid, the configured directive otherwise.
pub fn build_filter(config: &SubscriberConfig) -> EnvFilter {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    EnvFilter::new(filter_directive(env.as_deref(), &config.filter))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_subscriber(config: &SubscriberConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(config.ansi)
                .with_target(config.with_target),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_env_overrides_config() {
        assert_eq!(filter_directive(Some("acme=debug"), "info"), "acme=debug");
    }

    #[test]
    fn test_invalid_env_falls_back_to_config() {
        assert_eq!(filter_directive(Some("acme=verbose"), "warn"), "warn");
    }

    #[test]
    fn test_unset_or_blank_env_uses_config() {
        assert_eq!(filter_directive(None, "info"), "info");
        assert_eq!(filter_directive(Some("  "), "info"), "info");
    }
}
