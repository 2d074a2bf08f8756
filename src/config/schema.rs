//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//!
//! ```toml
//! [subscriber]
//! filter = "info,package_logging=debug"
//! ansi = false
//!
//! [[scopes]]
//! id = "acme-db"
//! sink = "tracing"
//!
//! [[scopes]]
//! id = "acme-http"
//! sink = "null"
//! ```

use serde::{Deserialize, Serialize};

/// Root configuration of an application wiring scopes to sinks.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Process-wide `tracing` subscriber settings.
    pub subscriber: SubscriberConfig,

    /// Scope → sink bindings, applied in order.
    pub scopes: Vec<ScopeBinding>,
}

/// `tracing-subscriber` settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SubscriberConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub filter: String,

    /// Colored output.
    pub ansi: bool,

    /// Print the event target (module path) before the message.
    pub with_target: bool,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: true,
            with_target: true,
        }
    }
}

/// Binds one scope id to a sink.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScopeBinding {
    /// Exact scope id, usually the owning package's name.
    pub id: String,

    /// Where the scope's calls go.
    #[serde(default)]
    pub sink: SinkKind,
}

impl ScopeBinding {
    pub fn new(id: impl Into<String>, sink: SinkKind) -> Self {
        Self {
            id: id.into(),
            sink,
        }
    }
}

/// Available sinks for a scope.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Forward to the `tracing` subscriber.
    #[default]
    Tracing,
    /// Discard everything (explicitly silence a scope).
    Null,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.subscriber.filter, "info");
        assert!(config.scopes.is_empty());
    }

    #[test]
    fn test_parse_bindings() {
        let config: AppConfig = toml::from_str(
            r#"
            [subscriber]
            filter = "debug"
            ansi = false

            [[scopes]]
            id = "acme-db"

            [[scopes]]
            id = "acme-http"
            sink = "null"
            "#,
        )
        .unwrap();

        assert_eq!(config.subscriber.filter, "debug");
        assert!(!config.subscriber.ansi);
        assert!(config.subscriber.with_target);
        assert_eq!(
            config.scopes,
            vec![
                ScopeBinding::new("acme-db", SinkKind::Tracing),
                ScopeBinding::new("acme-http", SinkKind::Null),
            ]
        );
    }

    #[test]
    fn test_unknown_sink_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [[scopes]]
            id = "x"
            sink = "syslog"
            "#,
        );
        assert!(result.is_err());
    }
}
