//! Package logging demo binary.
//!
//! Plays the embedding application: installs a `tracing` subscriber, binds
//! package scopes to it from a TOML file and the command line, and makes a
//! round of calls through every scope so the routing is visible.
//!
//! ```text
//! package-logging --scope acme-db
//! package-logging --config logging.toml --watch
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use package_logging::config::{
    load_config, validate_config, AppConfig, ConfigError, ConfigWatcher, ScopeBinding, SinkKind,
};
use package_logging::observability::{apply_bindings, init_subscriber, reapply_bindings};
use package_logging::{LoggerProxy, Registry, Value};

/// Scope nobody binds, to show that calls on it are discarded.
const UNBOUND_SCOPE: &str = "package-logging-demo/unbound";

#[derive(Parser)]
#[command(name = "package-logging")]
#[command(about = "Route package logging scopes to a tracing subscriber", long_about = None)]
struct Cli {
    /// TOML file with subscriber settings and scope bindings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind an additional scope to tracing (repeatable)
    #[arg(short, long = "scope")]
    scopes: Vec<String>,

    /// Keep running and re-apply bindings when the config file changes
    #[arg(short, long, requires = "config")]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    add_cli_scopes(&mut config, &cli.scopes);
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_subscriber(&config.subscriber)?;
    tracing::info!("package-logging v{} starting", env!("CARGO_PKG_VERSION"));

    let registry = Registry::global();
    let applied = apply_bindings(registry, &config);
    tracing::info!(bindings = applied, filter = %config.subscriber.filter, "Configuration loaded");

    exercise(registry, &config);

    if let (true, Some(path)) = (cli.watch, &cli.config) {
        let (watcher, mut updates) = ConfigWatcher::new(path);
        let _watcher = watcher.run()?;

        loop {
            tokio::select! {
                Some(mut new_config) = updates.recv() => {
                    add_cli_scopes(&mut new_config, &cli.scopes);
                    if new_config.subscriber != config.subscriber {
                        tracing::warn!("Subscriber settings changed; they apply on restart only");
                    }
                    let released = reapply_bindings(registry, &config, &new_config);
                    tracing::info!(
                        bindings = new_config.scopes.len(),
                        released = released.len(),
                        "Configuration reloaded"
                    );
                    exercise(registry, &new_config);
                    config = new_config;
                }
                _ = shutdown_signal() => break,
            }
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Bind command-line scopes to tracing unless the file already binds them.
fn add_cli_scopes(config: &mut AppConfig, scopes: &[String]) {
    for id in scopes {
        if !config.scopes.iter().any(|b| &b.id == id) {
            config
                .scopes
                .push(ScopeBinding::new(id.clone(), SinkKind::Tracing));
        }
    }
}

/// One call per level through every bound scope and the unbound one.
fn exercise(registry: &Registry, config: &AppConfig) {
    for binding in &config.scopes {
        emit(registry.scope(&binding.id).logger());
    }
    emit(registry.scope(UNBOUND_SCOPE).logger());

    for (id, state) in registry.states() {
        tracing::info!(scope = %id, state = ?state, "Scope state");
    }
}

fn emit(log: &LoggerProxy) {
    log.trace("this happened");
    log.debug((serde_json::json!({"a": 1, "b": 2}), "debugging away"));
    log.info("note this");
    log.warn(("watch %s", "out"));
    log.error((Value::error(io::Error::other("disk unavailable")), "write failed"));
    log.fatal("run!!!");
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
