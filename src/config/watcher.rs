//! Configuration file watcher for hot reload of scope bindings.
//!
//! The parent directory is watched rather than the file itself, so editors
//! that save by writing a temporary file and renaming it over the original
//! are still seen. File events are forwarded to a reload task, which waits
//! for a save's burst of events to settle before reading the file once.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::AppConfig;

/// Quiet period after the last file event before the file is re-read.
const DEBOUNCE: Duration = Duration::from_millis(250);

/// Poll interval for platforms where notify falls back to polling.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<AppConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for validated configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<AppConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start watching. Must be called inside a tokio runtime.
    ///
    /// The returned watcher must be kept alive; dropping it stops the reload
    /// task. Only configs that load, validate and differ from the last one
    /// seen are sent. The file's content at start counts as seen.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let file_name = self
            .path
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| notify::Error::generic("config path has no file name"))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if touches(&event, &file_name) => {
                    if event_tx.send(()).is_err() {
                        tracing::debug!("Config reload task stopped; ignoring file event");
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = %e, "Watch error"),
            },
            Config::default().with_poll_interval(POLL_INTERVAL),
        )?;

        watcher.watch(watch_dir(&self.path), RecursiveMode::NonRecursive)?;

        let current = load_config(&self.path).ok();
        tokio::spawn(reload_loop(self.path.clone(), event_rx, self.update_tx, current));

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

fn watch_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

/// Whether `event` may have changed the file called `file_name`.
fn touches(event: &Event, file_name: &OsString) -> bool {
    if event.kind.is_access() || event.kind.is_remove() {
        return false;
    }
    event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

async fn reload_loop(
    path: PathBuf,
    mut events: mpsc::UnboundedReceiver<()>,
    updates: mpsc::UnboundedSender<AppConfig>,
    mut current: Option<AppConfig>,
) {
    while events.recv().await.is_some() {
        loop {
            match tokio::time::timeout(DEBOUNCE, events.recv()).await {
                Ok(Some(())) => continue,
                Ok(None) => return,
                Err(_) => break,
            }
        }

        match load_config(&path) {
            Ok(config) if current.as_ref() == Some(&config) => {
                tracing::debug!(path = ?path, "Config file unchanged");
            }
            Ok(config) => {
                tracing::info!(path = ?path, "Config file change detected");
                if updates.send(config.clone()).is_err() {
                    tracing::warn!(path = ?path, "Config update receiver dropped; stopping reloads");
                    return;
                }
                current = Some(config);
            }
            Err(e) => {
                tracing::error!(
                    path = ?path,
                    error = %e,
                    "Failed to reload config. Keeping current configuration."
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScopeBinding, SinkKind};
    use notify::event::{AccessKind, CreateKind, EventKind, ModifyKind, RenameMode};
    use tokio::time::timeout;

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_missing_directory_fails_to_watch() {
        let (watcher, _rx) = ConfigWatcher::new(Path::new("/nonexistent/package-logging.toml"));
        assert_eq!(watcher.path(), Path::new("/nonexistent/package-logging.toml"));
        assert!(watcher.run().is_err());
    }

    #[test]
    fn test_relative_path_watches_current_dir() {
        assert_eq!(watch_dir(Path::new("logging.toml")), Path::new("."));
        assert_eq!(watch_dir(Path::new("/etc/app/logging.toml")), Path::new("/etc/app"));
    }

    #[test]
    fn test_only_events_on_the_file_count() {
        let name = OsString::from("logging.toml");
        let rename = || EventKind::Modify(ModifyKind::Name(RenameMode::To));

        assert!(touches(&event(rename(), "/etc/app/logging.toml"), &name));
        assert!(touches(&event(EventKind::Create(CreateKind::File), "/etc/app/logging.toml"), &name));
        assert!(!touches(&event(rename(), "/etc/app/other.toml"), &name));
        assert!(!touches(&event(EventKind::Access(AccessKind::Any), "/etc/app/logging.toml"), &name));
    }

    #[tokio::test]
    async fn test_sends_valid_configs_and_skips_invalid_ones() {
        let dir = std::env::temp_dir().join(format!("package-logging-watch-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("logging.toml");
        std::fs::write(&path, "").unwrap();

        let (watcher, mut updates) = ConfigWatcher::new(&path);
        let _watcher = watcher.run().unwrap();

        std::fs::write(&path, "[[scopes]]\nid = \"acme-db\"\n").unwrap();
        let config = timeout(Duration::from_secs(5), updates.recv())
            .await
            .expect("valid config delivered")
            .unwrap();
        assert_eq!(config.scopes, vec![ScopeBinding::new("acme-db", SinkKind::Tracing)]);

        std::fs::write(&path, "[[scopes]]\nid = \"\"\n").unwrap();
        assert!(timeout(Duration::from_secs(1), updates.recv()).await.is_err());

        std::fs::remove_dir_all(&dir).ok();
    }
}
