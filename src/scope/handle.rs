//! Scope handles: the proxy plus the setter for its logger.

use std::fmt;
use std::sync::Arc;

use super::proxy::{LoggerProxy, ScopeState};
use crate::logger::Logger;

/// Handle to one logging scope.
///
/// Cloning is cheap and every clone, like every handle the registry returns
/// for the same id, shares the same proxy and logger slot.
#[derive(Clone)]
pub struct ScopeHandle {
    proxy: Arc<LoggerProxy>,
}

impl ScopeHandle {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            proxy: Arc::new(LoggerProxy::new(Arc::from(id))),
        }
    }

    pub fn id(&self) -> &str {
        self.proxy.scope_id()
    }

    /// The stable proxy packages log through.
    pub fn logger(&self) -> &LoggerProxy {
        &self.proxy
    }

    /// An owned reference to the proxy.
    ///
    /// `Arc<LoggerProxy>` implements [`Logger`] itself, so with that trait in
    /// scope call the level methods through `&*proxy` to get the inherent,
    /// `impl Into<Args>` variants.
    pub fn proxy(&self) -> Arc<LoggerProxy> {
        Arc::clone(&self.proxy)
    }

    /// Make `logger` the active logger for this scope.
    ///
    /// Takes effect for every holder of the proxy, for calls made after this
    /// returns. Loggers can be replaced any number of times; there is no way
    /// back to the unconfigured state.
    pub fn set_logger<L: Logger + 'static>(&self, logger: L) {
        self.proxy.replace(Box::new(logger));
    }

    /// Like [`set_logger`](Self::set_logger) for an already boxed logger.
    pub fn set_boxed(&self, logger: Box<dyn Logger>) {
        self.proxy.replace(logger);
    }

    /// Like [`set_logger`](Self::set_logger) for a logger the caller keeps
    /// sharing. Calls land on the value behind the `Arc`.
    pub fn set_shared(&self, logger: Arc<dyn Logger>) {
        self.proxy.replace(Box::new(logger));
    }

    pub fn state(&self) -> ScopeState {
        self.proxy.state()
    }

    /// Whether both handles refer to the same scope instance.
    pub fn ptr_eq(&self, other: &ScopeHandle) -> bool {
        Arc::ptr_eq(&self.proxy, &other.proxy)
    }
}

impl fmt::Debug for ScopeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeHandle")
            .field("id", &self.id())
            .field("state", &self.state())
            .finish()
    }
}
