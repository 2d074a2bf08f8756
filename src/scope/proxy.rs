//! The stable proxy a package logs through.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::logger::{Logger, NullLogger};
use crate::record::{Args, Level};

/// Configuration state of a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeState {
    /// Still delegating to the null logger.
    Unconfigured,
    /// Delegating to the most recently set logger.
    Configured,
}

/// Forwards every call to whichever logger is currently active for its scope.
///
/// The active logger is re-resolved on each call, so a logger set after the
/// proxy was handed out is observed by every holder of the proxy.
pub struct LoggerProxy {
    scope: Arc<str>,
    slot: ArcSwap<Box<dyn Logger>>,
    configured: AtomicBool,
}

impl LoggerProxy {
    pub(crate) fn new(scope: Arc<str>) -> Self {
        Self {
            scope,
            slot: ArcSwap::from_pointee(Box::new(NullLogger) as Box<dyn Logger>),
            configured: AtomicBool::new(false),
        }
    }

    /// Id of the scope this proxy belongs to.
    pub fn scope_id(&self) -> &str {
        &self.scope
    }

    pub fn state(&self) -> ScopeState {
        if self.configured.load(Ordering::Acquire) {
            ScopeState::Configured
        } else {
            ScopeState::Unconfigured
        }
    }

    pub fn is_configured(&self) -> bool {
        self.state() == ScopeState::Configured
    }

    pub(crate) fn replace(&self, logger: Box<dyn Logger>) {
        self.slot.store(Arc::new(logger));
        self.configured.store(true, Ordering::Release);
        tracing::debug!(scope = %self.scope, "Scope logger replaced");
    }

    /// Forward a call at `level`.
    pub fn log(&self, level: Level, args: impl Into<Args>) {
        self.dispatch(level, &args.into());
    }

    pub fn fatal(&self, args: impl Into<Args>) {
        self.dispatch(Level::Fatal, &args.into());
    }

    pub fn error(&self, args: impl Into<Args>) {
        self.dispatch(Level::Error, &args.into());
    }

    pub fn warn(&self, args: impl Into<Args>) {
        self.dispatch(Level::Warn, &args.into());
    }

    pub fn info(&self, args: impl Into<Args>) {
        self.dispatch(Level::Info, &args.into());
    }

    pub fn debug(&self, args: impl Into<Args>) {
        self.dispatch(Level::Debug, &args.into());
    }

    pub fn trace(&self, args: impl Into<Args>) {
        self.dispatch(Level::Trace, &args.into());
    }

    fn dispatch(&self, level: Level, args: &Args) {
        let current = self.slot.load_full();
        match level {
            Level::Fatal => current.fatal(args),
            Level::Error => current.error(args),
            Level::Warn => current.warn(args),
            Level::Info => current.info(args),
            Level::Debug => current.debug(args),
            Level::Trace => current.trace(args),
        }
    }
}

impl fmt::Debug for LoggerProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerProxy")
            .field("scope", &self.scope)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

// Lets one scope be configured with another scope's proxy.
impl Logger for LoggerProxy {
    fn fatal(&self, args: &Args) {
        self.dispatch(Level::Fatal, args);
    }
    fn error(&self, args: &Args) {
        self.dispatch(Level::Error, args);
    }
    fn warn(&self, args: &Args) {
        self.dispatch(Level::Warn, args);
    }
    fn info(&self, args: &Args) {
        self.dispatch(Level::Info, args);
    }
    fn debug(&self, args: &Args) {
        self.dispatch(Level::Debug, args);
    }
    fn trace(&self, args: &Args) {
        self.dispatch(Level::Trace, args);
    }
}
