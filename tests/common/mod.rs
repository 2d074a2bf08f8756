//! Shared fixtures: package-like modules owning a scope, and a spy logger.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use package_logging::{Args, Level, Logger};

/// Declare a module that behaves like a downstream package's `logging`
/// module: it owns one scope and re-exposes the setter and the proxy.
macro_rules! package_scope {
    ($module:ident, $id:expr) => {
        pub mod $module {
            use package_logging::{Logger, LoggerProxy, ScopeHandle};
            use std::sync::LazyLock;

            static LOGGING: LazyLock<ScopeHandle> =
                LazyLock::new(|| package_logging::scope($id));

            pub const ID: &str = $id;

            pub fn use_logger<L: Logger + 'static>(logger: L) {
                LOGGING.set_logger(logger);
            }

            pub fn logger() -> &'static LoggerProxy {
                LOGGING.logger()
            }

            pub fn handle() -> ScopeHandle {
                LOGGING.clone()
            }
        }
    };
}

pub(crate) use package_scope;

package_scope!(one_logger, "one-logger");
package_scope!(other_logger, "other-logger");

/// One call seen by a [`SpyLogger`].
#[derive(Debug, Clone)]
pub struct SpyCall {
    pub level: Level,
    pub args: Args,
    /// Address of the logger the call was made on.
    pub receiver: usize,
}

/// Records every call together with the receiver it arrived on.
#[derive(Debug, Default)]
pub struct SpyLogger {
    calls: Mutex<Vec<SpyCall>>,
}

impl SpyLogger {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn address(self: &Arc<Self>) -> usize {
        Arc::as_ptr(self) as usize
    }

    pub fn calls(&self) -> Vec<SpyCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, level: Level) -> Vec<SpyCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.level == level)
            .collect()
    }

    fn record(&self, level: Level, args: &Args) {
        self.calls.lock().unwrap().push(SpyCall {
            level,
            args: args.clone(),
            receiver: self as *const Self as usize,
        });
    }
}

impl Logger for SpyLogger {
    fn fatal(&self, args: &Args) {
        self.record(Level::Fatal, args);
    }
    fn error(&self, args: &Args) {
        self.record(Level::Error, args);
    }
    fn warn(&self, args: &Args) {
        self.record(Level::Warn, args);
    }
    fn info(&self, args: &Args) {
        self.record(Level::Info, args);
    }
    fn debug(&self, args: &Args) {
        self.record(Level::Debug, args);
    }
    fn trace(&self, args: &Args) {
        self.record(Level::Trace, args);
    }
}

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber that accepts every level and
/// return everything it wrote.
pub fn capture_tracing(f: impl FnOnce()) -> String {
    let buffer = Buffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
