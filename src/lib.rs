//! Package-scoped logging indirection.
//!
//! A library obtains a [`ScopeHandle`] for its own scope id once, logs through
//! the handle's proxy, and exposes the setter to its callers. The embedding
//! application decides, at runtime and at most once per change, which logger
//! each scope forwards to. Until it does, every call is silently discarded.
//!
//! ```
//! use package_logging::{scope, MemoryLogger};
//!
//! // In the package:
//! let logging = scope("acme-db");
//! logging.logger().info("discarded, nothing configured yet");
//!
//! // In the application:
//! let sink = MemoryLogger::new();
//! logging.set_logger(sink.clone());
//! logging.logger().warn(("disk at %d%%", 87));
//! assert_eq!(sink.len(), 1);
//! ```

// Core
pub mod logger;
pub mod record;
pub mod scope;

// Composition root support
pub mod config;
pub mod observability;

pub use logger::{Logger, MemoryLogger, NullLogger, TracingLogger, NULL_LOGGER};
pub use record::{Args, Level, Record, Value};
pub use scope::{scope, LoggerProxy, Registry, ScopeError, ScopeHandle, ScopeState};
