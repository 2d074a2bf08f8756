//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! AppConfig
//!     → logging.rs (install the process-wide tracing subscriber)
//!     → bindings.rs (point configured scopes at tracing or at nothing)
//!
//! Package log calls:
//!     → LoggerProxy → TracingLogger → tracing event → fmt layer → stdout
//! ```
//!
//! # Design Decisions
//! - The application, not the packages, decides where scope output goes
//! - A reload releases scopes it no longer binds to the null logger
//! - Unbound scopes stay on the null logger and cost one atomic load per call

pub mod bindings;
pub mod logging;

pub use bindings::{apply_bindings, reapply_bindings, sink_for};
pub use logging::init_subscriber;
