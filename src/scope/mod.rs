//! Scope registry.
//!
//! # Data Flow
//! ```text
//! package init:   scope("acme-db")  → Registry (lookup or create)
//!                                   → ScopeHandle { proxy }
//! package code:   handle.logger().info(..) → LoggerProxy → active Logger
//! application:    handle.set_logger(L)     → atomic swap of the proxy's slot
//! ```
//!
//! # State Machine (per scope)
//! ```text
//! Unconfigured ──set_logger──▶ Configured ──set_logger──▶ Configured
//! ```
//!
//! # Design Decisions
//! - One proxy per scope for the life of the registry; handles are clones
//! - Registry insertion is a critical section (first writer wins)
//! - Logger slot is an `ArcSwap`: last write wins, readers never block
//! - Ids should be namespaced by package name; matching is exact

pub mod handle;
pub mod proxy;
pub mod registry;

pub use handle::ScopeHandle;
pub use proxy::{LoggerProxy, ScopeState};
pub use registry::{Registry, ScopeError};

/// Return the scope for `id` from the process-wide registry.
pub fn scope(id: &str) -> ScopeHandle {
    Registry::global().scope(id)
}
