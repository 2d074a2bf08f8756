//! The structured log call.
//!
//! # Data Flow
//! ```text
//! package code: log.warn(("disk at %d%%", 87))
//!     → Args (ordered Values, nothing dropped or reordered)
//!     → LoggerProxy (re-resolves the active logger)
//!     → Logger::warn(&Args) on the application's logger
//! ```
//!
//! # Design Decisions
//! - Arguments stay opaque values; no schema is imposed on them
//! - Errors are carried by reference so identity survives forwarding
//! - Formatting belongs to the injected logger, never to the proxy

pub mod args;
pub mod level;
pub mod value;

pub use args::Args;
pub use level::{Level, ParseLevelError};
pub use value::Value;

/// One recorded log call: the level it was made at and its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub level: Level,
    pub args: Args,
}

impl Record {
    pub fn new(level: Level, args: impl Into<Args>) -> Self {
        Self {
            level,
            args: args.into(),
        }
    }
}
