//! The logger capability a scope delegates to.
//!
//! # Responsibilities
//! - Define the six-method contract applications implement
//! - Provide the no-op default and ready-made sinks
//!
//! # Design Decisions
//! - All six methods are required, so an incomplete logger is a compile error
//! - Loggers receive `&self`, so state kept on the implementation is visible
//!   to every call made through a proxy
//! - Panics raised by a logger are not caught anywhere in this crate

pub mod memory;
pub mod null;
pub mod tracing_logger;

use std::sync::Arc;

use crate::record::{Args, Level};

pub use memory::MemoryLogger;
pub use null::{NullLogger, NULL_LOGGER};
pub use tracing_logger::TracingLogger;

/// A logger implementation supplied by the embedding application.
pub trait Logger: Send + Sync {
    fn fatal(&self, args: &Args);
    fn error(&self, args: &Args);
    fn warn(&self, args: &Args);
    fn info(&self, args: &Args);
    fn debug(&self, args: &Args);
    fn trace(&self, args: &Args);

    /// Dispatch to the method named by `level`.
    fn log(&self, level: Level, args: &Args) {
        match level {
            Level::Fatal => self.fatal(args),
            Level::Error => self.error(args),
            Level::Warn => self.warn(args),
            Level::Info => self.info(args),
            Level::Debug => self.debug(args),
            Level::Trace => self.trace(args),
        }
    }
}

macro_rules! forward_logger {
    ($wrapper:ident) => {
        impl<L: Logger + ?Sized> Logger for $wrapper<L> {
            fn fatal(&self, args: &Args) {
                (**self).fatal(args)
            }
            fn error(&self, args: &Args) {
                (**self).error(args)
            }
            fn warn(&self, args: &Args) {
                (**self).warn(args)
            }
            fn info(&self, args: &Args) {
                (**self).info(args)
            }
            fn debug(&self, args: &Args) {
                (**self).debug(args)
            }
            fn trace(&self, args: &Args) {
                (**self).trace(args)
            }
            fn log(&self, level: Level, args: &Args) {
                (**self).log(level, args)
            }
        }
    };
}

forward_logger!(Arc);
forward_logger!(Box);

impl<L: Logger + ?Sized> Logger for &'static L {
    fn fatal(&self, args: &Args) {
        (**self).fatal(args)
    }
    fn error(&self, args: &Args) {
        (**self).error(args)
    }
    fn warn(&self, args: &Args) {
        (**self).warn(args)
    }
    fn info(&self, args: &Args) {
        (**self).info(args)
    }
    fn debug(&self, args: &Args) {
        (**self).debug(args)
    }
    fn trace(&self, args: &Args) {
        (**self).trace(args)
    }
    fn log(&self, level: Level, args: &Args) {
        (**self).log(level, args)
    }
}
