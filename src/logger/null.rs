//! No-op logger used before an application configures a scope.

use super::Logger;
use crate::record::Args;

/// Discards every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLogger;

/// The shared null logger instance.
pub static NULL_LOGGER: NullLogger = NullLogger;

impl Logger for NullLogger {
    fn fatal(&self, _: &Args) {}
    fn error(&self, _: &Args) {}
    fn warn(&self, _: &Args) {}
    fn info(&self, _: &Args) {}
    fn debug(&self, _: &Args) {}
    fn trace(&self, _: &Args) {}
}
