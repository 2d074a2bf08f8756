//! In-memory logger that records every call.
//!
//! Useful in tests of packages that log through a scope: configure the scope
//! with a `MemoryLogger`, exercise the package, then inspect the records.

use std::sync::{Arc, Mutex, MutexGuard};

use super::Logger;
use crate::record::{Args, Level, Record};

/// A thread-safe recording logger. Clones share the same record buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        // A panicking logger elsewhere must not hide what was recorded here.
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, level: Level, args: &Args) {
        self.lock().push(Record {
            level,
            args: args.clone(),
        });
    }

    /// Snapshot of all recorded calls, oldest first.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Arguments of every call made at `level`, oldest first.
    pub fn calls_for(&self, level: Level) -> Vec<Args> {
        self.lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.args.clone())
            .collect()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn fatal(&self, args: &Args) {
        self.push(Level::Fatal, args);
    }
    fn error(&self, args: &Args) {
        self.push(Level::Error, args);
    }
    fn warn(&self, args: &Args) {
        self.push(Level::Warn, args);
    }
    fn info(&self, args: &Args) {
        self.push(Level::Info, args);
    }
    fn debug(&self, args: &Args) {
        self.push(Level::Debug, args);
    }
    fn trace(&self, args: &Args) {
        self.push(Level::Trace, args);
    }
}
