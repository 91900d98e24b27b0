use crate::record::LogRecord;
use crate::sink::LogSink;
use std::sync::{Arc, Mutex};

/// A sink that keeps every record in memory.
///
/// Useful for unit tests of code that logs through a [`Facade`](crate::facade::Facade)
/// built by hand. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct CaptureSink {
    entries: Arc<Mutex<Vec<(LogRecord, String)>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered bodies in emission order.
    pub fn bodies(&self) -> Vec<String> {
        self.lock().iter().map(|(_, body)| body.clone()).collect()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().iter().map(|(record, _)| record.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(LogRecord, String)>> {
        // A panicking test thread may poison the lock; the data is still usable.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for CaptureSink {
    fn name(&self) -> &'static str {
        "capture"
    }

    fn emit(&self, record: &LogRecord, body: &str) {
        self.lock().push((record.clone(), body.to_string()));
    }
}
