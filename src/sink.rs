use crate::record::{LogRecord, Severity};

/// Destination for rendered [`LogRecord`]s.
///
/// The facade keeps an ordered list of sinks and hands each record to the
/// first one whose [`is_available`](LogSink::is_available) probe succeeds.
/// Calls happen synchronously on the logging thread.
pub trait LogSink: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Capability probe.
    ///
    /// **Parameters**
    /// - `severity`: severity of the record about to be emitted.
    ///
    /// **Returns**
    /// - `true` if the underlying facility will keep a record at this
    ///   severity right now (a subscriber is installed and its filter lets
    ///   the level through, ...). A sink that would drop the record must
    ///   report `false` so the next one in the chain gets it.
    ///
    /// Default implementation reports the sink as always available.
    fn is_available(&self, _severity: Severity) -> bool {
        true
    }

    /// Write a single record.
    ///
    /// **Parameters**
    /// - `record`: the record, for sinks that map its fields.
    /// - `body`: `record.render()`, computed once by the facade.
    ///
    /// Failures are swallowed by the sink; logging never fails the caller.
    fn emit(&self, record: &LogRecord, body: &str);
}
