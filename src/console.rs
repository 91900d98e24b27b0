use crate::record::LogRecord;
use crate::sink::LogSink;
use std::io::Write;

/// Last-resort sink writing the rendered body to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn name(&self) -> &'static str {
        "console"
    }

    fn emit(&self, _record: &LogRecord, body: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout must not take the caller down with it.
        let _ = writeln!(out, "{body}");
        let _ = out.flush();
    }
}
