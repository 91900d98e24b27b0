use std::sync::Arc;

use glyph_log::{
    facade::{self, Facade},
    record::LogRecord,
    sink::LogSink,
};

/// Example of integrating a completely custom backend by implementing
/// the `LogSink` trait directly. Imagine this talks to a device console
/// for which this crate does not provide a built-in sink.
struct SerialConsoleSink;

impl LogSink for SerialConsoleSink {
    fn name(&self) -> &'static str {
        "serial"
    }

    fn emit(&self, record: &LogRecord, body: &str) {
        // Here you would write to the device. For the sake of example we
        // just print the record.
        println!("[serial:{}]{}", record.severity, body);
    }
}

fn main() {
    let facade = Facade::new(vec![Arc::new(SerialConsoleSink) as Arc<dyn LogSink>]);
    if facade::set_global(facade).is_err() {
        eprintln!("facade already installed");
    }

    glyph_log::info!("custom backend example started");
    glyph_log::error!(tag: "serial", "simulated error sent via custom backend");
}
