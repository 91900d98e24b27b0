#![cfg(feature = "legacy")]

use std::sync::{Arc, Mutex};

use glyph_log::capture_sink::CaptureSink;
use glyph_log::facade::Facade;
use glyph_log::legacy::LegacySink;
use glyph_log::sink::LogSink;
use glyph_log::record::{CallSite, Severity};
use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(Level, String, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Walks the probe chain as backends appear: console, then legacy once a
/// `log` logger exists, then structured under a `tracing` subscriber.
#[test]
fn probe_chain_follows_available_backends() {
    let facade = Facade::auto();
    assert_eq!(facade.active_sink(Severity::Info), "console");

    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);
    assert_eq!(facade.active_sink(Severity::Info), "legacy");

    let site = CallSite::new("src/app.rs", 9, "launch");
    for severity in Severity::ALL.into_iter().skip(1) {
        facade.log(severity, site, None, &"legacy body");
    }

    let records = RECORDS.lock().unwrap().clone();
    let levels: Vec<Level> = records.iter().map(|(level, _, _)| *level).collect();
    assert_eq!(
        levels,
        vec![Level::Error, Level::Warn, Level::Info, Level::Info, Level::Info]
    );
    assert!(records.iter().all(|(_, target, _)| target == "glyph_log"));
    assert!(records[0].2.starts_with("\n[🚫] app.rs [Line: 9] launch [Thread: "));
    assert!(records[0].2.ends_with("] \n>>>\nlegacy body\n<<<\n"));

    tracing::subscriber::with_default(tracing_subscriber::registry(), || {
        assert_eq!(facade.active_sink(Severity::Info), "structured");
        facade.info(site, None, &"structured body");
    });
    assert_eq!(RECORDS.lock().unwrap().len(), records.len());

    // A logger capped at Warn no longer takes info/debug/verbose.
    log::set_max_level(LevelFilter::Warn);
    let capture = CaptureSink::new();
    let capped = Facade::new(vec![
        Arc::new(LegacySink) as Arc<dyn LogSink>,
        Arc::new(capture.clone()) as Arc<dyn LogSink>,
    ]);
    assert_eq!(capped.active_sink(Severity::Warning), "legacy");
    assert_eq!(capped.active_sink(Severity::Verbose), "capture");

    capped.warning(site, None, &"kept");
    capped.info(site, None, &"below max level");
    capped.debug(site, None, &"below max level");
    capped.verbose(site, None, &"below max level");

    assert_eq!(RECORDS.lock().unwrap().len(), records.len() + 1);
    let severities: Vec<Severity> = capture.records().iter().map(|r| r.severity).collect();
    assert_eq!(severities, vec![Severity::Info, Severity::Debug, Severity::Verbose]);
}
