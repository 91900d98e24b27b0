use crate::record::{LogRecord, Severity};
use crate::sink::LogSink;
use tracing::subscriber::NoSubscriber;
use tracing::Level;

/// Target attached to every event emitted by this crate's sinks.
pub const TARGET: &str = "glyph_log";

/// Sink that turns records into `tracing` events.
///
/// Available when the current dispatcher (scoped or global) enables an event
/// of the record's level under [`TARGET`]. The rendered body is the event
/// message; the record fields are attached as event fields so subscribers
/// can filter on them.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuredSink;

impl StructuredSink {
    /// `tracing` level used for each severity. `fault` shares `ERROR` and is
    /// told apart by the `fault = true` field.
    pub fn level_for(severity: Severity) -> Level {
        match severity {
            Severity::Fault | Severity::Error => Level::ERROR,
            Severity::Warning => Level::WARN,
            Severity::Info => Level::INFO,
            Severity::Debug => Level::DEBUG,
            Severity::Verbose => Level::TRACE,
        }
    }
}

// `tracing` macros need a constant level; keep the arms in `emit` and
// `is_available` in sync with `level_for`.
macro_rules! emit_event {
    ($level:expr, $record:expr, $body:expr) => {
        tracing::event!(
            target: TARGET,
            $level,
            fault = $record.severity.is_fatal(),
            severity = $record.severity.as_str(),
            file = $record.file.as_str(),
            line = $record.line,
            function = $record.function.as_str(),
            thread = $record.thread.as_str(),
            tag = $record.tag.as_deref(),
            "{}",
            $body
        )
    };
}

impl LogSink for StructuredSink {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn is_available(&self, severity: Severity) -> bool {
        // `enabled!` short-circuits on a callsite interest cached across every
        // registered dispatcher, which says nothing about a thread that has
        // no subscriber at all.
        let has_subscriber =
            tracing::dispatcher::get_default(|dispatch| !dispatch.is::<NoSubscriber>());
        if !has_subscriber {
            return false;
        }

        match severity {
            Severity::Fault | Severity::Error => tracing::enabled!(target: TARGET, Level::ERROR),
            Severity::Warning => tracing::enabled!(target: TARGET, Level::WARN),
            Severity::Info => tracing::enabled!(target: TARGET, Level::INFO),
            Severity::Debug => tracing::enabled!(target: TARGET, Level::DEBUG),
            Severity::Verbose => tracing::enabled!(target: TARGET, Level::TRACE),
        }
    }

    fn emit(&self, record: &LogRecord, body: &str) {
        match record.severity {
            Severity::Fault | Severity::Error => emit_event!(Level::ERROR, record, body),
            Severity::Warning => emit_event!(Level::WARN, record, body),
            Severity::Info => emit_event!(Level::INFO, record, body),
            Severity::Debug => emit_event!(Level::DEBUG, record, body),
            Severity::Verbose => emit_event!(Level::TRACE, record, body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::Registry;

    #[derive(Debug, Clone)]
    struct Captured {
        level: Level,
        target: String,
        fields: BTreeMap<String, String>,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    struct FieldVisitor<'a> {
        fields: &'a mut BTreeMap<String, String>,
    }

    impl<'a> Visit for FieldVisitor<'a> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.fields.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.fields.insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    impl<S> Layer<S> for CaptureLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = BTreeMap::new();
            event.record(&mut FieldVisitor { fields: &mut fields });
            self.events.lock().unwrap().push(Captured {
                level: *event.metadata().level(),
                target: event.metadata().target().to_string(),
                fields,
            });
        }
    }

    fn record(severity: Severity, tag: Option<&str>) -> LogRecord {
        LogRecord {
            severity,
            file: "main.rs".to_string(),
            line: 3,
            function: "run".to_string(),
            tag: tag.map(str::to_string),
            message: "hello".to_string(),
            thread: "main".to_string(),
        }
    }

    #[test]
    fn unavailable_without_subscriber() {
        for severity in Severity::ALL {
            assert!(!StructuredSink.is_available(severity));
        }
    }

    #[test]
    fn available_under_scoped_subscriber() {
        let subscriber = Registry::default().with(CaptureLayer::default());
        tracing::subscriber::with_default(subscriber, || {
            for severity in Severity::ALL {
                assert!(StructuredSink.is_available(severity));
            }
        });
    }

    #[test]
    fn filtered_levels_are_unavailable() {
        let subscriber = Registry::default()
            .with(CaptureLayer::default().with_filter(LevelFilter::INFO));
        tracing::subscriber::with_default(subscriber, || {
            assert!(StructuredSink.is_available(Severity::Fault));
            assert!(StructuredSink.is_available(Severity::Warning));
            assert!(StructuredSink.is_available(Severity::Info));
            assert!(!StructuredSink.is_available(Severity::Debug));
            assert!(!StructuredSink.is_available(Severity::Verbose));
        });
    }

    #[test]
    fn events_carry_mapped_level_and_fields() {
        let layer = CaptureLayer::default();
        let events = Arc::clone(&layer.events);
        let subscriber = Registry::default().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            for severity in Severity::ALL {
                let r = record(severity, Some("net"));
                StructuredSink.emit(&r, &r.render());
            }
        });

        let events = events.lock().unwrap();
        let levels: Vec<Level> = events.iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![Level::ERROR, Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE]
        );

        let fault = &events[0];
        assert_eq!(fault.target, TARGET);
        assert_eq!(fault.fields["fault"], "true");
        assert_eq!(fault.fields["tag"], "net");
        assert_eq!(fault.fields["function"], "run");
        assert_eq!(fault.fields["message"], record(Severity::Fault, Some("net")).render());
        assert_eq!(events[1].fields["fault"], "false");
    }
}
