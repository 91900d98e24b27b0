use crate::record::{LogRecord, Severity};
use crate::sink::LogSink;
use crate::structured::TARGET;

/// Severity classes of an OS-style legacy log call. Coarser than
/// [`Severity`]: `debug` and `verbose` both fall into [`LegacyLevel::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyLevel {
    Fault,
    Error,
    Warning,
    Info,
    Default,
}

impl LegacyLevel {
    pub fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Fault => LegacyLevel::Fault,
            Severity::Error => LegacyLevel::Error,
            Severity::Warning => LegacyLevel::Warning,
            Severity::Info => LegacyLevel::Info,
            Severity::Debug | Severity::Verbose => LegacyLevel::Default,
        }
    }

    /// `log` has no default or fault class; both land on the nearest level
    /// that an installed logger shows out of the box.
    pub fn log_level(self) -> log::Level {
        match self {
            LegacyLevel::Fault | LegacyLevel::Error => log::Level::Error,
            LegacyLevel::Warning => log::Level::Warn,
            LegacyLevel::Info | LegacyLevel::Default => log::Level::Info,
        }
    }
}

/// Sink forwarding records to whatever logger is registered with the `log`
/// facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LegacySink;

impl LogSink for LegacySink {
    fn name(&self) -> &'static str {
        "legacy"
    }

    /// Asks both the global `log::max_level` and the installed logger, so a
    /// missing logger or a level filtered out reports `false`.
    fn is_available(&self, severity: Severity) -> bool {
        let level = LegacyLevel::from_severity(severity).log_level();
        log::log_enabled!(target: TARGET, level)
    }

    fn emit(&self, record: &LogRecord, body: &str) {
        let level = LegacyLevel::from_severity(record.severity).log_level();
        log::log!(target: TARGET, level, "{}", body);
    }
}
