use crate::backend::{build_chain, BackendPreference};
use crate::console::ConsoleSink;
use crate::record::{CallSite, LogRecord, Severity};
use crate::sink::LogSink;
use crate::terminate::{AbortTerminator, Terminator};
use std::fmt::Display;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Facade> = OnceLock::new();

/// Leveled logging entry points over an ordered list of sinks.
///
/// Each call renders one [`LogRecord`] and hands it to the first sink whose
/// probe accepts the record's severity; when none does, the record goes to
/// stdout.
/// A facade holds no mutable state and can be shared freely across threads.
#[derive(Clone)]
pub struct Facade {
    sinks: Vec<Arc<dyn LogSink>>,
    terminator: Arc<dyn Terminator>,
}

impl Facade {
    /// Create a facade with the given probe order and the aborting
    /// terminator.
    pub fn new(sinks: Vec<Arc<dyn LogSink>>) -> Self {
        Facade {
            sinks,
            terminator: Arc::new(AbortTerminator),
        }
    }

    /// Facade probing every backend in the default order.
    pub fn auto() -> Self {
        // `Auto` leaves out compiled-out backends instead of failing.
        Facade::new(build_chain(BackendPreference::Auto).unwrap_or_default())
    }

    /// Replace the primitive invoked after a `fault` record.
    pub fn with_terminator(mut self, terminator: Arc<dyn Terminator>) -> Self {
        self.terminator = terminator;
        self
    }

    /// Names of the configured sinks, in probe order.
    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|sink| sink.name()).collect()
    }

    /// Name of the sink a record at `severity` would be routed to right now.
    pub fn active_sink(&self, severity: Severity) -> &'static str {
        self.select(severity).name()
    }

    fn select(&self, severity: Severity) -> &dyn LogSink {
        self.sinks
            .iter()
            .find(|sink| sink.is_available(severity))
            .map(|sink| &**sink)
            .unwrap_or(&ConsoleSink)
    }

    /// Render and emit a record at `severity`, returning the rendered body.
    ///
    /// `Severity::Fault` never returns: the record is emitted and the
    /// terminator runs, exactly as with [`Facade::fault`].
    pub fn log(
        &self,
        severity: Severity,
        site: CallSite,
        tag: Option<&dyn Display>,
        message: &dyn Display,
    ) -> String {
        let body = self.emit(severity, site, tag, message);
        if severity.is_fatal() {
            self.terminator.terminate(&body)
        }
        body
    }

    /// Log at `fault` severity, then terminate.
    pub fn fault(&self, site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) -> ! {
        let body = self.emit(Severity::Fault, site, tag, message);
        self.terminator.terminate(&body)
    }

    fn emit(
        &self,
        severity: Severity,
        site: CallSite,
        tag: Option<&dyn Display>,
        message: &dyn Display,
    ) -> String {
        let record = LogRecord::capture(severity, site, tag, message);
        let body = record.render();
        self.select(severity).emit(&record, &body);
        body
    }

    pub fn error(&self, site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) {
        self.log(Severity::Error, site, tag, message);
    }

    pub fn warning(&self, site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) {
        self.log(Severity::Warning, site, tag, message);
    }

    pub fn info(&self, site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) {
        self.log(Severity::Info, site, tag, message);
    }

    pub fn debug(&self, site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) {
        self.log(Severity::Debug, site, tag, message);
    }

    pub fn verbose(&self, site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) {
        self.log(Severity::Verbose, site, tag, message);
    }
}

impl Default for Facade {
    fn default() -> Self {
        Facade::auto()
    }
}

/// Install `facade` as the process-wide instance.
///
/// **Returns**
/// - `Err(facade)` handing the argument back if an instance is already in
///   place, including one created lazily by an earlier logging call.
pub fn set_global(facade: Facade) -> Result<(), Facade> {
    GLOBAL.set(facade)
}

/// The process-wide facade, built from the environment on first use.
pub fn global() -> &'static Facade {
    GLOBAL.get_or_init(crate::init::facade_from_env)
}

pub fn fault(site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) -> ! {
    global().fault(site, tag, message)
}

pub fn error(site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) {
    global().error(site, tag, message)
}

pub fn warning(site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) {
    global().warning(site, tag, message)
}

pub fn info(site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) {
    global().info(site, tag, message)
}

pub fn debug(site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) {
    global().debug(site, tag, message)
}

pub fn verbose(site: CallSite, tag: Option<&dyn Display>, message: &dyn Display) {
    global().verbose(site, tag, message)
}
