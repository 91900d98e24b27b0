use std::any::Any;
use std::fmt;
use std::str::FromStr;

/// Severity of a single log call, ordered from most to least critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Fault,
    Error,
    Warning,
    Info,
    Debug,
    Verbose,
}

impl Severity {
    /// Every severity, most critical first.
    pub const ALL: [Severity; 6] = [
        Severity::Fault,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Verbose,
    ];

    /// Glyph printed at the start of the record header.
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Fault => "🔥",
            Severity::Error => "🚫",
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
            Severity::Debug => "🐛",
            Severity::Verbose => "💬",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fault => "fault",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Verbose => "verbose",
        }
    }

    /// Whether logging at this severity ends the process.
    pub fn is_fatal(self) -> bool {
        self == Severity::Fault
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown severity: {0}")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

/// Source location of a logging call.
///
/// Usually built by the logging macros from `file!()`, `line!()` and
/// [`function_name!`](crate::function_name).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        CallSite { file, line, function }
    }
}

/// One formatted logging call. Built, rendered, emitted and dropped within
/// a single entry point invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    /// Basename of the source file.
    pub file: String,
    pub line: u32,
    pub function: String,
    pub tag: Option<String>,
    pub message: String,
    pub thread: String,
}

impl LogRecord {
    /// Build a record for the calling thread.
    pub fn capture(
        severity: Severity,
        site: CallSite,
        tag: Option<&dyn fmt::Display>,
        message: &dyn fmt::Display,
    ) -> Self {
        LogRecord {
            severity,
            file: source_file_name(site.file).to_string(),
            line: site.line,
            function: site.function.to_string(),
            tag: tag.map(|tag| tag.to_string()),
            message: message.to_string(),
            thread: current_thread_label(),
        }
    }

    /// `[<glyph>] <file> [Line: <line>] <function> `
    pub fn header(&self) -> String {
        format!(
            "[{}] {} [Line: {}] {} ",
            self.severity.glyph(),
            self.file,
            self.line,
            self.function
        )
    }

    /// Full text handed to the backends.
    pub fn render(&self) -> String {
        let header = self.header();
        match &self.tag {
            Some(tag) => format!(
                "\n{header}[Thread: {}] [Tag: {tag}]\n>>>\n{}\n<<<\n",
                self.thread, self.message
            ),
            None => format!(
                "\n{header}[Thread: {}] \n>>>\n{}\n<<<\n",
                self.thread, self.message
            ),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Last `/`-separated component of `path`.
pub fn source_file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

/// Return the value itself when it is textual, an empty string otherwise.
pub fn convert_to_string(value: &dyn Any) -> String {
    if let Some(s) = value.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = value.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        String::new()
    }
}

/// `"main"` on the main thread (std names it so), the thread name when set,
/// `"-"` otherwise.
pub fn current_thread_label() -> String {
    std::thread::current().name().unwrap_or("-").to_string()
}
