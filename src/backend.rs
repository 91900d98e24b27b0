use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::console::ConsoleSink;
use crate::sink::LogSink;
use crate::structured::StructuredSink;

/// Backends known to the facade, in fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Structured,
    Legacy,
    Console,
}

impl BackendKind {
    /// Probe order used when building a chain.
    pub const ORDER: [BackendKind; 3] = [
        BackendKind::Structured,
        BackendKind::Legacy,
        BackendKind::Console,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Structured => "structured",
            BackendKind::Legacy => "legacy",
            BackendKind::Console => "console",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the probe chain starts.
///
/// `Auto` probes every backend; a named backend skips the ones before it.
/// The console always closes the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum BackendPreference {
    #[default]
    Auto,
    Only(BackendKind),
}

impl BackendPreference {
    fn first(self) -> BackendKind {
        match self {
            BackendPreference::Auto => BackendKind::Structured,
            BackendPreference::Only(kind) => kind,
        }
    }
}

/// Parse a backend preference such as `"auto"`, `"structured"`, `"tracing"`,
/// `"legacy"`, `"log"` or `"console"`.
pub fn parse_backend(value: &str) -> Result<BackendPreference, BackendParseError> {
    let lower = value.trim().to_ascii_lowercase();

    match lower.as_str() {
        "" | "auto" => Ok(BackendPreference::Auto),
        "structured" | "tracing" => Ok(BackendPreference::Only(BackendKind::Structured)),
        "legacy" | "log" => Ok(BackendPreference::Only(BackendKind::Legacy)),
        "console" | "stdout" => Ok(BackendPreference::Only(BackendKind::Console)),
        _ => Err(BackendParseError::UnknownBackend(value.to_string())),
    }
}

impl FromStr for BackendPreference {
    type Err = BackendParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_backend(s)
    }
}

impl TryFrom<String> for BackendPreference {
    type Error = BackendParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_backend(&value)
    }
}

/// Error type returned when parsing a backend preference.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BackendParseError {
    #[error("unknown backend: {0:?}")]
    UnknownBackend(String),
}

/// Error type returned when building a backend chain.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BackendBuildError {
    #[error("legacy feature is not enabled")]
    LegacyFeatureDisabled,
}

/// Create the sink for a single backend kind.
pub fn make_sink(kind: BackendKind) -> Result<Arc<dyn LogSink>, BackendBuildError> {
    match kind {
        BackendKind::Structured => Ok(Arc::new(StructuredSink) as Arc<dyn LogSink>),
        BackendKind::Legacy => {
            #[cfg(feature = "legacy")]
            {
                Ok(Arc::new(crate::legacy::LegacySink) as Arc<dyn LogSink>)
            }

            #[cfg(not(feature = "legacy"))]
            {
                Err(BackendBuildError::LegacyFeatureDisabled)
            }
        }
        BackendKind::Console => Ok(Arc::new(ConsoleSink) as Arc<dyn LogSink>),
    }
}

/// Build the ordered probe chain for a preference.
///
/// A compiled-out legacy backend is an error only when it was asked for by
/// name; otherwise it is left out of the chain.
pub fn build_chain(preference: BackendPreference) -> Result<Vec<Arc<dyn LogSink>>, BackendBuildError> {
    let first = preference.first();
    let start = BackendKind::ORDER
        .iter()
        .position(|kind| *kind == first)
        .unwrap_or(0);

    let mut chain = Vec::with_capacity(BackendKind::ORDER.len() - start);
    for kind in &BackendKind::ORDER[start..] {
        match make_sink(*kind) {
            Ok(sink) => chain.push(sink),
            Err(e) if *kind == first && preference != BackendPreference::Auto => return Err(e),
            Err(_) => {}
        }
    }
    Ok(chain)
}
