//! Environment variable names used by this crate for configuring the
//! process-wide facade without code changes.
//!
//! These are purely helpers; [`Facade`](crate::facade::Facade) itself never
//! reads the environment.

/// Backend preference: `auto`, `structured`, `legacy` or `console`.
pub const GLYPH_LOG_BACKEND_ENV: &str = "GLYPH_LOG_BACKEND";

/// Whether [`init_facade`](crate::init::init_facade) installs a stdout
/// `tracing` subscriber: `true`/`false`/`1`/`0`.
pub const GLYPH_LOG_STDOUT_ENV: &str = "GLYPH_LOG_STDOUT";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Interpret a flag value: `true`/`1` or `false`/`0`, case-insensitive.
/// Anything else yields `None`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
