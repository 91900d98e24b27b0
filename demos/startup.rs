use glyph_log::init::{init_facade_with_config, FacadeConfig};

/// Startup logging as an application screen does it: one untagged literal
/// message per non-fatal severity.
fn main() {
    if let Err(e) = init_facade_with_config(FacadeConfig::default()) {
        eprintln!("logging not initialized: {e}");
    }

    glyph_log::warning!("warning log");
    glyph_log::info!("info log");
    glyph_log::debug!("debug log");
    glyph_log::verbose!("verbose log");
    glyph_log::error!("error log");

    glyph_log::info!(tag: "startup", "{} severities exercised", 5);
    // glyph_log::fault!("fault log");
}
