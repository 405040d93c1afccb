//! Tracing setup.
//!
//! `RUST_LOG` selects levels (default `info`); `MAKE_RSS_LOG_FORMAT=json`
//! switches to one JSON object per line.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn logs_are_json() -> bool {
    matches!(std::env::var("MAKE_RSS_LOG_FORMAT").as_deref(), Ok("json"))
}

/// Log to stderr.
pub fn init_stderr() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339());
    let builder = tracing_subscriber::registry().with(filter);

    if logs_are_json() {
        let _ = builder.with(fmt_layer.json().flatten_event(true)).try_init();
    } else {
        let _ = builder.with(fmt_layer.compact()).try_init();
    }
}

/// Log to `path`, appending.  Used while the terminal belongs to the UI.
pub fn init_file(path: &Path) -> std::io::Result<()> {
    let file = File::options().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_timer(fmt::time::UtcTime::rfc_3339());
    let builder = tracing_subscriber::registry().with(filter);

    if logs_are_json() {
        let _ = builder.with(fmt_layer.json().flatten_event(true)).try_init();
    } else {
        let _ = builder.with(fmt_layer).try_init();
    }
    Ok(())
}
