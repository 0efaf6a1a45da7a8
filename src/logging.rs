use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const DEFAULT_DEBUG_LOG: &str = "kira-platemap.log";

/// Console logging at `info` (or `RUST_LOG`), plus a debug-level trace file
/// when `debug_log` is given.
pub fn init(debug_log: Option<&Path>) -> std::io::Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let trace_file = match debug_log {
        Some(path) => {
            let file = File::create(path)?;
            Some(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(console)
        .with(trace_file)
        .try_init();
    Ok(())
}
