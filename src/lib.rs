pub mod bbox;
pub mod commands;
pub mod crs;
pub mod error;
pub mod geometry;
pub mod reproject;
pub mod stac;
pub mod text;

use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
/// stdout is left for command output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
