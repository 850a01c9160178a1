//! Process-wide logging setup.
//!
//! Library code only emits `tracing` events; the binary decides where they
//! go by calling [`init_tracing`] once at start-up.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Builds the filter used by the subscriber.
///
/// Directives come from `RUST_LOG`; anything it does not mention logs at
/// `info`. Malformed directives are ignored rather than aborting start-up.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Installs a compact `fmt` subscriber writing to stderr.
///
/// Calling it more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let _already_installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
