//! Tracing subscriber setup for hosts embedding the roster
//!
//! The library only emits `tracing` events; a presentation layer calls
//! [`init`] once at startup to see them.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "course_roster=info";

/// Install a stderr fmt subscriber filtered by `RUST_LOG`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn try_init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
}

/// Like [`try_init`], ignoring an already-installed subscriber.
pub fn init() {
    let _ = try_init();
}
