//! Tracing subscriber installation.
//!
//! Logs go to stderr as JSON so stdout stays free for command output.

use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, or from `default_filter` when the
/// variable is missing or unparsable.
pub fn filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
