//! Tracing/logging setup shared by every binary in the workspace.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide logging with the default filter (`info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize process-wide logging, falling back to `default_filter` when
/// `RUST_LOG` is unset or invalid.
pub fn init_with_default(default_filter: &str) {
    tracing::init(default_filter);
}
