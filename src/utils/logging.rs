//! Tracing setup for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Installs a console subscriber honoring `RUST_LOG`, defaulting to `info`.
///
/// The library itself only emits events; embedding applications call this (or
/// install their own subscriber) if they want to see them. Calling it twice
/// is harmless — the second attempt is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
