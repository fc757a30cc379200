//! Tracing subscriber setup.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the embedder's call. [`init`] is the default wiring binaries and
//! demos use: fmt output to stderr, filtered by `RUST_LOG` with an `info`
//! floor when unset.

use tracing_subscriber::EnvFilter;

/// Install the default fmt subscriber.
///
/// Safe to call more than once; later calls are no-ops (tests and demos
/// both go through here).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
