// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// The log level comes from `RUST_LOG` and defaults to `info`, e.g.
/// `RUST_LOG=replenish_engine=debug` to watch the pipeline stages.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Subscriber setup for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
