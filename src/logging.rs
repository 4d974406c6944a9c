//! Tracing setup for the `finance` binary
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the application.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used, falling back
/// to warnings only if it does not parse. Later calls are ignored.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
