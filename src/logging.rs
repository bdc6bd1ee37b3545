//! Diagnostic logging setup
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary (or to tests that want to see the events).

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter (EnvFilter syntax)
pub const LOG_ENV: &str = "WEEKLY_TRACKER_LOG";

const DEFAULT_FILTER: &str = "weekly_tracker=warn";

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber, writing to stderr
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by an embedding app.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
