//! Tracing setup: structured logging and event helpers.

pub mod events;

use std::sync::Once;

use seeker_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SEEKER_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber with JSON output.
///
/// Filter comes from `SEEKER_LOG`, defaulting to `info`. Only the first call
/// in a process has any effect.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, true);
}

/// Install the global subscriber from config; `SEEKER_LOG` still wins when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Install with an explicit filter string (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), true);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true);
        // Another subscriber may already be installed by the host; keep it.
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
