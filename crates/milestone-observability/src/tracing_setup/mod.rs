//! Tracing setup — structured JSON logging with env-based filtering.

pub mod events;

use milestone_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "MILESTONE_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `MILESTONE_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Panics if a global subscriber is
/// already installed; call once at host startup.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .init();
}

/// Initialize tracing with the configured log level unless `MILESTONE_LOG` overrides it.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

/// Initialize tracing with a custom filter string (for testing or embedding).
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
