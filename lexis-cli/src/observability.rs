//! Tracing setup for the binary. Logs go to stderr; stdout carries answers.

use lexis_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Overrides `[observability].log_level` when set.
pub const LOG_ENV_VAR: &str = "LEXIS_LOG";

pub fn init_tracing(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
