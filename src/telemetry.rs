//! `tracing` subscriber installation.

use crate::config::AppConfig;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the event filter: `RUST_LOG` when set and valid, otherwise the
/// configured directive, otherwise `info`.
#[must_use]
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber with a formatting layer.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init(config: &AppConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
