//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, overridable via `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for production, pretty format for development

use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::ObservabilityConfig;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("apikey_gate={}", config.log_level.to_lowercase()).into())
}

/// Assemble a subscriber writing pretty or JSON lines to `writer`.
pub fn build_subscriber<W>(
    filter: EnvFilter,
    json: bool,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        Box::new(registry.with(tracing_subscriber::fmt::layer().json().with_writer(writer)))
    } else {
        Box::new(registry.with(tracing_subscriber::fmt::layer().with_writer(writer)))
    }
}

/// Install the global subscriber, failing if one is already set.
pub fn try_init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    build_subscriber(env_filter(config), config.json, std::io::stdout).try_init()
}

/// Install the global subscriber. Logs a warning if one was already set.
pub fn init_logging(config: &ObservabilityConfig) {
    if let Err(e) = try_init_logging(config) {
        tracing::warn!(error = %e, "Logging already initialized");
    }
}
