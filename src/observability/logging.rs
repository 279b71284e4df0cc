//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config and environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` overrides the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Build the filter: `RUST_LOG` first, then the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(format!(
            "food_dashboard={level},tower_http={level}",
            level = config.log_level
        ))
        .unwrap_or_else(|_| "food_dashboard=info,tower_http=info".into())
    })
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(config: &ObservabilityConfig) {
    let result = tracing_subscriber::registry()
        .with(build_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if result.is_ok() {
        tracing::debug!(log_level = %config.log_level, "Logging initialized");
    }
}
