//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for a service binary
//! - Derive the default filter from the configured log level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` overrides the configured level when set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Default filter directives for a configured level.
pub fn default_directives(config: &ObservabilityConfig) -> String {
    format!(
        "relay_demo={level},tower_http={level}",
        level = config.log_level
    )
}

/// Install the global subscriber. Call once, at the top of `main`.
pub fn init_logging(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(config).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
        };
        assert_eq!(
            default_directives(&config),
            "relay_demo=debug,tower_http=debug"
        );
    }
}
