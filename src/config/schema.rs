//! Configuration schema definitions.
//!
//! Each service has its own root type. The shared sections (listener,
//! timeouts, observability) are reused by both. All types derive Serde
//! traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

/// Root configuration for the inner (data) service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InnerServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Failure injection settings.
    pub failure: FailureConfig,
}

impl Default for InnerServiceConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig {
                bind_address: "0.0.0.0:8081".to_string(),
            },
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            failure: FailureConfig::default(),
        }
    }
}

/// Root configuration for the edge service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EdgeServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Where the inner service lives.
    pub inner_service: InnerServiceEndpoint,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Failure injection for the inner service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FailureConfig {
    /// Probability in `[0, 1]` that a request fails with a processing error.
    pub probability: f64,
}

impl Default for FailureConfig {
    fn default() -> Self {
        Self { probability: 0.5 }
    }
}

/// Location of the inner service, as seen from the edge.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct InnerServiceEndpoint {
    /// Base URL (e.g., "http://localhost:8081"). Required.
    pub url: Option<String>,
}
