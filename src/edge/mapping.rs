//! Translation of upstream failures into descriptive messages.
//!
//! Mappings are evaluated in order against the original error; the first
//! match wins and nothing matched falls through to the generic fallback.

use crate::edge::client::UpstreamError;
use crate::edge::error::EdgeError;

/// A named (predicate, message) pair.
#[derive(Clone, Copy)]
pub struct ErrorMapping {
    pub name: &'static str,
    pub matches: fn(&UpstreamError) -> bool,
    pub message: fn(&UpstreamError) -> String,
}

impl std::fmt::Debug for ErrorMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorMapping").field("name", &self.name).finish()
    }
}

/// Mappings applied by `/data2`.
pub const DATA2_MAPPINGS: &[ErrorMapping] = &[
    ErrorMapping {
        name: "upstream-status",
        matches: is_status,
        message: upstream_body,
    },
    ErrorMapping {
        name: "unknown-host",
        matches: is_unknown_host,
        message: address_unknown,
    },
    ErrorMapping {
        name: "connection-failed",
        matches: UpstreamError::is_connect,
        message: not_available,
    },
];

fn is_status(err: &UpstreamError) -> bool {
    matches!(err, UpstreamError::Status { .. })
}

fn upstream_body(err: &UpstreamError) -> String {
    match err {
        UpstreamError::Status { body, .. } => body.clone(),
        other => other.to_string(),
    }
}

fn is_unknown_host(err: &UpstreamError) -> bool {
    err.unknown_host().is_some()
}

fn address_unknown(err: &UpstreamError) -> String {
    match err.unknown_host() {
        Some(host) => format!("internal service address unknown: {}", host),
        None => err.to_string(),
    }
}

fn not_available(_: &UpstreamError) -> String {
    "internal service not available: data service".to_string()
}

/// Apply the first matching mapping, or leave the error unmapped.
pub fn map_error(mappings: &[ErrorMapping], err: UpstreamError) -> EdgeError {
    match mappings.iter().find(|mapping| (mapping.matches)(&err)) {
        Some(mapping) => {
            let message = (mapping.message)(&err);
            tracing::debug!(mapping = mapping.name, error = %err, "Mapped upstream error");
            EdgeError::Mapped {
                message,
                source: err,
            }
        }
        None => EdgeError::Upstream(err),
    }
}
