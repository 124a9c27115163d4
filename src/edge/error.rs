//! Edge service errors and its last-resort error response.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    BoxError,
};
use thiserror::Error;
use tower::timeout::error::Elapsed;

use crate::edge::client::UpstreamError;
use crate::http::response::{internal_error, panic_message};

/// Failures surfaced by the edge handlers.
#[derive(Debug, Error)]
pub enum EdgeError {
    /// Upstream failure relayed without translation.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Upstream failure translated by an error mapping.
    #[error("{message}")]
    Mapped {
        message: String,
        #[source]
        source: UpstreamError,
    },
}

/// `internal error: <message>`
pub fn fallback_body(message: &str) -> String {
    format!("internal error: {}", message)
}

impl IntoResponse for EdgeError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, detail = ?self, "an internal error occurred");
        internal_error(fallback_body(&self.to_string()))
    }
}

/// Catch-panic hook: panics get the same treatment as typed errors.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    let detail = format!("panic: {}", message);
    tracing::error!(error = %message, detail = %detail, "an internal error occurred");
    internal_error(fallback_body(&message))
}

/// Timeout hook: requests cut off by the timeout layer end here.
pub async fn handle_timeout(err: BoxError) -> Response {
    let message = if err.is::<Elapsed>() {
        "request timed out".to_string()
    } else {
        err.to_string()
    };
    tracing::error!(error = %message, detail = ?err, "an internal error occurred");
    internal_error(fallback_body(&message))
}
