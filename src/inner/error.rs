//! Inner service errors and its last-resort error response.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    BoxError,
};
use thiserror::Error;
use tower::timeout::error::Elapsed;

use crate::http::response::{error_chain, internal_error, panic_message};

/// Failures raised while producing data.
#[derive(Debug, Error)]
pub enum InnerError {
    /// Injected rejection of the request.
    #[error("{0}")]
    Processing(String),
}

impl InnerError {
    pub fn processing() -> Self {
        InnerError::Processing("processing error".to_string())
    }
}

/// `internal error in inner service: <message>\n<detail>`
pub fn fallback_body(message: &str, detail: &str) -> String {
    format!("internal error in inner service: {}\n{}", message, detail)
}

impl IntoResponse for InnerError {
    fn into_response(self) -> Response {
        let detail = format!("{:?}\n{}", self, error_chain(&self));
        tracing::error!(error = %self, detail = %detail, "an internal error occurred");
        internal_error(fallback_body(&self.to_string(), &detail))
    }
}

/// Catch-panic hook: panics get the same treatment as typed errors.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    let detail = format!("panic: {}", message);
    tracing::error!(error = %message, detail = %detail, "an internal error occurred");
    internal_error(fallback_body(&message, &detail))
}

/// Timeout hook: requests cut off by the timeout layer end here.
pub async fn handle_timeout(err: BoxError) -> Response {
    let message = if err.is::<Elapsed>() {
        "request timed out".to_string()
    } else {
        err.to_string()
    };
    let detail = format!("{:?}", err);
    tracing::error!(error = %message, detail = %detail, "an internal error occurred");
    internal_error(fallback_body(&message, &detail))
}
