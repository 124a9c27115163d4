//! Edge service: relays the inner service's data to clients.
//!
//! # Data Flow
//! ```text
//! GET /data1 ─┐
//!             ├→ InnerClient::retrieve_data → inner GET /retrieveData
//! GET /data2 ─┘
//!     success → DataResponse JSON
//!     failure → /data1: EdgeError::Upstream
//!               /data2: mapping.rs (first match) → EdgeError::Mapped | Upstream
//!     EdgeError → plain-text 500 (error.rs)
//! ```

pub mod client;
pub mod error;
pub mod handlers;
pub mod mapping;

use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, routing::get, Router};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::{EdgeServiceConfig, TimeoutConfig};
use crate::http::HttpServer;

pub use client::{ClientError, InnerClient, SystemResolver, UnknownHost, UpstreamError};
pub use error::EdgeError;
pub use mapping::{map_error, ErrorMapping, DATA2_MAPPINGS};

/// State injected into the edge handlers.
#[derive(Debug, Clone)]
pub struct EdgeState {
    pub inner: InnerClient,
}

/// Routes of the edge service with its fallbacks, without the common
/// middleware.
pub fn router(state: EdgeState, timeouts: &TimeoutConfig) -> Router {
    let routes = Router::new()
        .route("/data1", get(handlers::data1))
        .route("/data2", get(handlers::data2))
        .with_state(state);
    with_fallbacks(routes, timeouts)
}

/// Render panics and timeouts in the edge service's error format.
pub fn with_fallbacks(routes: Router, timeouts: &TimeoutConfig) -> Router {
    routes
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(error::handle_timeout))
                .layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs))),
        )
}

/// Build the complete edge service from its configuration.
pub fn server(config: &EdgeServiceConfig) -> Result<HttpServer, ClientError> {
    let url = config
        .inner_service
        .url
        .as_deref()
        .ok_or(ClientError::MissingUrl)?;
    let state = EdgeState {
        inner: InnerClient::new(url)?,
    };
    Ok(HttpServer::new(
        "edge-service",
        router(state, &config.timeouts),
    ))
}
