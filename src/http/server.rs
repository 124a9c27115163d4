//! HTTP server setup shared by the inner and edge services.
//!
//! # Responsibilities
//! - Wrap a service router with the common middleware (tracing, request ID)
//! - Bind the server to a listener
//! - Shut down gracefully on Ctrl+C or an in-process trigger

use axum::{body::Body, http::Request, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::http::request::{request_id_of, UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::{shutdown_requested, ShutdownSignal};

/// HTTP server for one of the services.
pub struct HttpServer {
    name: &'static str,
    router: Router,
}

impl HttpServer {
    /// Wrap a fully-routed service in the common middleware stack.
    ///
    /// `app` must already carry its own fallbacks (panics, timeouts) so
    /// that every failure renders in the service's error format.
    pub fn new(name: &'static str, app: Router) -> Self {
        let router = Self::build_router(name, app);
        Self { name, router }
    }

    /// Layers run outermost-last: the request ID is set before the trace
    /// span opens, so the span can record it.
    fn build_router(name: &'static str, app: Router) -> Router {
        app.layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    service = name,
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id_of(request),
                )
            }))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// The router with all middleware applied.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(service = self.name, address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_requested(shutdown))
            .await?;

        tracing::info!(service = self.name, "HTTP server stopped");
        Ok(())
    }
}
