//! Inner service: produces the data and fails some requests on purpose.
//!
//! # Data Flow
//! ```text
//! GET /retrieveData
//!     → FailureInjector draw
//!         fail    → InnerError → plain-text 500 (error.rs)
//!         succeed → DataResponse JSON
//! ```

pub mod error;
pub mod failure;
pub mod handler;

use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, routing::get, Router};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::{InnerServiceConfig, TimeoutConfig};
use crate::http::HttpServer;

pub use error::InnerError;
pub use failure::{FailureInjector, InvalidProbability};
pub use handler::GREETING;

/// Path of the single data endpoint.
pub const RETRIEVE_DATA_PATH: &str = "/retrieveData";

/// State injected into the inner handlers.
#[derive(Debug, Clone)]
pub struct InnerState {
    pub failure: FailureInjector,
}

/// Routes of the inner service with its fallbacks, without the common
/// middleware.
pub fn router(state: InnerState, timeouts: &TimeoutConfig) -> Router {
    let routes = Router::new()
        .route(RETRIEVE_DATA_PATH, get(handler::retrieve_data))
        .with_state(state);
    with_fallbacks(routes, timeouts)
}

/// Render panics and timeouts in the inner service's error format.
pub fn with_fallbacks(routes: Router, timeouts: &TimeoutConfig) -> Router {
    routes
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(error::handle_timeout))
                .layer(TimeoutLayer::new(Duration::from_secs(timeouts.request_secs))),
        )
}

/// Build the complete inner service from its configuration.
pub fn server(config: &InnerServiceConfig) -> Result<HttpServer, InvalidProbability> {
    let state = InnerState {
        failure: FailureInjector::new(config.failure.probability)?,
    };
    Ok(HttpServer::new(
        "inner-service",
        router(state, &config.timeouts),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataResponse;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use chrono::Utc;
    use tower::ServiceExt;

    async fn explode() -> &'static str {
        panic!("inner exploded")
    }

    async fn stall() -> &'static str {
        tokio::time::sleep(Duration::from_secs(10)).await;
        "too late"
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    fn request() -> Request<Body> {
        Request::builder()
            .uri(RETRIEVE_DATA_PATH)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_data() {
        let start = Utc::now();
        let app = router(
            InnerState {
                failure: FailureInjector::never(),
            },
            &TimeoutConfig::default(),
        );

        let response = app.oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let data: DataResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(data.value(), GREETING);
        assert!(data.now() >= start);
    }

    #[tokio::test]
    async fn test_failure_returns_plain_text_500() {
        let app = router(
            InnerState {
                failure: FailureInjector::always(),
            },
            &TimeoutConfig::default(),
        );

        let response = app.oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.starts_with("internal error in inner service: processing error\n"));
    }

    #[tokio::test]
    async fn test_outcomes_are_independent() {
        let app = router(
            InnerState {
                failure: FailureInjector::new(0.5).unwrap(),
            },
            &TimeoutConfig::default(),
        );

        let mut failures = 0;
        for _ in 0..200 {
            let response = app.clone().oneshot(request()).await.unwrap();
            match response.status() {
                StatusCode::OK => {}
                StatusCode::INTERNAL_SERVER_ERROR => failures += 1,
                other => panic!("unexpected status {}", other),
            }
        }
        assert!((60..=140).contains(&failures), "failures: {}", failures);
    }

    #[tokio::test]
    async fn test_panic_renders_inner_fallback() {
        let routes = Router::new().route("/boom", get(explode));
        let app = with_fallbacks(routes, &TimeoutConfig::default());

        let request = Request::builder().uri("/boom").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_text(response).await,
            "internal error in inner service: inner exploded\npanic: inner exploded"
        );
    }

    #[tokio::test]
    async fn test_timeout_renders_inner_fallback() {
        let routes = Router::new().route("/slow", get(stall));
        let app = with_fallbacks(routes, &TimeoutConfig { request_secs: 1 });

        let request = Request::builder().uri("/slow").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response)
            .await
            .starts_with("internal error in inner service: request timed out\n"));
    }

    #[test]
    fn test_server_rejects_bad_probability() {
        let mut config = InnerServiceConfig::default();
        config.failure.probability = 2.0;
        assert!(server(&config).is_err());
    }
}
