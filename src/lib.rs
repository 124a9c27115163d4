//! Service-to-service HTTP relay demo.
//!
//! Two services built from this library:
//!
//! ```text
//!   client ──▶ edge-service ──▶ inner-service
//!              /data1  (naive relay)     /retrieveData
//!              /data2  (mapped relay)    (fails with a configured probability)
//! ```
//!
//! Every failure ends at the service's typed error, which renders a
//! plain-text 500; nothing reaches the client as a raw transport error.

// Services
pub mod edge;
pub mod inner;
pub mod model;

// Cross-cutting concerns
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{EdgeServiceConfig, InnerServiceConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use model::DataResponse;
