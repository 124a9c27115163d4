//! HTTP plumbing shared by both services.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (request ID, trace span, timeout)
//!     → service router (inner::router / edge::router)
//!     → handler returns Ok(Json) or a typed error
//!     → typed error → response.rs (plain-text 500)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
