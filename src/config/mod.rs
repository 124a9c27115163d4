//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides applied by the binary
//!     → validation.rs (semantic checks)
//!     → InnerServiceConfig / EdgeServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs, except the
//!   edge's inner service URL
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    EdgeServiceConfig, FailureConfig, InnerServiceConfig, InnerServiceEndpoint, ListenerConfig,
    ObservabilityConfig, TimeoutConfig,
};
pub use validation::{Validate, ValidationError};
