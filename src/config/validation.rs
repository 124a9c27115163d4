//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, probability within [0, 1])
//! - Check that addresses and URLs parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::{
    EdgeServiceConfig, InnerServiceConfig, ListenerConfig, TimeoutConfig,
};

/// A single semantic problem with a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Semantic checks run after a config has been deserialized.
pub trait Validate {
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

impl Validate for InnerServiceConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_listener(&self.listener, &mut errors);
        check_timeouts(&self.timeouts, &mut errors);

        let p = self.failure.probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            errors.push(ValidationError::new(
                "failure.probability",
                format!("must be between 0 and 1, got {}", p),
            ));
        }

        finish(errors)
    }
}

impl Validate for EdgeServiceConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_listener(&self.listener, &mut errors);
        check_timeouts(&self.timeouts, &mut errors);

        match self.inner_service.url.as_deref() {
            None => errors.push(ValidationError::new("inner_service.url", "is required")),
            Some(raw) => match url::Url::parse(raw) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => errors.push(ValidationError::new(
                    "inner_service.url",
                    format!("unsupported scheme '{}'", parsed.scheme()),
                )),
                Err(e) => errors.push(ValidationError::new(
                    "inner_service.url",
                    format!("invalid URL '{}': {}", raw, e),
                )),
            },
        }

        finish(errors)
    }
}

fn check_listener(listener: &ListenerConfig, errors: &mut Vec<ValidationError>) {
    if let Err(e) = listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("invalid socket address '{}': {}", listener.bind_address, e),
        ));
    }
}

fn check_timeouts(timeouts: &TimeoutConfig, errors: &mut Vec<ValidationError>) {
    if timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }
}

fn finish(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
