//! The payload exchanged between the services and returned to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A value together with the moment the inner service produced it.
///
/// Both services use this type, so `value` and `now` are the wire contract.
/// Instances are never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse {
    value: String,
    now: DateTime<Utc>,
}

impl DataResponse {
    /// Stamp `value` with the current UTC time.
    pub fn new(value: impl Into<String>) -> Self {
        Self::at(value, Utc::now())
    }

    pub fn at(value: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            now,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
