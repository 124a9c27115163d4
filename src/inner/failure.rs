//! Failure injection.
//!
//! Each request draws independently; no state is carried between draws.

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("failure probability must be within [0, 1], got {0}")]
pub struct InvalidProbability(pub f64);

/// Decides, per request, whether the inner service should fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailureInjector {
    probability: f64,
}

impl FailureInjector {
    pub fn new(probability: f64) -> Result<Self, InvalidProbability> {
        if probability.is_finite() && (0.0..=1.0).contains(&probability) {
            Ok(Self { probability })
        } else {
            Err(InvalidProbability(probability))
        }
    }

    /// An injector that never fails.
    pub fn never() -> Self {
        Self { probability: 0.0 }
    }

    /// An injector that always fails.
    pub fn always() -> Self {
        Self { probability: 1.0 }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Draw from the thread-local RNG.
    pub fn should_fail(&self) -> bool {
        self.should_fail_with(&mut rand::thread_rng())
    }

    /// Draw from a caller-supplied RNG.
    pub fn should_fail_with<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen_bool(self.probability)
    }
}
