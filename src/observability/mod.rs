//! Observability subsystem.
//!
//! Only structured logging lives here. Every service emits `tracing`
//! events; the binaries install the subscriber through [`logging`].
//! Request IDs are attached per request by the HTTP layer so log lines
//! from one exchange can be correlated.

pub mod logging;

pub use logging::init_logging;
