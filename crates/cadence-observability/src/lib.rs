//! # cadence-observability
//!
//! Structured logging for the Cadence engine: subscriber initialisation,
//! per-operation spans, and the warning events emitted when a collaborator
//! falls back to its default.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::init_tracing;
