//! # cadence-core
//!
//! Foundation crate for the Cadence behavioral analytics engine.
//! Defines the typed event model, derived views, collaborator traits,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CadenceConfig;
pub use errors::{CadenceError, CadenceResult};
pub use models::{BehavioralEvent, DateWindow, EventPayload, EventType, Period, TimeOfDay};
pub use traits::{Clock, FixedClock, SystemClock};
