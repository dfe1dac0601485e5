//! # cadence-feedback
//!
//! Adaptive feedback over a rolling performance history.
//!
//! ## Signals → adjustments
//!
//! | Signal | Adjustment |
//! |--------|------------|
//! | Completion rate declining | `simplify` |
//! | Deep work or focus declining | `timing_optimization` |
//! | Erratic deep work | `timing_optimization` |
//! | Habit below the struggling threshold | `habit_modification` |
//! | Sustained high consistency and identity alignment | `complexity_increase` |
//!
//! [`FeedbackAnalyzer::analyze`] is pure. [`AdaptiveFeedback`] gathers the
//! history through the analytics aggregator and appends emitted adjustments
//! to the adjustment log.

pub mod analyzer;
pub mod history;
pub mod rules;
pub mod trend;

pub use analyzer::{AdaptiveFeedback, FeedbackAnalyzer};
pub use history::{HabitConsistency, PerformanceHistory};
