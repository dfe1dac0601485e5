//! # cadence-habits
//!
//! Habit consistency engine: streaks, rolling consistency percentages,
//! an overall consistency score, and habit-stacking suggestions.
//!
//! ## Streak semantics
//!
//! | Situation | `current_streak` |
//! |-----------|------------------|
//! | Completed days run up to today or yesterday | length of that run |
//! | Most recent record is a miss | 0 |
//! | Last record older than yesterday | 0 (the gap counts as misses) |
//!
//! The counter resets on the first miss. "Never miss twice" only shapes the
//! messaging attached to the consistency score.

pub mod consistency;
pub mod engine;
pub mod history;
pub mod messaging;
pub mod stacking;
pub mod timeline;

pub use engine::{HabitEngine, HabitEvaluation, HabitReport};
pub use history::CompletionHistory;
pub use messaging::MissState;
