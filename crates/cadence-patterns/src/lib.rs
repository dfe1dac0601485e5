//! # cadence-patterns
//!
//! Behavioral pattern recognition over the event stream.
//!
//! ## 7 Sub-analyses
//!
//! | Analysis | Events | Default with too little data |
//! |----------|--------|------------------------------|
//! | Productivity peaks | `productivity_metrics` | morning, afternoon |
//! | Distraction triggers | `user_interaction` (blur) | none |
//! | Optimal session length | `task_completion` (completed) | 45 minutes |
//! | Learning style | `task_completion` | current style |
//! | Motivation factors | `suggestion_response` | mastery-oriented |
//! | Environmental preferences | `contextual_factors` | no locations, `moderate` |
//! | Adaptation recommendations | skips, modifications, focus | none |
//!
//! Every analysis is independent and never fails: "too little data" means
//! fewer than `patterns.min_relevant_events` relevant events.

pub mod analyses;
pub mod engine;
pub mod insights;
pub mod ranking;
pub mod signals;

pub use engine::{analyze, analyze_signals, PatternEngine};
pub use insights::derive_insights;
pub use signals::BehavioralSignals;
