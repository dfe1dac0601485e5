//! # cadence-analytics
//!
//! Composes an [`AnalyticsSnapshot`](cadence_core::models::AnalyticsSnapshot)
//! from every collaborator.
//!
//! ## Failure policy
//!
//! | Source | On failure |
//! |--------|------------|
//! | Event store check (`list_habits`) | `DataUnavailable` propagates |
//! | Any other collaborator call | one retry, then its documented default |
//!
//! Every call carries `analytics.collaborator_timeout_ms`; a timeout counts as
//! a failure. Time-indexed series always have one point per day of the
//! requested period.

pub mod aggregator;
pub mod fetch;
pub mod personalization;
pub mod snapshot;

pub use aggregator::{AnalyticsAggregator, AnalyticsReport, SourceData};
pub use fetch::{Degradation, RetryPolicy};
