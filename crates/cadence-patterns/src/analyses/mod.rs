//! The independent sub-analyses. Each takes extracted signals and returns
//! its documented default when it has fewer than `min_relevant_events`
//! relevant samples.

pub mod adaptation;
pub mod distractions;
pub mod environment;
pub mod learning_style;
pub mod motivation;
pub mod peaks;
pub mod session;

use cadence_core::config::PatternConfig;

/// Whether an analysis has enough samples; logs the shortfall when it does not.
pub(crate) fn sufficient(analysis: &str, available: usize, config: &PatternConfig) -> bool {
    if available < config.min_relevant_events {
        cadence_observability::events::insufficient_data(
            analysis,
            available,
            config.min_relevant_events,
        );
        false
    } else {
        true
    }
}
