//! Optimal focus-session length.

use cadence_core::config::PatternConfig;

use super::sufficient;
use crate::ranking::mean;
use crate::signals::BehavioralSignals;

/// Mean duration of completed tasks, rounded to the configured increment.
///
/// Never returns less than one increment.
pub fn optimal_session_minutes(signals: &BehavioralSignals<'_>, config: &PatternConfig) -> u32 {
    let durations: Vec<f64> = signals
        .tasks
        .iter()
        .filter(|t| t.completed)
        .filter_map(|t| t.duration)
        .collect();
    if !sufficient("optimal_session", durations.len(), config) {
        return config.default_session_minutes;
    }
    let Some(avg) = mean(&durations) else {
        return config.default_session_minutes;
    };
    let step = f64::from(config.session_rounding_minutes.max(1));
    let rounded = ((avg / step).round() * step).max(step);
    rounded as u32
}
