//! Rule-based adaptation recommendations. Every rule is evaluated; all that
//! fire are returned in rule order.

use cadence_core::config::PatternConfig;

use crate::ranking::mean;
use crate::signals::BehavioralSignals;

pub const REDUCE_COMPLEXITY: &str =
    "Reduce routine complexity: steps are being skipped regularly.";
pub const UPDATE_PROFILE: &str =
    "Profile update suggested: routines are being edited often, so preferences may have changed.";
pub const ADJUST_ENVIRONMENT: &str =
    "Adjust environment/schedule: recent focus quality has been low.";

pub fn adaptation_recommendations(
    signals: &BehavioralSignals<'_>,
    config: &PatternConfig,
) -> Vec<String> {
    let mut out = Vec::new();
    if signals.skips > config.skip_pattern_limit {
        out.push(REDUCE_COMPLEXITY.to_string());
    }
    if signals.modifications > config.routine_modification_limit {
        out.push(UPDATE_PROFILE.to_string());
    }
    if signals.focus.len() >= config.min_relevant_events {
        let recent: Vec<f64> = signals
            .focus
            .iter()
            .rev()
            .take(config.recent_focus_window)
            .map(|s| s.focus_quality)
            .collect();
        if mean(&recent).is_some_and(|m| m < config.low_focus_threshold) {
            out.push(ADJUST_ENVIRONMENT.to_string());
        }
    }
    out
}
