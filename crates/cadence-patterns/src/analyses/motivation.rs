//! Motivation factors from suggestion acceptance.

use cadence_core::config::PatternConfig;

use super::sufficient;
use crate::signals::BehavioralSignals;

pub const METRICS_ORIENTED: [&str; 3] =
    ["progress_tracking", "achievement_metrics", "visible_streaks"];
pub const MASTERY_ORIENTED: [&str; 2] = ["skill_mastery", "personal_growth"];
pub const REWARD_ORIENTED: [&str; 2] = ["tangible_rewards", "social_accountability"];

/// Accepted / total suggestion responses, 0 without responses.
pub fn acceptance_rate(signals: &BehavioralSignals<'_>) -> f64 {
    if signals.suggestions.is_empty() {
        return 0.0;
    }
    let accepted = signals.suggestions.iter().filter(|s| s.accepted).count();
    accepted as f64 / signals.suggestions.len() as f64
}

pub fn motivation_factors(signals: &BehavioralSignals<'_>, config: &PatternConfig) -> Vec<String> {
    let factors: &[&str] = if !sufficient("motivation", signals.suggestions.len(), config) {
        &MASTERY_ORIENTED
    } else {
        let rate = acceptance_rate(signals);
        if rate > config.motivation_metrics_threshold {
            &METRICS_ORIENTED
        } else if rate > config.motivation_mastery_threshold {
            &MASTERY_ORIENTED
        } else {
            &REWARD_ORIENTED
        }
    };
    factors.iter().map(|f| f.to_string()).collect()
}
