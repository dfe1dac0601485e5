//! Learning-style inference from task completion.
//!
//! A coarse proxy bucketed on completion rate, not a validated instrument.

use cadence_core::config::PatternConfig;
use cadence_core::models::LearningStyle;

use super::sufficient;
use crate::signals::BehavioralSignals;

/// Style assumed when the profile does not name one.
pub const FALLBACK_STYLE: LearningStyle = LearningStyle::Visual;

/// Completed / total task events, 0 without tasks.
pub fn task_completion_rate(signals: &BehavioralSignals<'_>) -> f64 {
    if signals.tasks.is_empty() {
        return 0.0;
    }
    let done = signals.tasks.iter().filter(|t| t.completed).count();
    done as f64 / signals.tasks.len() as f64
}

pub fn infer_learning_style(
    signals: &BehavioralSignals<'_>,
    current: Option<LearningStyle>,
    config: &PatternConfig,
) -> LearningStyle {
    let current = current.unwrap_or(FALLBACK_STYLE);
    if !sufficient("learning_style", signals.tasks.len(), config) {
        return current;
    }
    let rate = task_completion_rate(signals);
    if rate >= config.learning_keep_threshold {
        current
    } else if rate >= config.learning_visual_threshold {
        LearningStyle::Visual
    } else if rate >= config.learning_kinesthetic_threshold {
        LearningStyle::Kinesthetic
    } else {
        LearningStyle::Auditory
    }
}
