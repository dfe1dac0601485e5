use serde::{Deserialize, Serialize};

use super::defaults;

/// Adaptive feedback analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Days of history fetched for trend analysis.
    pub history_days: u32,
    /// Below this many days no trend is fitted.
    pub min_history_days: u32,
    /// Relative drop (first third vs last third) that flags a decline.
    pub decline_threshold: f64,
    /// Consistency score above which a user counts as high-performing.
    pub high_consistency: f64,
    /// Identity alignment above which a user counts as high-performing.
    pub high_alignment: f64,
    /// Coefficient of variation of deep-work hours that counts as erratic.
    pub erratic_variation: f64,
    /// Habits below this consistency get a habit-modification adjustment.
    pub struggling_habit_consistency: f64,
    /// History length at which suggestion confidence saturates.
    pub confidence_saturation_days: u32,
    /// Cap on any suggestion confidence.
    pub max_suggestion_confidence: f64,
    /// Mean focus (0-5, tracked days only) below which focus is an opportunity.
    pub low_focus_mean: f64,
    /// Mean daily deep work (hours, tracked days only) below which it is an
    /// opportunity.
    pub low_deep_work_hours: f64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            history_days: defaults::DEFAULT_HISTORY_DAYS,
            min_history_days: defaults::DEFAULT_MIN_HISTORY_DAYS,
            decline_threshold: defaults::DEFAULT_DECLINE_THRESHOLD,
            high_consistency: defaults::DEFAULT_HIGH_CONSISTENCY,
            high_alignment: defaults::DEFAULT_HIGH_ALIGNMENT,
            erratic_variation: defaults::DEFAULT_ERRATIC_VARIATION,
            struggling_habit_consistency: defaults::DEFAULT_STRUGGLING_HABIT_CONSISTENCY,
            confidence_saturation_days: defaults::DEFAULT_CONFIDENCE_SATURATION_DAYS,
            max_suggestion_confidence: defaults::DEFAULT_MAX_SUGGESTION_CONFIDENCE,
            low_focus_mean: defaults::DEFAULT_LOW_FOCUS_MEAN,
            low_deep_work_hours: defaults::DEFAULT_LOW_DEEP_WORK_HOURS,
        }
    }
}
