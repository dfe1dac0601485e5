use serde::{Deserialize, Serialize};

use super::defaults;

/// Habit consistency engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitConfig {
    /// Rolling window (days) for consistency percentages.
    pub rolling_window_days: u32,
    /// Minimum consistency (0-100) for a habit to anchor a stack.
    pub anchor_min_consistency: f64,
    /// Minimum current streak for a habit to anchor a stack.
    pub anchor_min_streak: u32,
    /// Streak length at which the anchor's streak contribution saturates.
    pub streak_saturation_days: u32,
    /// Stack suggestions below this confidence are dropped.
    pub min_stack_confidence: f64,
    /// Overall score below which the user is told to narrow their focus.
    pub low_overall_consistency: f64,
    /// Habits below this consistency are recommended a smaller version.
    pub struggling_habit_consistency: f64,
    /// When every scored habit is at or above this, suggest adding one.
    pub ready_to_grow_consistency: f64,
}

impl Default for HabitConfig {
    fn default() -> Self {
        Self {
            rolling_window_days: defaults::DEFAULT_ROLLING_WINDOW_DAYS,
            anchor_min_consistency: defaults::DEFAULT_ANCHOR_MIN_CONSISTENCY,
            anchor_min_streak: defaults::DEFAULT_ANCHOR_MIN_STREAK,
            streak_saturation_days: defaults::DEFAULT_STREAK_SATURATION_DAYS,
            min_stack_confidence: defaults::DEFAULT_MIN_STACK_CONFIDENCE,
            low_overall_consistency: defaults::DEFAULT_LOW_OVERALL_CONSISTENCY,
            struggling_habit_consistency: defaults::DEFAULT_HABIT_STRUGGLING_CONSISTENCY,
            ready_to_grow_consistency: defaults::DEFAULT_READY_TO_GROW_CONSISTENCY,
        }
    }
}
