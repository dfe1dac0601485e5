use serde::{Deserialize, Serialize};

use super::defaults;

/// Pattern recognition configuration.
///
/// The learning-style and motivation thresholds are coarse heuristics over
/// completion and acceptance rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Sub-analyses with fewer relevant events return their defaults.
    pub min_relevant_events: usize,
    /// Session length used when no completed-task history exists (minutes).
    pub default_session_minutes: u32,
    /// Session lengths are rounded to this increment (minutes).
    pub session_rounding_minutes: u32,
    /// Completion rate at or above which the current learning style is kept.
    pub learning_keep_threshold: f64,
    pub learning_visual_threshold: f64,
    pub learning_kinesthetic_threshold: f64,
    /// Acceptance rate above which metrics-oriented motivation applies.
    pub motivation_metrics_threshold: f64,
    /// Acceptance rate above which mastery-oriented motivation applies.
    pub motivation_mastery_threshold: f64,
    /// More skip events than this suggests reducing routine complexity.
    pub skip_pattern_limit: usize,
    /// More routine modifications than this suggests a profile update.
    pub routine_modification_limit: usize,
    /// Mean recent focus below this (0-5 scale) suggests an environment change.
    pub low_focus_threshold: f64,
    /// Number of most recent productivity events averaged for the focus rule.
    pub recent_focus_window: usize,
    /// Lookback (days) for event-based analyses.
    pub analysis_window_days: u32,
    /// Relative change between the halves of a series below which its trend
    /// is stable.
    pub trend_tolerance: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            min_relevant_events: defaults::DEFAULT_MIN_RELEVANT_EVENTS,
            default_session_minutes: defaults::DEFAULT_SESSION_MINUTES,
            session_rounding_minutes: defaults::DEFAULT_SESSION_ROUNDING_MINUTES,
            learning_keep_threshold: defaults::DEFAULT_LEARNING_KEEP_THRESHOLD,
            learning_visual_threshold: defaults::DEFAULT_LEARNING_VISUAL_THRESHOLD,
            learning_kinesthetic_threshold: defaults::DEFAULT_LEARNING_KINESTHETIC_THRESHOLD,
            motivation_metrics_threshold: defaults::DEFAULT_MOTIVATION_METRICS_THRESHOLD,
            motivation_mastery_threshold: defaults::DEFAULT_MOTIVATION_MASTERY_THRESHOLD,
            skip_pattern_limit: defaults::DEFAULT_SKIP_PATTERN_LIMIT,
            routine_modification_limit: defaults::DEFAULT_ROUTINE_MODIFICATION_LIMIT,
            low_focus_threshold: defaults::DEFAULT_LOW_FOCUS_THRESHOLD,
            recent_focus_window: defaults::DEFAULT_RECENT_FOCUS_WINDOW,
            analysis_window_days: defaults::DEFAULT_ANALYSIS_WINDOW_DAYS,
            trend_tolerance: defaults::DEFAULT_TREND_TOLERANCE,
        }
    }
}
