//! Default values for every configurable threshold.
//!
//! These are policy decisions, not derived constants. Changing one changes
//! user-visible recommendations.

// Habits
pub const DEFAULT_ROLLING_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_ANCHOR_MIN_CONSISTENCY: f64 = 70.0;
pub const DEFAULT_ANCHOR_MIN_STREAK: u32 = 3;
pub const DEFAULT_STREAK_SATURATION_DAYS: u32 = 21;
pub const DEFAULT_MIN_STACK_CONFIDENCE: f64 = 0.3;
pub const DEFAULT_LOW_OVERALL_CONSISTENCY: f64 = 50.0;
pub const DEFAULT_HABIT_STRUGGLING_CONSISTENCY: f64 = 30.0;
pub const DEFAULT_READY_TO_GROW_CONSISTENCY: f64 = 80.0;

// Patterns
pub const DEFAULT_MIN_RELEVANT_EVENTS: usize = 5;
pub const DEFAULT_SESSION_MINUTES: u32 = 45;
pub const DEFAULT_SESSION_ROUNDING_MINUTES: u32 = 15;
pub const DEFAULT_LEARNING_KEEP_THRESHOLD: f64 = 0.8;
pub const DEFAULT_LEARNING_VISUAL_THRESHOLD: f64 = 0.6;
pub const DEFAULT_LEARNING_KINESTHETIC_THRESHOLD: f64 = 0.4;
pub const DEFAULT_MOTIVATION_METRICS_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MOTIVATION_MASTERY_THRESHOLD: f64 = 0.4;
pub const DEFAULT_SKIP_PATTERN_LIMIT: usize = 5;
pub const DEFAULT_ROUTINE_MODIFICATION_LIMIT: usize = 10;
pub const DEFAULT_LOW_FOCUS_THRESHOLD: f64 = 2.0;
pub const DEFAULT_RECENT_FOCUS_WINDOW: usize = 7;
pub const DEFAULT_ANALYSIS_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_TREND_TOLERANCE: f64 = 0.10;

// Analytics
pub const DEFAULT_COLLABORATOR_TIMEOUT_MS: u64 = 3_000;
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 100;
pub const DEFAULT_MIN_INSIGHT_STRENGTH: f64 = 0.2;
pub const DEFAULT_MAX_INSIGHTS: usize = 8;

// Feedback
pub const DEFAULT_HISTORY_DAYS: u32 = 30;
pub const DEFAULT_MIN_HISTORY_DAYS: u32 = 7;
pub const DEFAULT_DECLINE_THRESHOLD: f64 = 0.15;
pub const DEFAULT_HIGH_CONSISTENCY: f64 = 85.0;
pub const DEFAULT_HIGH_ALIGNMENT: f64 = 80.0;
pub const DEFAULT_ERRATIC_VARIATION: f64 = 0.6;
pub const DEFAULT_STRUGGLING_HABIT_CONSISTENCY: f64 = 40.0;
pub const DEFAULT_CONFIDENCE_SATURATION_DAYS: u32 = 30;
pub const DEFAULT_MAX_SUGGESTION_CONFIDENCE: f64 = 0.95;
pub const DEFAULT_LOW_FOCUS_MEAN: f64 = 3.0;
pub const DEFAULT_LOW_DEEP_WORK_HOURS: f64 = 2.0;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
