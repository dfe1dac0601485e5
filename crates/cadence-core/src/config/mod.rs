mod analytics_config;
pub mod defaults;
mod feedback_config;
mod habit_config;
mod observability_config;
mod pattern_config;

pub use analytics_config::AnalyticsConfig;
pub use feedback_config::FeedbackConfig;
pub use habit_config::HabitConfig;
pub use observability_config::ObservabilityConfig;
pub use pattern_config::PatternConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{CadenceError, CadenceResult};

/// Top-level configuration aggregating every subsystem section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceConfig {
    pub habits: HabitConfig,
    pub patterns: PatternConfig,
    pub analytics: AnalyticsConfig,
    pub feedback: FeedbackConfig,
    pub observability: ObservabilityConfig,
}

impl CadenceConfig {
    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml(toml_str: &str) -> CadenceResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| CadenceError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no heuristic can work with.
    pub fn validate(&self) -> CadenceResult<()> {
        let h = &self.habits;
        if h.rolling_window_days == 0 {
            return Err(config_err("habits.rolling_window_days must be > 0"));
        }
        if h.streak_saturation_days == 0 {
            return Err(config_err("habits.streak_saturation_days must be > 0"));
        }
        check_percent("habits.anchor_min_consistency", h.anchor_min_consistency)?;
        check_unit("habits.min_stack_confidence", h.min_stack_confidence)?;
        check_percent("habits.low_overall_consistency", h.low_overall_consistency)?;
        check_percent(
            "habits.struggling_habit_consistency",
            h.struggling_habit_consistency,
        )?;
        check_percent("habits.ready_to_grow_consistency", h.ready_to_grow_consistency)?;

        let p = &self.patterns;
        if p.session_rounding_minutes == 0 {
            return Err(config_err("patterns.session_rounding_minutes must be > 0"));
        }
        if p.recent_focus_window == 0 || p.analysis_window_days == 0 {
            return Err(config_err("patterns windows must be > 0"));
        }
        check_unit("patterns.learning_keep_threshold", p.learning_keep_threshold)?;
        check_unit("patterns.learning_visual_threshold", p.learning_visual_threshold)?;
        check_unit(
            "patterns.learning_kinesthetic_threshold",
            p.learning_kinesthetic_threshold,
        )?;
        if !(p.learning_kinesthetic_threshold <= p.learning_visual_threshold
            && p.learning_visual_threshold <= p.learning_keep_threshold)
        {
            return Err(config_err("patterns learning thresholds must be ascending"));
        }
        check_unit(
            "patterns.motivation_metrics_threshold",
            p.motivation_metrics_threshold,
        )?;
        check_unit(
            "patterns.motivation_mastery_threshold",
            p.motivation_mastery_threshold,
        )?;
        check_unit("patterns.trend_tolerance", p.trend_tolerance)?;

        let a = &self.analytics;
        if a.collaborator_timeout_ms == 0 {
            return Err(config_err("analytics.collaborator_timeout_ms must be > 0"));
        }
        check_unit("analytics.min_insight_strength", a.min_insight_strength)?;

        let f = &self.feedback;
        if f.min_history_days == 0 || f.history_days < f.min_history_days {
            return Err(config_err(
                "feedback.history_days must be >= feedback.min_history_days > 0",
            ));
        }
        if f.confidence_saturation_days == 0 {
            return Err(config_err("feedback.confidence_saturation_days must be > 0"));
        }
        check_unit("feedback.decline_threshold", f.decline_threshold)?;
        check_unit("feedback.max_suggestion_confidence", f.max_suggestion_confidence)?;
        check_percent("feedback.high_consistency", f.high_consistency)?;
        check_percent("feedback.high_alignment", f.high_alignment)?;
        check_percent(
            "feedback.struggling_habit_consistency",
            f.struggling_habit_consistency,
        )?;
        if !(f.low_focus_mean > 0.0 && f.low_focus_mean <= 5.0) {
            return Err(config_err("feedback.low_focus_mean must be within (0, 5]"));
        }
        if !(f.low_deep_work_hours > 0.0 && f.low_deep_work_hours <= 24.0) {
            return Err(config_err("feedback.low_deep_work_hours must be within (0, 24]"));
        }
        Ok(())
    }
}

fn config_err(msg: &str) -> CadenceError {
    CadenceError::ConfigError(msg.to_string())
}

fn check_unit(name: &str, value: f64) -> CadenceResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CadenceError::ConfigError(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

fn check_percent(name: &str, value: f64) -> CadenceResult<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(CadenceError::ConfigError(format!(
            "{name} must be within [0, 100], got {value}"
        )))
    }
}
