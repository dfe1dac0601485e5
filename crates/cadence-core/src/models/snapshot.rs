use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ConsistencyScore, HabitStreakState, Insight, LearningStyle, Period, TimeOfDay};

/// Mean energy in one time-of-day bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPoint {
    pub time_of_day: TimeOfDay,
    pub average_energy: f64,
    pub samples: usize,
}

/// A distraction trigger and how often it occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistractionPattern {
    pub trigger: String,
    pub occurrences: usize,
}

/// Day-indexed productivity series plus ranked patterns.
///
/// `daily_completion_rates`, `focus_quality_trend`, `deep_work_hours_trend`,
/// and `distraction_counts` all have one entry per day of the window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductivityPattern {
    pub dates: Vec<NaiveDate>,
    pub daily_completion_rates: Vec<f64>,
    pub focus_quality_trend: Vec<f64>,
    pub deep_work_hours_trend: Vec<f64>,
    pub distraction_counts: Vec<u32>,
    pub energy_patterns: Vec<EnergyPoint>,
    pub most_productive_hours: Vec<String>,
    pub distraction_patterns: Vec<DistractionPattern>,
}

/// How well the engine's personalization is landing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizationMetrics {
    /// 0-1.
    pub profile_completeness: f64,
    /// Share of past adjustments followed by improvement, 0-1.
    pub adaptation_effectiveness: f64,
    /// 0-1.
    pub suggestion_acceptance_rate: f64,
    /// Routine modifications per week.
    pub routine_modification_frequency: f64,
    /// 0-1, 0.5 is neutral.
    pub learning_progression: f64,
}

impl Default for PersonalizationMetrics {
    fn default() -> Self {
        Self {
            profile_completeness: 0.0,
            adaptation_effectiveness: crate::constants::NEUTRAL_RATIO,
            suggestion_acceptance_rate: 0.0,
            routine_modification_frequency: 0.0,
            learning_progression: crate::constants::NEUTRAL_RATIO,
        }
    }
}

/// Preferred working environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalPreferences {
    pub locations: Vec<String>,
    pub noise_level: String,
}

/// Output of the pattern recognition engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizationInsights {
    pub productivity_peaks: Vec<String>,
    pub distraction_triggers: Vec<DistractionPattern>,
    pub optimal_session_minutes: u32,
    pub learning_style: LearningStyle,
    pub motivation_factors: Vec<String>,
    pub environmental_preferences: EnvironmentalPreferences,
    pub adaptation_recommendations: Vec<String>,
    pub suggestion_acceptance_rate: f64,
    pub task_completion_rate: f64,
}

/// Point-in-time analytics for one user. Recomputed per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub user_id: String,
    pub period: Period,
    pub consistency_score: ConsistencyScore,
    /// 0-100.
    pub identity_alignment: f64,
    pub deep_work_trend: Vec<f64>,
    pub habit_streaks: Vec<HabitStreakState>,
    pub productivity_pattern: ProductivityPattern,
    pub behavioral_insights: Vec<Insight>,
    pub personalization_metrics: PersonalizationMetrics,
}
