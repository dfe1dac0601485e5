use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// A habit the user is tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub habit_id: String,
    pub user_id: String,
    pub name: String,
    pub created_on: NaiveDate,
    pub active: bool,
    /// Cue for when the habit is usually performed.
    #[serde(default)]
    pub time_of_day: Option<TimeOfDay>,
}

/// Self-assessed quality of a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionQuality {
    Excellent,
    Good,
    Poor,
}

/// One record per (habit, day). A day without a record means "not completed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitCompletionRecord {
    pub habit_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(default)]
    pub quality: Option<CompletionQuality>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Derived streak state, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitStreakState {
    pub habit_id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Completions over the rolling window, 0-100.
    pub consistency_percentage: f64,
    pub last_completed: Option<NaiveDate>,
    /// False when the habit has no completion records at all.
    pub has_history: bool,
}

/// Per-habit consistency score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitScore {
    pub habit_id: String,
    pub score: f64,
}

/// Overall consistency with per-habit breakdown and user-facing guidance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsistencyScore {
    /// Mean of per-habit consistency over habits with history, 0-100.
    pub overall_score: f64,
    pub habit_scores: Vec<HabitScore>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Suggest performing `suggested_habit` right after `anchor_habit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSuggestion {
    pub anchor_habit: String,
    pub suggested_habit: String,
    pub confidence_score: f64,
    pub rationale: String,
}
