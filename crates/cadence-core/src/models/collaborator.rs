//! Data returned by the collaborators this engine reads from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day activity totals from the activity-timer collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivityStats {
    pub date: NaiveDate,
    pub focused_minutes: f64,
    pub deep_work_hours: f64,
    /// Mean focus quality for the day, 0-5.
    pub focus_quality: f64,
    pub sessions: u32,
    pub breaks_taken: u32,
}

impl DailyActivityStats {
    /// A day with no recorded activity.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            focused_minutes: 0.0,
            deep_work_hours: 0.0,
            focus_quality: 0.0,
            sessions: 0,
            breaks_taken: 0,
        }
    }
}

/// How a user prefers to take in new routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    ReadingWriting,
}

/// Profile summary from the profile collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    /// How much of the profile questionnaire is filled in, 0-100.
    pub completion_percentage: f64,
    #[serde(default)]
    pub target_identity: Option<String>,
    #[serde(default)]
    pub learning_style: Option<LearningStyle>,
    #[serde(default)]
    pub detailed_profile: serde_json::Value,
}

/// One evening review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EveningReview {
    pub date: NaiveDate,
    /// Day rating, 1-5.
    pub rating: f64,
    #[serde(default)]
    pub wins: Vec<String>,
    #[serde(default)]
    pub obstacles: Vec<String>,
    #[serde(default)]
    pub tomorrow_focus: Option<String>,
}

/// Summary the review collaborator computes over its history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    pub average_rating: f64,
    pub common_obstacles: Vec<String>,
    pub review_streak: u32,
}

/// Review history over the requested number of days.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewHistory {
    pub reviews: Vec<EveningReview>,
    pub analysis: ReviewAnalysis,
}
