use serde::{Deserialize, Serialize};

/// Category of a behavioral insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Productivity,
    Obstacles,
    Triggers,
    Rewards,
    Environment,
    Motivation,
}

/// Direction of a metric over the analysis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

/// A behavioral pattern surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub description: String,
    /// How pronounced the pattern is, 0-1.
    pub pattern_strength: f64,
    /// How strongly the pattern tracks the user's outcomes, 0-1.
    pub behavioral_correlation: f64,
    pub trend: Trend,
    pub actionable_recommendations: Vec<String>,
}

impl Insight {
    pub fn new(category: InsightCategory, description: impl Into<String>) -> Self {
        Self {
            category,
            description: description.into(),
            pattern_strength: 0.0,
            behavioral_correlation: 0.0,
            trend: Trend::Stable,
            actionable_recommendations: Vec::new(),
        }
    }

    pub fn with_strength(mut self, strength: f64, correlation: f64) -> Self {
        self.pattern_strength = strength.clamp(0.0, 1.0);
        self.behavioral_correlation = correlation.clamp(0.0, 1.0);
        self
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = trend;
        self
    }

    pub fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.actionable_recommendations.push(recommendation.into());
        self
    }
}
