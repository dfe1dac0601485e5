use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for adjustment record ids.
const ADJUSTMENT_NAMESPACE: Uuid = Uuid::from_u128(0x6a1c_93e4_0b7f_4d52_8e21_c4f0_5d9a_7b13);

/// Kind of structural change recommended to a user's system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    Simplify,
    ComplexityIncrease,
    TimingOptimization,
    HabitModification,
}

impl AdjustmentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simplify => "simplify",
            Self::ComplexityIncrease => "complexity_increase",
            Self::TimingOptimization => "timing_optimization",
            Self::HabitModification => "habit_modification",
        }
    }
}

/// A corrective recommendation to change routine structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemAdjustment {
    pub adjustment_type: AdjustmentType,
    pub reason: String,
    /// Expected impact, 0-1.
    pub expected_impact: f64,
    pub implementation_steps: Vec<String>,
}

/// Effort required to act on an optimization suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationEffort {
    Low,
    Medium,
    High,
}

/// An optional, confidence-scored improvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSuggestion {
    pub category: String,
    pub suggestion: String,
    /// Confidence, 0-1, grows with the amount of history behind it.
    pub confidence: f64,
    /// Never empty.
    pub expected_benefit: String,
    pub implementation_effort: ImplementationEffort,
}

/// A metric whose recent values dropped relative to the start of the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecliningPattern {
    pub metric: String,
    /// Relative drop, 0-1.
    pub magnitude: f64,
    pub early_mean: f64,
    pub recent_mean: f64,
    pub description: String,
}

/// An area where the user can gain without corrective action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementOpportunity {
    pub area: String,
    pub description: String,
    /// Estimated upside, 0-1.
    pub potential: f64,
}

/// Output of the adaptive feedback analyzer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub declining_patterns: Vec<DecliningPattern>,
    pub improvement_opportunities: Vec<ImprovementOpportunity>,
    pub system_adjustments: Vec<SystemAdjustment>,
    pub optimization_suggestions: Vec<OptimizationSuggestion>,
}

/// An emitted adjustment as kept in the append-only adjustment log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentRecord {
    pub id: String,
    pub user_id: String,
    pub emitted_on: NaiveDate,
    pub adjustment: SystemAdjustment,
    pub recorded_at: DateTime<Utc>,
}

impl AdjustmentRecord {
    /// The id is derived from user, day and adjustment type, so the log holds
    /// at most one record of each type per user per day.
    pub fn new(user_id: impl Into<String>, emitted_on: NaiveDate, adjustment: SystemAdjustment) -> Self {
        let user_id = user_id.into();
        Self {
            id: Self::derive_id(&user_id, emitted_on, adjustment.adjustment_type),
            user_id,
            emitted_on,
            adjustment,
            recorded_at: Utc::now(),
        }
    }

    pub fn derive_id(user_id: &str, emitted_on: NaiveDate, adjustment_type: AdjustmentType) -> String {
        let name = format!("{user_id}:{emitted_on}:{}", adjustment_type.as_str());
        Uuid::new_v5(&ADJUSTMENT_NAMESPACE, name.as_bytes()).to_string()
    }
}
