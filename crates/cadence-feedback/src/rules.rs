//! Detection rules over a [`PerformanceHistory`]. Each rule returns its own findings.

use cadence_core::config::FeedbackConfig;
use cadence_core::models::{
    AdjustmentType, DecliningPattern, ImplementationEffort, ImprovementOpportunity,
    OptimizationSuggestion, SystemAdjustment,
};

use crate::history::PerformanceHistory;
use crate::trend::{coefficient_of_variation, mean, Thirds};

pub const COMPLETION_RATE: &str = "completion_rate";
pub const DEEP_WORK_HOURS: &str = "deep_work_hours";
pub const FOCUS_QUALITY: &str = "focus_quality";

const MIN_IMPACT: f64 = 0.05;
const ESCALATION_IMPACT: f64 = 0.4;

const SIMPLIFY_STEPS: &[&str] = &[
    "Pause your lowest-priority habit for two weeks.",
    "Shrink each remaining habit to a version that takes under two minutes.",
    "Keep the same cue and time of day for every habit.",
];

const RETIME_STEPS: &[&str] = &[
    "Move deep work into your productivity peak.",
    "Protect one fixed focus block at the same time every day.",
    "Shorten sessions and schedule a break between them.",
];

fn metric_series<'a>(history: &'a PerformanceHistory) -> [(&'static str, &'a [f64]); 3] {
    [
        (COMPLETION_RATE, history.completion_rates.as_slice()),
        (DEEP_WORK_HOURS, history.deep_work_hours.as_slice()),
        (FOCUS_QUALITY, history.focus_quality.as_slice()),
    ]
}

fn label(metric: &str) -> &'static str {
    match metric {
        COMPLETION_RATE => "Habit completion",
        DEEP_WORK_HOURS => "Deep work time",
        _ => "Focus quality",
    }
}

/// Metrics whose recent third dropped by more than the threshold.
pub fn declining_patterns(
    history: &PerformanceHistory,
    config: &FeedbackConfig,
) -> Vec<DecliningPattern> {
    metric_series(history)
        .into_iter()
        .filter_map(|(metric, series)| {
            let thirds = Thirds::of(series)?;
            let drop = thirds.relative_drop();
            (drop > config.decline_threshold).then(|| DecliningPattern {
                metric: metric.to_string(),
                magnitude: drop.clamp(0.0, 1.0),
                early_mean: thirds.early_mean,
                recent_mean: thirds.recent_mean,
                description: format!(
                    "{} dropped {:.0}% from the start of the last {} days.",
                    label(metric),
                    drop * 100.0,
                    series.len()
                ),
            })
        })
        .collect()
}

/// One corrective adjustment per declining metric.
pub fn decline_adjustments(declines: &[DecliningPattern]) -> Vec<SystemAdjustment> {
    declines
        .iter()
        .map(|d| {
            let (adjustment_type, steps) = if d.metric == COMPLETION_RATE {
                (AdjustmentType::Simplify, SIMPLIFY_STEPS)
            } else {
                (AdjustmentType::TimingOptimization, RETIME_STEPS)
            };
            SystemAdjustment {
                adjustment_type,
                reason: d.description.clone(),
                expected_impact: d.magnitude.clamp(MIN_IMPACT, 1.0),
                implementation_steps: steps.iter().map(|s| s.to_string()).collect(),
            }
        })
        .collect()
}

/// Timing adjustment when deep work varies wildly day to day.
pub fn erratic_timing(
    history: &PerformanceHistory,
    config: &FeedbackConfig,
) -> Option<SystemAdjustment> {
    let cv = coefficient_of_variation(&history.deep_work_hours)?;
    (cv > config.erratic_variation).then(|| SystemAdjustment {
        adjustment_type: AdjustmentType::TimingOptimization,
        reason: format!(
            "Deep work timing is erratic (variation {:.0}% of the daily mean).",
            cv * 100.0
        ),
        expected_impact: (cv - config.erratic_variation).clamp(MIN_IMPACT, 1.0),
        implementation_steps: vec![
            "Pick a daily start time for deep work and keep it for a week.".to_string(),
            "Set a modest daily minimum instead of occasional long sessions.".to_string(),
        ],
    })
}

/// Habit modification for every habit below the struggling threshold.
pub fn struggling_habits(
    history: &PerformanceHistory,
    config: &FeedbackConfig,
) -> Vec<SystemAdjustment> {
    history
        .habit_consistency
        .iter()
        .filter(|h| h.consistency < config.struggling_habit_consistency)
        .map(|h| SystemAdjustment {
            adjustment_type: AdjustmentType::HabitModification,
            reason: format!("{} is at {:.0}% consistency.", h.name, h.consistency),
            expected_impact: ((config.struggling_habit_consistency - h.consistency) / 100.0)
                .clamp(MIN_IMPACT, 1.0),
            implementation_steps: vec![
                format!("Reduce {} to its smallest useful version.", h.name),
                format!("Stack {} right after a habit you already do daily.", h.name),
            ],
        })
        .collect()
}

/// Whether consistency stayed above the bar for the whole history and
/// identity alignment is above its bar now.
pub fn is_high_performer(history: &PerformanceHistory, config: &FeedbackConfig) -> bool {
    !history.consistency_series.is_empty()
        && history
            .consistency_series
            .iter()
            .all(|c| *c > config.high_consistency)
        && history.identity_alignment > config.high_alignment
}

pub fn escalation(history: &PerformanceHistory) -> SystemAdjustment {
    SystemAdjustment {
        adjustment_type: AdjustmentType::ComplexityIncrease,
        reason: format!(
            "Sustained high performance: consistency {:.0}% and identity alignment {:.0} over the last {} days.",
            history.consistency_series.last().copied().unwrap_or_default(),
            history.identity_alignment,
            history.days()
        ),
        expected_impact: ESCALATION_IMPACT,
        implementation_steps: vec![
            "Add one new habit that moves you toward your target identity.".to_string(),
            "Raise the difficulty of your most consistent habit.".to_string(),
        ],
    }
}

/// Improving trends to build on, plus low focus and low deep work.
pub fn improvement_opportunities(
    history: &PerformanceHistory,
    config: &FeedbackConfig,
) -> Vec<ImprovementOpportunity> {
    let mut out: Vec<ImprovementOpportunity> = metric_series(history)
        .into_iter()
        .filter_map(|(metric, series)| {
            let thirds = Thirds::of(series)?;
            let rise = -thirds.relative_drop();
            (thirds.early_mean > 0.0 && rise > config.decline_threshold).then(|| {
                ImprovementOpportunity {
                    area: metric.to_string(),
                    description: format!(
                        "{} is up {:.0}%; anchor the routine that is working.",
                        label(metric),
                        rise * 100.0
                    ),
                    potential: rise.clamp(0.0, 1.0),
                }
            })
        })
        .collect();

    let tracked_focus: Vec<f64> = history
        .focus_quality
        .iter()
        .copied()
        .filter(|f| *f > 0.0)
        .collect();
    let low_focus = config.low_focus_mean;
    if !tracked_focus.is_empty() && mean(&tracked_focus) < low_focus {
        let m = mean(&tracked_focus);
        out.push(ImprovementOpportunity {
            area: FOCUS_QUALITY.to_string(),
            description: format!("Average focus quality is {m:.1}/5."),
            potential: ((low_focus - m) / low_focus).clamp(0.0, 1.0),
        });
    }

    let tracked_hours: Vec<f64> = history
        .deep_work_hours
        .iter()
        .copied()
        .filter(|h| *h > 0.0)
        .collect();
    let low_hours = config.low_deep_work_hours;
    if !tracked_hours.is_empty() && mean(&tracked_hours) < low_hours {
        let m = mean(&tracked_hours);
        out.push(ImprovementOpportunity {
            area: DEEP_WORK_HOURS.to_string(),
            description: format!("You average {m:.1} hours of deep work on tracked days."),
            potential: ((low_hours - m) / low_hours).clamp(0.0, 1.0),
        });
    }
    out
}

/// Optional improvements phrased from the same signals.
///
/// Every suggestion carries the same history-size confidence and a
/// non-empty expected benefit.
pub fn optimization_suggestions(
    history: &PerformanceHistory,
    declines: &[DecliningPattern],
    opportunities: &[ImprovementOpportunity],
    high_performer: bool,
    config: &FeedbackConfig,
) -> Vec<OptimizationSuggestion> {
    let confidence = suggestion_confidence(history.days(), config);
    let suggest = |category: &str, suggestion: String, benefit: &str, effort| OptimizationSuggestion {
        category: category.to_string(),
        suggestion,
        confidence,
        expected_benefit: benefit.to_string(),
        implementation_effort: effort,
    };

    let mut out = Vec::new();
    for d in declines {
        let (text, benefit) = match d.metric.as_str() {
            COMPLETION_RATE => (
                "Consider a lighter habit list until completion recovers.",
                "Fewer missed days and a faster return to your usual completion rate.",
            ),
            DEEP_WORK_HOURS => (
                "Consider blocking deep work on your calendar before other commitments.",
                "More protected hours for your most important work.",
            ),
            _ => (
                "Consider a short reset before sessions, such as a walk or clearing your desk.",
                "Higher focus quality in the sessions you already do.",
            ),
        };
        out.push(suggest(&d.metric, text.to_string(), benefit, ImplementationEffort::Low));
    }
    for o in opportunities {
        out.push(suggest(
            &o.area,
            format!("Optional: {}", o.description),
            "Compounds the progress you are already making.",
            ImplementationEffort::Medium,
        ));
    }
    if high_performer {
        out.push(suggest(
            "growth",
            "You could take on a stretch goal this month.".to_string(),
            "Keeps your routine challenging so progress does not plateau.",
            ImplementationEffort::High,
        ));
    }
    if out.is_empty() {
        out.push(suggest(
            "maintenance",
            "Keep your current routine and review it once a week.".to_string(),
            "Locks in stable habits and surfaces problems early.",
            ImplementationEffort::Low,
        ));
    }
    out
}

/// `min(days / saturation, 1) × max_suggestion_confidence`.
pub fn suggestion_confidence(days: usize, config: &FeedbackConfig) -> f64 {
    let saturation = f64::from(config.confidence_saturation_days.max(1));
    ((days as f64 / saturation).min(1.0) * config.max_suggestion_confidence).clamp(0.0, 1.0)
}
