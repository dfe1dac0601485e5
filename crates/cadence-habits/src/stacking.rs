//! Habit stacking: attach a struggling habit to a reliable one.

use cadence_core::config::HabitConfig;
use cadence_core::models::{StackSuggestion, TimeOfDay};
use chrono::Duration;

use crate::engine::HabitEvaluation;

/// Suggest anchor → candidate pairs, strongest first.
///
/// Anchors are habits at or above `anchor_min_consistency` with at least
/// `anchor_min_streak` current days. Candidates are active habits below the
/// anchor threshold whose time-of-day cue is compatible with the anchor's.
pub fn suggest(evaluations: &[HabitEvaluation], config: &HabitConfig) -> Vec<StackSuggestion> {
    let anchors = evaluations.iter().filter(|e| {
        e.habit.active
            && e.state.consistency_percentage >= config.anchor_min_consistency
            && e.state.current_streak >= config.anchor_min_streak
    });

    let mut suggestions = Vec::new();
    for anchor in anchors {
        for candidate in evaluations {
            if candidate.habit.habit_id == anchor.habit.habit_id
                || !candidate.habit.active
                || candidate.state.consistency_percentage >= config.anchor_min_consistency
                || !compatible(anchor.habit.time_of_day, candidate.habit.time_of_day)
            {
                continue;
            }

            let streak_factor = (f64::from(anchor.state.current_streak)
                / f64::from(config.streak_saturation_days.max(1)))
            .min(1.0);
            let correlation = co_completion_rate(anchor, candidate, config.rolling_window_days);
            let confidence = (0.5 * streak_factor + 0.5 * correlation).clamp(0.0, 1.0);
            if confidence < config.min_stack_confidence {
                continue;
            }

            suggestions.push(StackSuggestion {
                anchor_habit: anchor.habit.habit_id.clone(),
                suggested_habit: candidate.habit.habit_id.clone(),
                confidence_score: confidence,
                rationale: format!(
                    "Right after {} ({}-day streak), do {}. You completed it on {:.0}% of the days you did {}.",
                    anchor.habit.name,
                    anchor.state.current_streak,
                    candidate.habit.name,
                    correlation * 100.0,
                    anchor.habit.name,
                ),
            });
        }
    }

    // Stable: equal confidences keep anchor/candidate input order.
    suggestions.sort_by(|a, b| b.confidence_score.total_cmp(&a.confidence_score));
    suggestions
}

/// Unset cues are compatible with anything.
fn compatible(anchor: Option<TimeOfDay>, candidate: Option<TimeOfDay>) -> bool {
    match (anchor, candidate) {
        (Some(a), Some(c)) => a == c,
        _ => true,
    }
}

/// P(candidate completed | anchor completed) over the rolling window.
pub fn co_completion_rate(
    anchor: &HabitEvaluation,
    candidate: &HabitEvaluation,
    window_days: u32,
) -> f64 {
    let today = anchor.history.today();
    let start = today - Duration::days(i64::from(window_days.max(1)) - 1);
    let mut anchor_days = 0usize;
    let mut both = 0usize;
    for day in start.iter_days().take_while(|d| *d <= today) {
        if anchor.history.completed_on(day) {
            anchor_days += 1;
            if candidate.history.completed_on(day) {
                both += 1;
            }
        }
    }
    if anchor_days == 0 {
        0.0
    } else {
        both as f64 / anchor_days as f64
    }
}
