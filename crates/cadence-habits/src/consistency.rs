//! Overall consistency score and the guidance attached to it.

use cadence_core::config::HabitConfig;
use cadence_core::models::{ConsistencyScore, HabitScore};

use crate::engine::HabitEvaluation;
use crate::messaging;

const STREAK_CALLOUT_DAYS: u32 = 7;

/// Unweighted mean of per-habit consistency, skipping habits with no history.
///
/// Returns 0 when no habit has history.
pub fn overall_score(evaluations: &[HabitEvaluation]) -> f64 {
    let scored: Vec<f64> = evaluations
        .iter()
        .filter(|e| e.state.has_history)
        .map(|e| e.state.consistency_percentage)
        .collect();
    if scored.is_empty() {
        return 0.0;
    }
    (scored.iter().sum::<f64>() / scored.len() as f64).clamp(0.0, 100.0)
}

/// Build the full consistency score for a set of evaluated habits.
pub fn score(evaluations: &[HabitEvaluation], config: &HabitConfig) -> ConsistencyScore {
    let overall = overall_score(evaluations);
    let habit_scores: Vec<HabitScore> = evaluations
        .iter()
        .filter(|e| e.state.has_history)
        .map(|e| HabitScore {
            habit_id: e.habit.habit_id.clone(),
            score: e.state.consistency_percentage,
        })
        .collect();

    ConsistencyScore {
        overall_score: overall,
        habit_scores,
        insights: insights(evaluations),
        recommendations: recommendations(evaluations, overall, config),
    }
}

fn insights(evaluations: &[HabitEvaluation]) -> Vec<String> {
    let mut out = Vec::new();
    if evaluations.is_empty() {
        out.push("No habits tracked yet.".to_string());
        return out;
    }

    let best = evaluations
        .iter()
        .filter(|e| e.state.has_history)
        .fold(None::<&HabitEvaluation>, |best, e| match best {
            Some(b) if b.state.consistency_percentage >= e.state.consistency_percentage => Some(b),
            _ => Some(e),
        });
    if let Some(best) = best {
        out.push(format!(
            "{} is your most consistent habit at {:.0}%.",
            best.habit.name, best.state.consistency_percentage
        ));
    }

    for e in evaluations {
        if e.state.current_streak >= STREAK_CALLOUT_DAYS {
            out.push(format!(
                "{} is on a {}-day streak.",
                e.habit.name, e.state.current_streak
            ));
        }
        if let Some(msg) = messaging::miss_message(&e.habit.name, e.miss_state) {
            out.push(msg);
        }
        if !e.state.has_history {
            out.push(format!(
                "{} has no check-ins yet; it is scored from the first one.",
                e.habit.name
            ));
        }
    }
    out
}

fn recommendations(evaluations: &[HabitEvaluation], overall: f64, config: &HabitConfig) -> Vec<String> {
    let mut out = Vec::new();
    if evaluations.is_empty() {
        out.push("Start with one habit small enough to finish in two minutes.".to_string());
        return out;
    }
    let scored: Vec<&HabitEvaluation> =
        evaluations.iter().filter(|e| e.state.has_history).collect();
    if scored.is_empty() {
        out.push("Check in on your habits daily so consistency can be measured.".to_string());
        return out;
    }

    if overall < config.low_overall_consistency {
        out.push(format!(
            "Consistency is below {:.0}%: focus on your one or two most important habits for the next week.",
            config.low_overall_consistency
        ));
    }
    for e in &scored {
        if e.state.consistency_percentage < config.struggling_habit_consistency {
            out.push(format!(
                "Shrink {} to a version you can do on your worst day.",
                e.habit.name
            ));
        }
    }
    if scored
        .iter()
        .all(|e| e.state.consistency_percentage >= config.ready_to_grow_consistency)
    {
        out.push(format!(
            "Every habit is at or above {:.0}%: you are ready to add a new one.",
            config.ready_to_grow_consistency
        ));
    }
    out
}
