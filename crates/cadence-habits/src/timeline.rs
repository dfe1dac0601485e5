//! Day-indexed habit series used by analytics and feedback.

use std::collections::HashMap;

use cadence_core::config::HabitConfig;
use cadence_core::models::{DateWindow, Habit, HabitCompletionRecord};
use chrono::NaiveDate;

use crate::consistency;
use crate::engine::HabitEvaluation;
use crate::history::CompletionHistory;
use crate::messaging;

/// Share of active habits completed on each day of the window.
///
/// A habit counts toward a day's denominator only from its creation day on.
/// Days with no eligible habit are 0. Output length equals `window.len()`.
pub fn daily_completion_rates(
    habits: &[Habit],
    records: &[HabitCompletionRecord],
    window: &DateWindow,
) -> Vec<f64> {
    let active: Vec<&Habit> = habits.iter().filter(|h| h.active).collect();
    let histories = histories_by_habit(&active, records, window.end);

    window
        .days()
        .into_iter()
        .map(|day| {
            let eligible: Vec<&&Habit> = active.iter().filter(|h| h.created_on <= day).collect();
            if eligible.is_empty() {
                return 0.0;
            }
            let done = eligible
                .iter()
                .filter(|h| {
                    histories
                        .get(h.habit_id.as_str())
                        .is_some_and(|hist| hist.completed_on(day))
                })
                .count();
            done as f64 / eligible.len() as f64
        })
        .collect()
}

/// Overall consistency score recomputed as of each day of the window.
pub fn consistency_series(
    habits: &[Habit],
    records: &[HabitCompletionRecord],
    window: &DateWindow,
    config: &HabitConfig,
) -> Vec<f64> {
    window
        .days()
        .into_iter()
        .map(|day| consistency_as_of(habits, records, day, config))
        .collect()
}

/// Overall consistency score as it stood at the end of `date`.
///
/// Habits created after `date` and records dated after it are ignored.
pub fn consistency_as_of(
    habits: &[Habit],
    records: &[HabitCompletionRecord],
    date: NaiveDate,
    config: &HabitConfig,
) -> f64 {
    let evaluations: Vec<HabitEvaluation> = habits
        .iter()
        .filter(|h| h.active && h.created_on <= date)
        .map(|h| {
            let history = CompletionHistory::from_records(
                records.iter().filter(|r| r.habit_id == h.habit_id),
                date,
            );
            HabitEvaluation {
                habit: h.clone(),
                state: history.streak_state(h, config.rolling_window_days),
                miss_state: messaging::miss_state(&history),
                history,
            }
        })
        .collect();
    consistency::overall_score(&evaluations)
}

fn histories_by_habit<'a>(
    habits: &[&'a Habit],
    records: &[HabitCompletionRecord],
    today: NaiveDate,
) -> HashMap<&'a str, CompletionHistory> {
    let mut grouped: HashMap<&str, Vec<&HabitCompletionRecord>> = HashMap::new();
    for r in records {
        grouped.entry(r.habit_id.as_str()).or_default().push(r);
    }
    habits
        .iter()
        .map(|h| {
            let recs = grouped.get(h.habit_id.as_str()).cloned().unwrap_or_default();
            (h.habit_id.as_str(), CompletionHistory::from_records(recs, today))
        })
        .collect()
}
