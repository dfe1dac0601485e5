//! "Never miss twice" messaging.
//!
//! The streak counter resets on any miss. This module only decides what the
//! user is told after a miss; it never changes a streak.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::history::CompletionHistory;

/// Where a habit stands relative to its most recent closed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissState {
    /// Completed on the reference day, or nothing to say yet.
    OnTrack,
    /// Missed the reference day right after a completed day.
    MissedOnce,
    /// Missed the reference day and the day before it.
    MissedTwice,
}

/// Classify the most recent day. The reference day is today when today has a
/// record, otherwise yesterday (today may simply not be logged yet).
pub fn miss_state(history: &CompletionHistory) -> MissState {
    if history.last_completed().is_none() {
        return MissState::OnTrack;
    }
    let today = history.today();
    let reference = if history.recorded_on(today) {
        today
    } else {
        today - Duration::days(1)
    };
    if history.completed_on(reference) {
        return MissState::OnTrack;
    }
    if history.completed_on(reference - Duration::days(1)) {
        MissState::MissedOnce
    } else {
        MissState::MissedTwice
    }
}

/// User-facing line for a miss state, if any.
pub fn miss_message(habit_name: &str, state: MissState) -> Option<String> {
    match state {
        MissState::OnTrack => None,
        MissState::MissedOnce => Some(format!(
            "You missed {habit_name} once. Never miss twice: get back to it today, even a small version counts."
        )),
        MissState::MissedTwice => Some(format!(
            "{habit_name} has slipped for two days. Restart with the smallest possible version today."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::models::HabitCompletionRecord;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 14).unwrap()
    }

    #[test]
    fn single_miss_after_completion() {
        let history = CompletionHistory::from_pattern(&[true, true, false], today());
        assert_eq!(miss_state(&history), MissState::MissedOnce);
    }

    #[test]
    fn double_miss() {
        let history = CompletionHistory::from_pattern(&[true, false, false], today());
        assert_eq!(miss_state(&history), MissState::MissedTwice);
    }

    #[test]
    fn unlogged_today_uses_yesterday() {
        let records: Vec<_> = [2, 1]
            .into_iter()
            .map(|ago| HabitCompletionRecord {
                habit_id: "h".into(),
                user_id: "u".into(),
                date: today() - Duration::days(ago),
                completed: true,
                quality: None,
                notes: None,
            })
            .collect();
        let history = CompletionHistory::from_records(&records, today());
        assert_eq!(miss_state(&history), MissState::OnTrack);
    }

    #[test]
    fn no_completions_means_nothing_to_say() {
        let history = CompletionHistory::from_pattern(&[false, false], today());
        assert_eq!(miss_state(&history), MissState::OnTrack);
        assert!(miss_message("Read", MissState::OnTrack).is_none());
    }

    #[test]
    fn messages_name_the_habit() {
        let msg = miss_message("Meditate", MissState::MissedOnce).unwrap();
        assert!(msg.contains("Meditate"));
        assert!(msg.contains("Never miss twice"));
    }
}
