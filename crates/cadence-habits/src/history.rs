//! Day-indexed completion history for a single habit.

use std::collections::BTreeMap;

use cadence_core::models::{Habit, HabitCompletionRecord, HabitStreakState};
use chrono::{Duration, NaiveDate};

/// Completion status per calendar day for one habit, truncated at "today".
///
/// Records after `today` are ignored. When two records share a date the later
/// one in input order wins, matching the store's upsert semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionHistory {
    days: BTreeMap<NaiveDate, bool>,
    today: NaiveDate,
}

impl CompletionHistory {
    pub fn from_records<'a, I>(records: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a HabitCompletionRecord>,
    {
        let days = records
            .into_iter()
            .filter(|r| r.date <= today)
            .map(|r| (r.date, r.completed))
            .collect();
        Self { days, today }
    }

    /// Build from a completion pattern ending on `today` (oldest first).
    pub fn from_pattern(pattern: &[bool], today: NaiveDate) -> Self {
        let start = today - Duration::days(pattern.len() as i64 - 1);
        let days = pattern
            .iter()
            .enumerate()
            .map(|(i, done)| (start + Duration::days(i as i64), *done))
            .collect();
        Self { days, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Whether the habit was completed on `date`. No record means no.
    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.days.get(&date).copied().unwrap_or(false)
    }

    /// Whether a record exists for `date`.
    pub fn recorded_on(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn first_recorded(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_recorded(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.days
            .iter()
            .rev()
            .find_map(|(date, done)| done.then_some(*date))
    }

    /// Consecutive completed days ending at the most recent recorded day.
    ///
    /// If that day is older than yesterday the days in between are misses and
    /// the streak is already broken.
    pub fn current_streak(&self) -> u32 {
        let Some(last) = self.last_recorded() else {
            return 0;
        };
        if last < self.today - Duration::days(1) {
            return 0;
        }
        let mut streak = 0;
        let mut day = last;
        while self.completed_on(day) {
            streak += 1;
            day -= Duration::days(1);
        }
        streak
    }

    /// Longest run of consecutive completed days over the full history.
    pub fn longest_streak(&self) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut previous: Option<NaiveDate> = None;
        for (&date, &done) in &self.days {
            let contiguous = previous.is_some_and(|p| date - p == Duration::days(1));
            run = match (done, contiguous) {
                (false, _) => 0,
                (true, true) => run + 1,
                (true, false) => 1,
            };
            longest = longest.max(run);
            previous = Some(date);
        }
        longest
    }

    /// Completed days within `[start, end]`.
    pub fn completions_between(&self, start: NaiveDate, end: NaiveDate) -> usize {
        self.days
            .range(start..=end)
            .filter(|(_, done)| **done)
            .count()
    }

    /// Consistency over `min(days since creation, window_days)` days ending today, 0-100.
    pub fn consistency_percentage(&self, created_on: NaiveDate, window_days: u32) -> f64 {
        let since_creation = (self.today - created_on).num_days() + 1;
        let days = since_creation.clamp(1, i64::from(window_days.max(1)));
        let start = self.today - Duration::days(days - 1);
        let completions = self.completions_between(start, self.today);
        (completions as f64 / days as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// Full derived streak state for `habit`.
    pub fn streak_state(&self, habit: &Habit, window_days: u32) -> HabitStreakState {
        let current_streak = self.current_streak();
        HabitStreakState {
            habit_id: habit.habit_id.clone(),
            current_streak,
            longest_streak: self.longest_streak().max(current_streak),
            consistency_percentage: self.consistency_percentage(habit.created_on, window_days),
            last_completed: self.last_completed(),
            has_history: !self.is_empty(),
        }
    }
}
