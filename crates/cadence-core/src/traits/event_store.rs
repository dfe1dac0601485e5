use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::CadenceResult;
use crate::models::{BehavioralEvent, DailyActivityStats, EventType, Habit, HabitCompletionRecord};

/// Read access to the append-only behavioral event store.
///
/// Implementations return [`crate::CadenceError::DataUnavailable`] when the
/// store itself cannot be reached. Any other error is treated by callers as a
/// failed query that may be retried or defaulted.
pub trait EventStore: Send + Sync {
    /// Events for a user, optionally filtered by type, within `[since, until)`.
    /// Results are ordered by timestamp ascending.
    async fn query_events(
        &self,
        user_id: &str,
        event_types: Option<&[EventType]>,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
    ) -> CadenceResult<Vec<BehavioralEvent>>;

    /// Every habit the user has defined, active or not.
    async fn list_habits(&self, user_id: &str) -> CadenceResult<Vec<Habit>>;

    /// Completion records within `[since, until]` (inclusive days), ordered by date ascending.
    async fn query_habit_completions(
        &self,
        user_id: &str,
        habit_id: Option<&str>,
        since: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) -> CadenceResult<Vec<HabitCompletionRecord>>;

    /// Activity totals for one day; `None` when nothing was tracked.
    async fn query_daily_activity_stats(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> CadenceResult<Option<DailyActivityStats>>;
}
