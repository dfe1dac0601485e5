//! SqliteStore: owns the connection, runs migrations on open, implements
//! EventStore + AdjustmentLog, and exposes the recording helpers.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

use cadence_core::errors::CadenceResult;
use cadence_core::ingest::validate_user_id;
use cadence_core::models::{
    AdjustmentRecord, BehavioralEvent, DailyActivityStats, EventType, Habit, HabitCompletionRecord,
};
use cadence_core::traits::{AdjustmentLog, EventStore};

use crate::connection::StoreConnection;
use crate::migrations;
use crate::queries::{activity_ops, adjustment_ops, event_ops, habit_ops};

pub struct SqliteStore {
    conn: StoreConnection,
}

impl SqliteStore {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> CadenceResult<Self> {
        let store = Self {
            conn: StoreConnection::open(path)?,
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn open_in_memory() -> CadenceResult<Self> {
        let store = Self {
            conn: StoreConnection::open_in_memory()?,
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> CadenceResult<()> {
        self.conn.with_conn(migrations::run_migrations)?;
        tracing::debug!(path = ?self.conn.db_path, "sqlite store ready");
        Ok(())
    }

    pub fn schema_version(&self) -> CadenceResult<u32> {
        self.conn.with_conn(migrations::current_version)
    }

    pub fn connection(&self) -> &StoreConnection {
        &self.conn
    }

    /// Append one event. Returns its row id.
    pub fn record_event(&self, event: &BehavioralEvent) -> CadenceResult<i64> {
        validate_user_id(&event.user_id)?;
        self.conn.with_conn(|conn| event_ops::insert_event(conn, event))
    }

    pub fn upsert_habit(&self, habit: &Habit) -> CadenceResult<()> {
        validate_user_id(&habit.user_id)?;
        self.conn.with_conn(|conn| habit_ops::upsert_habit(conn, habit))
    }

    pub fn upsert_completion(&self, record: &HabitCompletionRecord) -> CadenceResult<()> {
        validate_user_id(&record.user_id)?;
        self.conn
            .with_conn(|conn| habit_ops::upsert_completion(conn, record))
    }

    pub fn upsert_activity_stats(
        &self,
        user_id: &str,
        stats: &DailyActivityStats,
    ) -> CadenceResult<()> {
        validate_user_id(user_id)?;
        self.conn
            .with_conn(|conn| activity_ops::upsert_activity_stats(conn, user_id, stats))
    }

    pub fn count_events(&self, user_id: &str) -> CadenceResult<usize> {
        self.conn.with_conn(|conn| event_ops::count_events(conn, user_id))
    }
}

impl EventStore for SqliteStore {
    async fn query_events(
        &self,
        user_id: &str,
        event_types: Option<&[EventType]>,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
    ) -> CadenceResult<Vec<BehavioralEvent>> {
        self.conn
            .with_conn(|conn| event_ops::query_events(conn, user_id, event_types, since, until))
    }

    async fn list_habits(&self, user_id: &str) -> CadenceResult<Vec<Habit>> {
        self.conn.with_conn(|conn| habit_ops::list_habits(conn, user_id))
    }

    async fn query_habit_completions(
        &self,
        user_id: &str,
        habit_id: Option<&str>,
        since: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) -> CadenceResult<Vec<HabitCompletionRecord>> {
        self.conn.with_conn(|conn| {
            habit_ops::query_completions(conn, user_id, habit_id, since, until)
        })
    }

    async fn query_daily_activity_stats(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> CadenceResult<Option<DailyActivityStats>> {
        self.conn
            .with_conn(|conn| activity_ops::get_activity_stats(conn, user_id, date))
    }
}

impl AdjustmentLog for SqliteStore {
    async fn append_adjustments(&self, records: &[AdjustmentRecord]) -> CadenceResult<usize> {
        if records.is_empty() {
            return Ok(0);
        }
        self.conn
            .with_conn(|conn| adjustment_ops::append_adjustments(conn, records))
    }

    async fn adjustments_since(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> CadenceResult<Vec<AdjustmentRecord>> {
        self.conn
            .with_conn(|conn| adjustment_ops::adjustments_since(conn, user_id, since))
    }
}
