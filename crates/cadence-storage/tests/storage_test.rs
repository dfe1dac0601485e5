use cadence_core::models::*;
use cadence_core::traits::{AdjustmentLog, EventStore};
use cadence_core::CadenceError;
use cadence_storage::migrations::LATEST_VERSION;
use cadence_storage::SqliteStore;
use chrono::Duration;
use test_fixtures::*;

fn store() -> SqliteStore {
    SqliteStore::open_in_memory().unwrap()
}

fn adjustment(kind: AdjustmentType) -> SystemAdjustment {
    SystemAdjustment {
        adjustment_type: kind,
        reason: "test".to_string(),
        expected_impact: 0.3,
        implementation_steps: vec!["step".to_string()],
    }
}

#[test]
fn migrations_reach_latest_version() {
    assert_eq!(store().schema_version().unwrap(), LATEST_VERSION);
}

// ── Events ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn events_round_trip_with_context() {
    let s = store();
    let d = day(2026, 3, 2);
    let noisy = blur(at(d, 14), Some("loud"), Some("coworkers"));
    s.record_event(&task(at(d, 10), true, Some(25.0))).unwrap();
    s.record_event(&noisy).unwrap();

    let events = s.query_events(USER, None, None, None).await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], noisy);
    assert_eq!(events[1].context.social_context.as_deref(), Some("coworkers"));
}

#[tokio::test]
async fn events_are_ordered_and_filtered() {
    let s = store();
    let d = day(2026, 3, 2);
    s.record_event(&suggestion(at(d, 15), true)).unwrap();
    s.record_event(&productivity(at(d, 9), 4.0, None)).unwrap();
    s.record_event(&task(at(d, 12), false, None)).unwrap();

    let all = s.query_events(USER, None, None, None).await.unwrap();
    let hours: Vec<_> = all.iter().map(|e| e.timestamp).collect();
    assert!(hours.windows(2).all(|w| w[0] <= w[1]));

    let only = s
        .query_events(
            USER,
            Some(&[EventType::TaskCompletion, EventType::SuggestionResponse]),
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(only.len(), 2);
    assert!(only.iter().all(|e| e.event_type() != EventType::ProductivityMetrics));

    assert!(s.query_events(USER, Some(&[]), None, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn event_range_is_half_open() {
    let s = store();
    let d = day(2026, 3, 2);
    for hour in [8, 9, 10] {
        s.record_event(&skip(at(d, hour))).unwrap();
    }
    let events = s
        .query_events(USER, None, Some(at(d, 9)), Some(at(d, 10)))
        .await
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].timestamp, at(d, 9));
}

#[tokio::test]
async fn events_are_scoped_to_their_user() {
    let s = store();
    let mut other = skip(at(day(2026, 3, 2), 9));
    other.user_id = "user-2".to_string();
    s.record_event(&other).unwrap();
    assert!(s.query_events(USER, None, None, None).await.unwrap().is_empty());
    assert_eq!(s.count_events("user-2").unwrap(), 1);
}

#[test]
fn blank_user_is_rejected_on_write() {
    let s = store();
    let mut event = skip(at(day(2026, 3, 2), 9));
    event.user_id = " ".to_string();
    assert!(matches!(
        s.record_event(&event),
        Err(CadenceError::InvalidInput { .. })
    ));
}

// ── Habits and completions ─────────────────────────────────────────────────

#[tokio::test]
async fn habits_upsert_in_place() {
    let s = store();
    let created = day(2026, 1, 1);
    s.upsert_habit(&habit_at("read", created, TimeOfDay::Evening)).unwrap();
    s.upsert_habit(&habit("run", created)).unwrap();
    let mut retired = habit("run", created);
    retired.active = false;
    s.upsert_habit(&retired).unwrap();

    let habits = s.list_habits(USER).await.unwrap();
    assert_eq!(habits.len(), 2);
    let read = habits.iter().find(|h| h.habit_id == "read").unwrap();
    assert_eq!(read.time_of_day, Some(TimeOfDay::Evening));
    assert!(!habits.iter().find(|h| h.habit_id == "run").unwrap().active);
}

#[tokio::test]
async fn one_completion_per_habit_and_day() {
    let s = store();
    let d = day(2026, 1, 10);
    s.upsert_habit(&habit("read", day(2026, 1, 1))).unwrap();
    for record in completions("read", d, &[true, false, true]) {
        s.upsert_completion(&record).unwrap();
    }
    let mut redo = completions("read", d, &[true]).remove(0);
    redo.notes = Some("late".to_string());
    s.upsert_completion(&redo).unwrap();
    let mut undo = completions("read", d - Duration::days(2), &[false]).remove(0);
    undo.quality = None;
    s.upsert_completion(&undo).unwrap();

    let records = s
        .query_habit_completions(USER, Some("read"), None, None)
        .await
        .unwrap();
    assert_eq!(records.len(), 3);
    assert!(records.windows(2).all(|w| w[0].date < w[1].date));
    assert!(!records[0].completed);
    assert_eq!(records[2].notes.as_deref(), Some("late"));
    assert_eq!(records[2].quality, Some(CompletionQuality::Good));
}

#[tokio::test]
async fn completion_range_is_inclusive() {
    let s = store();
    let end = day(2026, 1, 10);
    s.upsert_habit(&habit("read", day(2026, 1, 1))).unwrap();
    for record in completions("read", end, &[true; 10]) {
        s.upsert_completion(&record).unwrap();
    }
    let records = s
        .query_habit_completions(USER, None, Some(day(2026, 1, 3)), Some(day(2026, 1, 5)))
        .await
        .unwrap();
    let dates: Vec<_> = records.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day(2026, 1, 3), day(2026, 1, 4), day(2026, 1, 5)]);
}

#[test]
fn completion_for_unknown_habit_is_a_storage_error() {
    let s = store();
    let record = completions("ghost", day(2026, 1, 1), &[true]).remove(0);
    let err = s.upsert_completion(&record).unwrap_err();
    assert!(matches!(err, CadenceError::StorageError(_)));
    assert!(!err.is_fatal());
}

// ── Activity ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn activity_stats_replace_per_day() {
    let s = store();
    let d = day(2026, 2, 1);
    s.upsert_activity_stats(USER, &activity(d, 1.0, 2.0)).unwrap();
    s.upsert_activity_stats(USER, &activity(d, 2.5, 4.0)).unwrap();

    let stats = s.query_daily_activity_stats(USER, d).await.unwrap().unwrap();
    assert_eq!(stats.deep_work_hours, 2.5);
    assert_eq!(stats.focus_quality, 4.0);
    assert!(s
        .query_daily_activity_stats(USER, d + Duration::days(1))
        .await
        .unwrap()
        .is_none());
}

// ── Adjustment log ─────────────────────────────────────────────────────────

#[tokio::test]
async fn adjustment_log_appends_and_filters_by_day() {
    let s = store();
    let records = vec![
        AdjustmentRecord::new(USER, day(2026, 4, 1), adjustment(AdjustmentType::Simplify)),
        AdjustmentRecord::new(USER, day(2026, 4, 8), adjustment(AdjustmentType::TimingOptimization)),
    ];
    assert_eq!(s.append_adjustments(&records).await.unwrap(), 2);
    assert_eq!(s.append_adjustments(&records[..1]).await.unwrap(), 0);
    assert_eq!(s.append_adjustments(&[]).await.unwrap(), 0);

    let since = s.adjustments_since(USER, day(2026, 4, 2)).await.unwrap();
    assert_eq!(since.len(), 1);
    assert_eq!(since[0], records[1]);
    assert_eq!(s.adjustments_since(USER, day(2026, 1, 1)).await.unwrap().len(), 2);
    assert!(s.adjustments_since("user-2", day(2026, 1, 1)).await.unwrap().is_empty());
}

#[tokio::test]
async fn adjustment_log_keeps_one_record_per_type_per_day() {
    let s = store();
    let d = day(2026, 4, 1);
    let first = AdjustmentRecord::new(USER, d, adjustment(AdjustmentType::Simplify));
    assert_eq!(s.append_adjustments(&[first.clone()]).await.unwrap(), 1);

    // Re-emitted later the same day with a different reason.
    let mut rerun = adjustment(AdjustmentType::Simplify);
    rerun.reason = "rerun".to_string();
    let rerun = AdjustmentRecord::new(USER, d, rerun);
    assert_eq!(s.append_adjustments(&[rerun]).await.unwrap(), 0);

    // A foreign id for the same user, day and type is still rejected.
    let mut foreign = AdjustmentRecord::new(USER, d, adjustment(AdjustmentType::Simplify));
    foreign.id = "legacy-id".to_string();
    assert_eq!(s.append_adjustments(&[foreign]).await.unwrap(), 0);

    let other_type = AdjustmentRecord::new(USER, d, adjustment(AdjustmentType::TimingOptimization));
    assert_eq!(s.append_adjustments(&[other_type]).await.unwrap(), 1);

    let logged = s.adjustments_since(USER, d).await.unwrap();
    assert_eq!(logged.len(), 2);
    assert!(logged.iter().any(|r| r == &first));
}

#[test]
fn dedup_migration_collapses_existing_duplicates() {
    use cadence_storage::migrations::{
        current_version, run_migrations, v001_initial, v002_adjustment_log,
    };

    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(v001_initial::MIGRATION_SQL).unwrap();
    conn.execute_batch(v002_adjustment_log::MIGRATION_SQL).unwrap();
    conn.pragma_update(None, "user_version", 2).unwrap();
    for id in ["a", "b", "c"] {
        conn.execute(
            "INSERT INTO adjustment_log
                (id, user_id, emitted_on, adjustment_type, adjustment, recorded_micros)
             VALUES (?1, 'user-1', '2026-04-01', 'simplify', '{}', 0)",
            [id],
        )
        .unwrap();
    }

    run_migrations(&conn).unwrap();
    assert_eq!(current_version(&conn).unwrap(), LATEST_VERSION);
    let kept: Vec<String> = conn
        .prepare("SELECT id FROM adjustment_log")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(kept, vec!["a".to_string()]);
}
