//! Per-day activity totals.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use cadence_core::errors::CadenceResult;
use cadence_core::models::DailyActivityStats;

use super::{date_text, parse_date};
use crate::sqlite_err;

pub fn upsert_activity_stats(
    conn: &Connection,
    user_id: &str,
    stats: &DailyActivityStats,
) -> CadenceResult<()> {
    conn.execute(
        "INSERT INTO daily_activity
            (user_id, date, focused_minutes, deep_work_hours, focus_quality, sessions, breaks_taken)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(user_id, date) DO UPDATE SET
            focused_minutes = excluded.focused_minutes,
            deep_work_hours = excluded.deep_work_hours,
            focus_quality = excluded.focus_quality,
            sessions = excluded.sessions,
            breaks_taken = excluded.breaks_taken",
        params![
            user_id,
            date_text(stats.date),
            stats.focused_minutes,
            stats.deep_work_hours,
            stats.focus_quality,
            stats.sessions,
            stats.breaks_taken,
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

pub fn get_activity_stats(
    conn: &Connection,
    user_id: &str,
    date: NaiveDate,
) -> CadenceResult<Option<DailyActivityStats>> {
    let row = conn
        .query_row(
            "SELECT date, focused_minutes, deep_work_hours, focus_quality, sessions, breaks_taken
             FROM daily_activity WHERE user_id = ?1 AND date = ?2",
            params![user_id, date_text(date)],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, f64>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, u32>(4)?,
                    row.get::<_, u32>(5)?,
                ))
            },
        )
        .optional()
        .map_err(sqlite_err)?;

    row.map(
        |(date, focused_minutes, deep_work_hours, focus_quality, sessions, breaks_taken)| {
            Ok(DailyActivityStats {
                date: parse_date(&date)?,
                focused_minutes,
                deep_work_hours,
                focus_quality,
                sessions,
                breaks_taken,
            })
        },
    )
    .transpose()
}
