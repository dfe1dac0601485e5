//! Append-only adjustment log.

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use cadence_core::errors::CadenceResult;
use cadence_core::models::{AdjustmentRecord, SystemAdjustment};

use super::{date_text, parse_date, parse_micros};
use crate::sqlite_err;

/// All records are written in one transaction. A record whose id, or whose
/// user, day and type, is already logged is skipped, so the return value
/// counts new rows only.
pub fn append_adjustments(conn: &Connection, records: &[AdjustmentRecord]) -> CadenceResult<usize> {
    let tx = conn.unchecked_transaction().map_err(sqlite_err)?;
    let mut inserted = 0;
    for record in records {
        let adjustment = serde_json::to_string(&record.adjustment)?;
        inserted += tx
            .execute(
                "INSERT OR IGNORE INTO adjustment_log
                    (id, user_id, emitted_on, adjustment_type, adjustment, recorded_micros)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.id,
                    record.user_id,
                    date_text(record.emitted_on),
                    record.adjustment.adjustment_type.as_str(),
                    adjustment,
                    record.recorded_at.timestamp_micros(),
                ],
            )
            .map_err(sqlite_err)?;
    }
    tx.commit().map_err(sqlite_err)?;
    Ok(inserted)
}

/// Records emitted on or after `since`, oldest first.
pub fn adjustments_since(
    conn: &Connection,
    user_id: &str,
    since: NaiveDate,
) -> CadenceResult<Vec<AdjustmentRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, emitted_on, adjustment, recorded_micros
             FROM adjustment_log WHERE user_id = ?1 AND emitted_on >= ?2
             ORDER BY emitted_on ASC, recorded_micros ASC",
        )
        .map_err(sqlite_err)?;
    let rows = stmt
        .query_map(params![user_id, date_text(since)], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, i64>(4)?,
            ))
        })
        .map_err(sqlite_err)?;

    let mut records = Vec::new();
    for row in rows {
        let (id, user_id, emitted_on, adjustment, recorded) = row.map_err(sqlite_err)?;
        let adjustment: SystemAdjustment = serde_json::from_str(&adjustment)?;
        records.push(AdjustmentRecord {
            id,
            user_id,
            emitted_on: parse_date(&emitted_on)?,
            adjustment,
            recorded_at: parse_micros(recorded)?,
        });
    }
    Ok(records)
}
