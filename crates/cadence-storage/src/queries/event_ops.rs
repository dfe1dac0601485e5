//! Append and range-query behavioral events.

use chrono::{DateTime, Utc};
use rusqlite::types::ToSql;
use rusqlite::{params, Connection};

use cadence_core::errors::CadenceResult;
use cadence_core::models::{BehavioralEvent, EventContext, EventPayload, EventType};

use super::parse_micros;
use crate::sqlite_err;

pub fn insert_event(conn: &Connection, event: &BehavioralEvent) -> CadenceResult<i64> {
    let payload = serde_json::to_string(&event.payload)?;
    let context = serde_json::to_string(&event.context)?;
    conn.execute(
        "INSERT INTO events (user_id, event_type, payload, context, ts_micros)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            event.user_id,
            event.event_type().as_str(),
            payload,
            context,
            event.timestamp.timestamp_micros(),
        ],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// Events in `[since, until)`, oldest first. Insertion order breaks ties.
pub fn query_events(
    conn: &Connection,
    user_id: &str,
    event_types: Option<&[EventType]>,
    since: Option<DateTime<Utc>>,
    until: Option<DateTime<Utc>>,
) -> CadenceResult<Vec<BehavioralEvent>> {
    if event_types.is_some_and(|t| t.is_empty()) {
        return Ok(Vec::new());
    }

    let mut sql = String::from("SELECT user_id, payload, context, ts_micros FROM events WHERE user_id = ?");
    let mut dyn_params: Vec<Box<dyn ToSql>> = vec![Box::new(user_id.to_string())];
    if let Some(types) = event_types {
        let placeholders = vec!["?"; types.len()].join(", ");
        sql.push_str(&format!(" AND event_type IN ({placeholders})"));
        dyn_params.extend(types.iter().map(|t| Box::new(t.as_str()) as Box<dyn ToSql>));
    }
    if let Some(since) = since {
        sql.push_str(" AND ts_micros >= ?");
        dyn_params.push(Box::new(since.timestamp_micros()));
    }
    if let Some(until) = until {
        sql.push_str(" AND ts_micros < ?");
        dyn_params.push(Box::new(until.timestamp_micros()));
    }
    sql.push_str(" ORDER BY ts_micros ASC, id ASC");

    let mut stmt = conn.prepare(&sql).map_err(sqlite_err)?;
    let params_refs: Vec<&dyn ToSql> = dyn_params.iter().map(|p| p.as_ref()).collect();
    let rows = stmt
        .query_map(params_refs.as_slice(), |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })
        .map_err(sqlite_err)?;

    let mut events = Vec::new();
    for row in rows {
        let (user_id, payload, context, ts) = row.map_err(sqlite_err)?;
        let payload: EventPayload = serde_json::from_str(&payload)?;
        let context: EventContext = serde_json::from_str(&context)?;
        events.push(BehavioralEvent {
            user_id,
            payload,
            context,
            timestamp: parse_micros(ts)?,
        });
    }
    Ok(events)
}

pub fn count_events(conn: &Connection, user_id: &str) -> CadenceResult<usize> {
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM events WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )
        .map_err(sqlite_err)?;
    Ok(n.max(0) as usize)
}
