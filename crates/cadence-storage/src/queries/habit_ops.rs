//! Habit definitions and their per-day completion records.

use chrono::NaiveDate;
use rusqlite::types::ToSql;
use rusqlite::{params, Connection, Row};

use cadence_core::errors::CadenceResult;
use cadence_core::models::{CompletionQuality, Habit, HabitCompletionRecord, TimeOfDay};

use super::{date_text, parse_date};
use crate::{malformed, sqlite_err};

pub fn upsert_habit(conn: &Connection, habit: &Habit) -> CadenceResult<()> {
    conn.execute(
        "INSERT INTO habits (habit_id, user_id, name, created_on, active, time_of_day)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(habit_id) DO UPDATE SET
            name = excluded.name,
            created_on = excluded.created_on,
            active = excluded.active,
            time_of_day = excluded.time_of_day",
        params![
            habit.habit_id,
            habit.user_id,
            habit.name,
            date_text(habit.created_on),
            habit.active,
            habit.time_of_day.map(TimeOfDay::as_str),
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

pub fn list_habits(conn: &Connection, user_id: &str) -> CadenceResult<Vec<Habit>> {
    let mut stmt = conn
        .prepare(
            "SELECT habit_id, user_id, name, created_on, active, time_of_day
             FROM habits WHERE user_id = ?1 ORDER BY created_on ASC, habit_id ASC",
        )
        .map_err(sqlite_err)?;
    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, bool>(4)?,
                row.get::<_, Option<String>>(5)?,
            ))
        })
        .map_err(sqlite_err)?;

    let mut habits = Vec::new();
    for row in rows {
        let (habit_id, user_id, name, created_on, active, time_of_day) = row.map_err(sqlite_err)?;
        habits.push(Habit {
            habit_id,
            user_id,
            name,
            created_on: parse_date(&created_on)?,
            active,
            time_of_day: time_of_day.as_deref().map(parse_time_of_day).transpose()?,
        });
    }
    Ok(habits)
}

/// One record per (habit, day): a second write for the same day replaces the first.
pub fn upsert_completion(conn: &Connection, record: &HabitCompletionRecord) -> CadenceResult<()> {
    conn.execute(
        "INSERT INTO habit_completions (habit_id, user_id, date, completed, quality, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(habit_id, date) DO UPDATE SET
            completed = excluded.completed,
            quality = excluded.quality,
            notes = excluded.notes",
        params![
            record.habit_id,
            record.user_id,
            date_text(record.date),
            record.completed,
            record.quality.map(quality_text),
            record.notes,
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Records within `[since, until]`, oldest first.
pub fn query_completions(
    conn: &Connection,
    user_id: &str,
    habit_id: Option<&str>,
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
) -> CadenceResult<Vec<HabitCompletionRecord>> {
    let mut sql = String::from(
        "SELECT habit_id, user_id, date, completed, quality, notes
         FROM habit_completions WHERE user_id = ?",
    );
    let mut dyn_params: Vec<Box<dyn ToSql>> = vec![Box::new(user_id.to_string())];
    if let Some(habit_id) = habit_id {
        sql.push_str(" AND habit_id = ?");
        dyn_params.push(Box::new(habit_id.to_string()));
    }
    if let Some(since) = since {
        sql.push_str(" AND date >= ?");
        dyn_params.push(Box::new(date_text(since)));
    }
    if let Some(until) = until {
        sql.push_str(" AND date <= ?");
        dyn_params.push(Box::new(date_text(until)));
    }
    sql.push_str(" ORDER BY date ASC, habit_id ASC");

    let mut stmt = conn.prepare(&sql).map_err(sqlite_err)?;
    let params_refs: Vec<&dyn ToSql> = dyn_params.iter().map(|p| p.as_ref()).collect();
    let rows = stmt
        .query_map(params_refs.as_slice(), |row| Ok(read_completion(row)))
        .map_err(sqlite_err)?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(sqlite_err)??);
    }
    Ok(records)
}

fn read_completion(row: &Row<'_>) -> CadenceResult<HabitCompletionRecord> {
    let date: String = row.get(2).map_err(sqlite_err)?;
    let quality: Option<String> = row.get(4).map_err(sqlite_err)?;
    Ok(HabitCompletionRecord {
        habit_id: row.get(0).map_err(sqlite_err)?,
        user_id: row.get(1).map_err(sqlite_err)?,
        date: parse_date(&date)?,
        completed: row.get(3).map_err(sqlite_err)?,
        quality: quality.as_deref().map(parse_quality).transpose()?,
        notes: row.get(5).map_err(sqlite_err)?,
    })
}

fn quality_text(quality: CompletionQuality) -> &'static str {
    match quality {
        CompletionQuality::Excellent => "excellent",
        CompletionQuality::Good => "good",
        CompletionQuality::Poor => "poor",
    }
}

fn parse_quality(text: &str) -> CadenceResult<CompletionQuality> {
    match text {
        "excellent" => Ok(CompletionQuality::Excellent),
        "good" => Ok(CompletionQuality::Good),
        "poor" => Ok(CompletionQuality::Poor),
        other => Err(malformed(format!("completion quality '{other}'"))),
    }
}

fn parse_time_of_day(text: &str) -> CadenceResult<TimeOfDay> {
    TimeOfDay::ALL
        .into_iter()
        .find(|t| t.as_str() == text)
        .ok_or_else(|| malformed(format!("time of day '{text}'")))
}
