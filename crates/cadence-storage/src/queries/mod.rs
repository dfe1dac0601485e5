//! Parameterized queries, one module per table.

pub mod activity_ops;
pub mod adjustment_ops;
pub mod event_ops;
pub mod habit_ops;

use chrono::{DateTime, NaiveDate, Utc};

use cadence_core::errors::CadenceResult;

use crate::malformed;

pub(crate) fn date_text(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn parse_date(text: &str) -> CadenceResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|e| malformed(format!("date '{text}': {e}")))
}

pub(crate) fn parse_micros(micros: i64) -> CadenceResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros).ok_or_else(|| malformed(format!("timestamp {micros}")))
}
