//! Ingestion boundary: untyped UI payloads in, typed events out.
//!
//! The UI emits `event_data`/`context` as free-form maps with camelCase keys.
//! Everything is validated here so that a renamed field fails loudly at the
//! boundary instead of silently zeroing a heuristic downstream.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::constants::{MAX_FOCUS_QUALITY, MAX_USER_ID_LEN};
use crate::errors::{CadenceError, CadenceResult};
use crate::models::{BehavioralEvent, DateWindow, EventContext, EventPayload, EventType};

static USER_ID_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.:@-]+$").ok());

/// An event exactly as the UI submits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBehavioralEvent {
    pub user_id: String,
    pub event_type: String,
    #[serde(default)]
    pub event_data: Value,
    #[serde(default)]
    pub context: Value,
    pub timestamp: DateTime<Utc>,
}

/// Reject empty, oversized, or oddly-charactered user ids before any query runs.
pub fn validate_user_id(user_id: &str) -> CadenceResult<()> {
    if user_id.trim().is_empty() {
        return Err(CadenceError::invalid("user_id", "must not be empty"));
    }
    if user_id.len() > MAX_USER_ID_LEN {
        return Err(CadenceError::invalid(
            "user_id",
            format!("longer than {MAX_USER_ID_LEN} characters"),
        ));
    }
    let matches = USER_ID_PATTERN
        .as_ref()
        .map(|re| re.is_match(user_id))
        .unwrap_or(true);
    if !matches {
        return Err(CadenceError::invalid(
            "user_id",
            "contains characters outside [A-Za-z0-9_.:@-]",
        ));
    }
    Ok(())
}

/// Reject windows whose start is after their end.
pub fn validate_date_range(window: &DateWindow) -> CadenceResult<()> {
    DateWindow::new(window.start, window.end).map(|_| ())
}

/// Convert a raw UI event into a typed [`BehavioralEvent`].
pub fn validate_event(raw: RawBehavioralEvent) -> CadenceResult<BehavioralEvent> {
    validate_user_id(&raw.user_id)?;
    let event_type = EventType::from_str(&raw.event_type)?;

    let event_data = match raw.event_data {
        Value::Null => json!({}),
        Value::Object(map) => Value::Object(map),
        other => {
            return Err(CadenceError::invalid(
                "event_data",
                format!("expected an object, got {other}"),
            ))
        }
    };
    let payload: EventPayload = serde_json::from_value(json!({
        "event_type": event_type.as_str(),
        "event_data": event_data,
    }))
    .map_err(|e| CadenceError::invalid("event_data", e.to_string()))?;
    check_ranges(&payload)?;

    let context: EventContext = match raw.context {
        Value::Null => EventContext::default(),
        value @ Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| CadenceError::invalid("context", e.to_string()))?,
        other => {
            return Err(CadenceError::invalid(
                "context",
                format!("expected an object, got {other}"),
            ))
        }
    };

    Ok(BehavioralEvent {
        user_id: raw.user_id,
        payload,
        context,
        timestamp: raw.timestamp,
    })
}

/// Validate a batch, stopping at the first invalid event.
pub fn validate_events(raw: Vec<RawBehavioralEvent>) -> CadenceResult<Vec<BehavioralEvent>> {
    raw.into_iter().map(validate_event).collect()
}

fn check_ranges(payload: &EventPayload) -> CadenceResult<()> {
    match payload {
        EventPayload::ProductivityMetrics(m) => {
            check_scale("event_data.focusQuality", m.focus_quality)?;
            if let Some(energy) = m.energy_level {
                check_scale("event_data.energyLevel", energy)?;
            }
            if let Some(minutes) = m.deep_work_minutes {
                check_non_negative("event_data.deepWorkMinutes", minutes)?;
            }
        }
        EventPayload::TaskCompletion(t) => {
            if let Some(duration) = t.duration {
                check_non_negative("event_data.duration", duration)?;
            }
        }
        EventPayload::UserInteraction(i) if i.interaction_type.trim().is_empty() => {
            return Err(CadenceError::invalid(
                "event_data.interactionType",
                "must not be empty",
            ));
        }
        EventPayload::HabitCompletion(h) if h.habit_id.trim().is_empty() => {
            return Err(CadenceError::invalid("event_data.habitId", "must not be empty"));
        }
        _ => {}
    }
    Ok(())
}

fn check_scale(field: &str, value: f64) -> CadenceResult<()> {
    if value.is_finite() && (0.0..=MAX_FOCUS_QUALITY).contains(&value) {
        Ok(())
    } else {
        Err(CadenceError::invalid(
            field,
            format!("{value} is outside 0-{MAX_FOCUS_QUALITY}"),
        ))
    }
}

fn check_non_negative(field: &str, value: f64) -> CadenceResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CadenceError::invalid(field, format!("{value} must be >= 0")))
    }
}
