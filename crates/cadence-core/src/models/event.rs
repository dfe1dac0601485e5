//! Behavioral events.
//!
//! Each event type carries its own typed payload. Untyped maps arriving from
//! the UI are converted by [`crate::ingest::validate_event`] before they reach
//! any engine.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::TimeOfDay;
use crate::errors::CadenceError;

/// Discriminant of a [`BehavioralEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    UserInteraction,
    TaskCompletion,
    ProductivityMetrics,
    SuggestionResponse,
    ContextualFactors,
    SkipPattern,
    RoutineModification,
    HabitCompletion,
}

impl EventType {
    pub const ALL: [EventType; 8] = [
        EventType::UserInteraction,
        EventType::TaskCompletion,
        EventType::ProductivityMetrics,
        EventType::SuggestionResponse,
        EventType::ContextualFactors,
        EventType::SkipPattern,
        EventType::RoutineModification,
        EventType::HabitCompletion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserInteraction => "user_interaction",
            Self::TaskCompletion => "task_completion",
            Self::ProductivityMetrics => "productivity_metrics",
            Self::SuggestionResponse => "suggestion_response",
            Self::ContextualFactors => "contextual_factors",
            Self::SkipPattern => "skip_pattern",
            Self::RoutineModification => "routine_modification",
            Self::HabitCompletion => "habit_completion",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CadenceError::invalid("event_type", format!("unknown event type '{s}'")))
    }
}

/// A UI interaction such as focus/blur of the timer window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInteraction {
    pub interaction_type: String,
    #[serde(default)]
    pub target: Option<String>,
}

/// A finished (or abandoned) task or focus session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompletion {
    #[serde(default)]
    pub task_id: Option<String>,
    pub completed: bool,
    /// Session duration in minutes.
    #[serde(default)]
    pub duration: Option<f64>,
}

/// Self-reported or measured focus for a session. Scales are 0-5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityMetrics {
    pub focus_quality: f64,
    #[serde(default)]
    pub energy_level: Option<f64>,
    #[serde(default)]
    pub deep_work_minutes: Option<f64>,
}

/// The user's reaction to an engine suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    #[serde(default)]
    pub suggestion_id: Option<String>,
    pub accepted: bool,
}

/// Environment observation. The factors themselves live in [`EventContext::factors`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualFactors {
    #[serde(default)]
    pub note: Option<String>,
}

/// A routine step the user skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipPattern {
    #[serde(default)]
    pub routine_id: Option<String>,
    #[serde(default)]
    pub step: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// A manual edit to a generated routine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineModification {
    #[serde(default)]
    pub routine_id: Option<String>,
    #[serde(default)]
    pub change: Option<String>,
}

/// A habit check-in recorded through the event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletion {
    pub habit_id: String,
    pub completed: bool,
}

/// Typed payload, one variant per [`EventType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", content = "event_data", rename_all = "snake_case")]
pub enum EventPayload {
    UserInteraction(UserInteraction),
    TaskCompletion(TaskCompletion),
    ProductivityMetrics(ProductivityMetrics),
    SuggestionResponse(SuggestionResponse),
    ContextualFactors(ContextualFactors),
    SkipPattern(SkipPattern),
    RoutineModification(RoutineModification),
    HabitCompletion(HabitCompletion),
}

impl EventPayload {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::UserInteraction(_) => EventType::UserInteraction,
            Self::TaskCompletion(_) => EventType::TaskCompletion,
            Self::ProductivityMetrics(_) => EventType::ProductivityMetrics,
            Self::SuggestionResponse(_) => EventType::SuggestionResponse,
            Self::ContextualFactors(_) => EventType::ContextualFactors,
            Self::SkipPattern(_) => EventType::SkipPattern,
            Self::RoutineModification(_) => EventType::RoutineModification,
            Self::HabitCompletion(_) => EventType::HabitCompletion,
        }
    }
}

/// Location and noise observed in the environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentFactors {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub noise_level: Option<String>,
}

/// Context captured alongside an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventContext {
    #[serde(default)]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default)]
    pub noise_level: Option<String>,
    #[serde(default)]
    pub social_context: Option<String>,
    #[serde(default)]
    pub factors: Option<EnvironmentFactors>,
    /// Keys the engine does not interpret, kept for export.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// An immutable behavioral event owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralEvent {
    pub user_id: String,
    pub payload: EventPayload,
    #[serde(default)]
    pub context: EventContext,
    pub timestamp: DateTime<Utc>,
}

impl BehavioralEvent {
    pub fn new(user_id: impl Into<String>, payload: EventPayload, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            payload,
            context: EventContext::default(),
            timestamp,
        }
    }

    pub fn with_context(mut self, context: EventContext) -> Self {
        self.context = context;
        self
    }

    pub fn event_type(&self) -> EventType {
        self.payload.event_type()
    }

    /// The context bucket if recorded, otherwise derived from the timestamp.
    pub fn time_of_day(&self) -> TimeOfDay {
        self.context
            .time_of_day
            .unwrap_or_else(|| TimeOfDay::from_timestamp(self.timestamp))
    }

    /// Calendar day (UTC) of the event.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
