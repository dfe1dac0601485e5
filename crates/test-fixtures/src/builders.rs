//! Builders for habits, completion records, and typed events.

use cadence_core::models::*;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

pub const USER: &str = "user-1";

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// `date` at `hour`:00 UTC.
pub fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(hour, 0, 0).expect("valid hour"))
}

pub fn habit(id: &str, created_on: NaiveDate) -> Habit {
    Habit {
        habit_id: id.to_string(),
        user_id: USER.to_string(),
        name: id.to_string(),
        created_on,
        active: true,
        time_of_day: None,
    }
}

pub fn habit_at(id: &str, created_on: NaiveDate, time_of_day: TimeOfDay) -> Habit {
    Habit {
        time_of_day: Some(time_of_day),
        ..habit(id, created_on)
    }
}

/// One record per entry of `pattern`, oldest first, the last entry on `end`.
pub fn completions(habit_id: &str, end: NaiveDate, pattern: &[bool]) -> Vec<HabitCompletionRecord> {
    let start = end - Duration::days(pattern.len() as i64 - 1);
    pattern
        .iter()
        .enumerate()
        .map(|(i, done)| HabitCompletionRecord {
            habit_id: habit_id.to_string(),
            user_id: USER.to_string(),
            date: start + Duration::days(i as i64),
            completed: *done,
            quality: done.then_some(CompletionQuality::Good),
            notes: None,
        })
        .collect()
}

/// First day covered by a pattern ending on `end`.
pub fn pattern_start(end: NaiveDate, len: usize) -> NaiveDate {
    end - Duration::days(len as i64 - 1)
}

pub fn productivity(
    ts: DateTime<Utc>,
    focus_quality: f64,
    time_of_day: Option<TimeOfDay>,
) -> BehavioralEvent {
    BehavioralEvent::new(
        USER,
        EventPayload::ProductivityMetrics(ProductivityMetrics {
            focus_quality,
            energy_level: Some(focus_quality),
            deep_work_minutes: None,
        }),
        ts,
    )
    .with_context(EventContext {
        time_of_day,
        ..Default::default()
    })
}

pub fn blur(ts: DateTime<Utc>, noise_level: Option<&str>, social_context: Option<&str>) -> BehavioralEvent {
    BehavioralEvent::new(
        USER,
        EventPayload::UserInteraction(UserInteraction {
            interaction_type: "blur".to_string(),
            target: None,
        }),
        ts,
    )
    .with_context(EventContext {
        noise_level: noise_level.map(str::to_string),
        social_context: social_context.map(str::to_string),
        ..Default::default()
    })
}

pub fn task(ts: DateTime<Utc>, completed: bool, duration: Option<f64>) -> BehavioralEvent {
    BehavioralEvent::new(
        USER,
        EventPayload::TaskCompletion(TaskCompletion {
            task_id: None,
            completed,
            duration,
        }),
        ts,
    )
}

pub fn suggestion(ts: DateTime<Utc>, accepted: bool) -> BehavioralEvent {
    BehavioralEvent::new(
        USER,
        EventPayload::SuggestionResponse(SuggestionResponse {
            suggestion_id: None,
            accepted,
        }),
        ts,
    )
}

pub fn environment(ts: DateTime<Utc>, location: Option<&str>, noise_level: Option<&str>) -> BehavioralEvent {
    BehavioralEvent::new(USER, EventPayload::ContextualFactors(ContextualFactors::default()), ts)
        .with_context(EventContext {
            factors: Some(EnvironmentFactors {
                location: location.map(str::to_string),
                noise_level: noise_level.map(str::to_string),
            }),
            ..Default::default()
        })
}

pub fn skip(ts: DateTime<Utc>) -> BehavioralEvent {
    BehavioralEvent::new(USER, EventPayload::SkipPattern(SkipPattern::default()), ts)
}

pub fn modification(ts: DateTime<Utc>) -> BehavioralEvent {
    BehavioralEvent::new(
        USER,
        EventPayload::RoutineModification(RoutineModification::default()),
        ts,
    )
}

pub fn activity(date: NaiveDate, deep_work_hours: f64, focus_quality: f64) -> DailyActivityStats {
    DailyActivityStats {
        date,
        focused_minutes: deep_work_hours * 60.0,
        deep_work_hours,
        focus_quality,
        sessions: 1,
        breaks_taken: 0,
    }
}

pub fn profile(completion_percentage: f64) -> Profile {
    Profile {
        user_id: USER.to_string(),
        completion_percentage,
        target_identity: Some("a focused writer".to_string()),
        learning_style: Some(LearningStyle::Visual),
        detailed_profile: serde_json::Value::Null,
    }
}

pub fn review(date: NaiveDate, rating: f64, obstacles: &[&str]) -> EveningReview {
    EveningReview {
        date,
        rating,
        wins: Vec::new(),
        obstacles: obstacles.iter().map(|s| s.to_string()).collect(),
        tomorrow_focus: None,
    }
}
