//! Typed samples extracted from raw behavioral events.
//!
//! Each analysis reads only the slice it needs. Extraction happens once per
//! request.

use chrono::{DateTime, Utc};

use cadence_core::models::{BehavioralEvent, EventPayload, TimeOfDay};

/// Interaction type recorded when the focus window loses focus.
pub const BLUR_INTERACTION: &str = "blur";

#[derive(Debug, Clone, PartialEq)]
pub struct FocusSample {
    pub timestamp: DateTime<Utc>,
    pub time_of_day: TimeOfDay,
    pub focus_quality: f64,
    pub energy_level: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistractionSample<'a> {
    pub timestamp: DateTime<Utc>,
    pub noise_level: Option<&'a str>,
    pub social_context: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskSample {
    pub timestamp: DateTime<Utc>,
    pub completed: bool,
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionSample {
    pub timestamp: DateTime<Utc>,
    pub accepted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentSample<'a> {
    pub location: Option<&'a str>,
    pub noise_level: Option<&'a str>,
}

/// Everything the pattern analyses consume, grouped by event type.
/// Every list is ordered by timestamp ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BehavioralSignals<'a> {
    pub focus: Vec<FocusSample>,
    pub distractions: Vec<DistractionSample<'a>>,
    pub tasks: Vec<TaskSample>,
    pub suggestions: Vec<SuggestionSample>,
    pub environment: Vec<EnvironmentSample<'a>>,
    pub skips: usize,
    pub modifications: usize,
}

impl<'a> BehavioralSignals<'a> {
    pub fn from_events(events: &'a [BehavioralEvent]) -> Self {
        let mut ordered: Vec<&BehavioralEvent> = events.iter().collect();
        ordered.sort_by_key(|e| e.timestamp);

        let mut signals = Self::default();
        for event in ordered {
            let ctx = &event.context;
            match &event.payload {
                EventPayload::ProductivityMetrics(m) => signals.focus.push(FocusSample {
                    timestamp: event.timestamp,
                    time_of_day: event.time_of_day(),
                    focus_quality: m.focus_quality,
                    energy_level: m.energy_level,
                }),
                EventPayload::UserInteraction(i) if i.interaction_type == BLUR_INTERACTION => {
                    signals.distractions.push(DistractionSample {
                        timestamp: event.timestamp,
                        noise_level: ctx.noise_level.as_deref(),
                        social_context: ctx.social_context.as_deref(),
                    })
                }
                EventPayload::TaskCompletion(t) => signals.tasks.push(TaskSample {
                    timestamp: event.timestamp,
                    completed: t.completed,
                    duration: t.duration,
                }),
                EventPayload::SuggestionResponse(s) => signals.suggestions.push(SuggestionSample {
                    timestamp: event.timestamp,
                    accepted: s.accepted,
                }),
                EventPayload::ContextualFactors(_) => {
                    let factors = ctx.factors.as_ref();
                    signals.environment.push(EnvironmentSample {
                        location: factors.and_then(|f| f.location.as_deref()),
                        noise_level: factors
                            .and_then(|f| f.noise_level.as_deref())
                            .or(ctx.noise_level.as_deref()),
                    })
                }
                EventPayload::SkipPattern(_) => signals.skips += 1,
                EventPayload::RoutineModification(_) => signals.modifications += 1,
                EventPayload::UserInteraction(_) | EventPayload::HabitCompletion(_) => {}
            }
        }
        signals
    }

    pub fn is_empty(&self) -> bool {
        self.focus.is_empty()
            && self.distractions.is_empty()
            && self.tasks.is_empty()
            && self.suggestions.is_empty()
            && self.environment.is_empty()
            && self.skips == 0
            && self.modifications == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::models::{EventContext, UserInteraction};
    use chrono::TimeZone;

    #[test]
    fn only_blur_interactions_count_as_distractions() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).unwrap();
        let event = |kind: &str| {
            BehavioralEvent::new(
                "u",
                EventPayload::UserInteraction(UserInteraction {
                    interaction_type: kind.to_string(),
                    target: None,
                }),
                ts,
            )
            .with_context(EventContext {
                noise_level: Some("loud".into()),
                ..Default::default()
            })
        };
        let events = vec![event("blur"), event("focus"), event("click")];
        let signals = BehavioralSignals::from_events(&events);
        assert_eq!(signals.distractions.len(), 1);
        assert_eq!(signals.distractions[0].noise_level, Some("loud"));
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(BehavioralSignals::from_events(&[]).is_empty());
    }
}
