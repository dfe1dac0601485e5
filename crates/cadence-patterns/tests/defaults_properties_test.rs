//! Every sub-analysis returns its documented default below the event minimum.

use cadence_core::config::PatternConfig;
use cadence_core::models::{BehavioralEvent, LearningStyle, TimeOfDay};
use cadence_patterns::analyses::{self, motivation};
use cadence_patterns::analyze;
use chrono::Duration;
use proptest::prelude::*;
use test_fixtures::*;

fn arb_event() -> impl Strategy<Value = BehavioralEvent> {
    let base = at(day(2026, 3, 20), 0);
    (0u8..8, 0i64..(30 * 24), 0.0f64..=5.0, any::<bool>()).prop_map(move |(kind, hours, x, flag)| {
        let ts = base - Duration::hours(hours);
        match kind {
            0 => productivity(ts, x, if flag { Some(TimeOfDay::Night) } else { None }),
            1 => blur(ts, flag.then_some("loud"), None),
            2 => task(ts, flag, Some(x * 20.0)),
            3 => suggestion(ts, flag),
            4 => environment(ts, Some("home"), Some("quiet")),
            5 => skip(ts),
            6 => modification(ts),
            _ => blur(ts, None, Some("friends")),
        }
    })
}

proptest! {
    /// Fewer than five events in total means fewer than five relevant events
    /// for every analysis.
    #[test]
    fn sparse_history_returns_defaults(events in prop::collection::vec(arb_event(), 0..5)) {
        let config = PatternConfig::default();
        let insights = analyze(&events, Some(LearningStyle::Kinesthetic), &config);

        prop_assert_eq!(insights.productivity_peaks, vec!["06:00-12:00", "12:00-17:00"]);
        prop_assert!(insights.distraction_triggers.is_empty());
        prop_assert_eq!(insights.optimal_session_minutes, config.default_session_minutes);
        prop_assert_eq!(insights.learning_style, LearningStyle::Kinesthetic);
        prop_assert_eq!(insights.motivation_factors, motivation::MASTERY_ORIENTED.to_vec());
        prop_assert_eq!(insights.environmental_preferences, analyses::environment::default_preferences());
        prop_assert!(insights.adaptation_recommendations.is_empty());
    }

    #[test]
    fn rates_are_bounded(events in prop::collection::vec(arb_event(), 0..200)) {
        let insights = analyze(&events, None, &PatternConfig::default());
        prop_assert!((0.0..=1.0).contains(&insights.suggestion_acceptance_rate));
        prop_assert!((0.0..=1.0).contains(&insights.task_completion_rate));
        prop_assert!(insights.productivity_peaks.len() <= 2);
        prop_assert!(insights.distraction_triggers.len() <= 3);
        prop_assert!(insights.environmental_preferences.locations.len() <= 2);
        prop_assert!(insights.optimal_session_minutes > 0);
    }
}
