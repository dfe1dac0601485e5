use std::sync::Arc;

use cadence_core::config::PatternConfig;
use cadence_core::models::*;
use cadence_core::traits::FixedClock;
use cadence_core::CadenceError;
use cadence_patterns::analyses::{adaptation, distractions, motivation, peaks};
use cadence_patterns::{analyze, derive_insights, BehavioralSignals, PatternEngine};
use chrono::Duration;
use test_fixtures::*;

fn today() -> chrono::NaiveDate {
    day(2026, 3, 20)
}

fn config() -> PatternConfig {
    PatternConfig::default()
}

// ── Productivity peaks ─────────────────────────────────────────────────────

#[test]
fn peaks_rank_buckets_by_mean_focus() {
    let mut events = Vec::new();
    for i in 0..3 {
        let d = today() - Duration::days(i);
        events.push(productivity(at(d, 9), 2.0, Some(TimeOfDay::Morning)));
        events.push(productivity(at(d, 14), 3.0, Some(TimeOfDay::Afternoon)));
        events.push(productivity(at(d, 22), 4.5, Some(TimeOfDay::Night)));
    }
    let insights = analyze(&events, None, &config());
    assert_eq!(insights.productivity_peaks, vec!["21:00-02:00", "12:00-17:00"]);
}

#[test]
fn peak_ties_keep_first_seen_bucket() {
    let events: Vec<_> = (0..6)
        .map(|i| {
            let (hour, tod) = if i % 2 == 0 {
                (18, TimeOfDay::Evening)
            } else {
                (8, TimeOfDay::Morning)
            };
            productivity(at(today(), hour), 4.0, Some(tod))
        })
        .collect();
    let insights = analyze(&events, None, &config());
    // Both buckets average 4.0; the morning event is earlier in the day, so it
    // is seen first once events are ordered by timestamp.
    assert_eq!(insights.productivity_peaks, vec!["06:00-12:00", "17:00-21:00"]);
}

#[test]
fn missing_time_of_day_falls_back_to_timestamp() {
    let events: Vec<_> = (0..5)
        .map(|i| productivity(at(today() - Duration::days(i), 19), 5.0, None))
        .collect();
    let insights = analyze(&events, None, &config());
    assert_eq!(insights.productivity_peaks, vec!["17:00-21:00"]);
}

#[test]
fn most_productive_hours_are_clock_hours() {
    let events = vec![
        productivity(at(today(), 9), 3.0, None),
        productivity(at(today(), 10), 5.0, None),
        productivity(at(today(), 15), 4.0, None),
        productivity(at(today(), 20), 1.0, None),
    ];
    let signals = BehavioralSignals::from_events(&events);
    assert_eq!(
        peaks::most_productive_hours(&signals, 3),
        vec!["10:00", "15:00", "09:00"]
    );
    let energy = peaks::energy_patterns(&signals);
    assert_eq!(energy[0].time_of_day, TimeOfDay::Morning);
    assert_eq!(energy[0].samples, 2);
    assert!((energy[0].average_energy - 4.0).abs() < 1e-9);
}

// ── Distractions ───────────────────────────────────────────────────────────

#[test]
fn triggers_are_ranked_and_capped() {
    let mut events = Vec::new();
    let ts = |h| at(today(), h);
    events.push(blur(ts(8), None, None));
    events.push(blur(ts(9), None, Some("coworkers")));
    events.push(blur(ts(10), Some("loud"), None));
    events.push(blur(ts(11), Some("loud"), None));
    events.push(blur(ts(12), None, Some("family")));
    events.push(blur(ts(13), None, None));
    let insights = analyze(&events, None, &config());
    let triggers: Vec<_> = insights
        .distraction_triggers
        .iter()
        .map(|t| (t.trigger.as_str(), t.occurrences))
        .collect();
    assert_eq!(
        triggers,
        vec![
            (distractions::DIGITAL_DISTRACTION, 2),
            (distractions::SOCIAL_INTERRUPTION, 2),
            (distractions::NOISY_ENVIRONMENT, 2),
        ]
    );
}

#[test]
fn distraction_counts_are_day_indexed() {
    let window = Period::Weekly.window(today());
    let events = vec![
        blur(at(today(), 9), None, None),
        blur(at(today(), 10), None, None),
        blur(at(today() - Duration::days(6), 9), None, None),
        blur(at(today() - Duration::days(30), 9), None, None),
    ];
    let signals = BehavioralSignals::from_events(&events);
    assert_eq!(
        distractions::distraction_counts(&signals, &window),
        vec![1, 0, 0, 0, 0, 0, 2]
    );
}

// ── Session length ─────────────────────────────────────────────────────────

#[test]
fn session_length_rounds_to_quarter_hour() {
    let durations = [50.0, 55.0, 60.0, 52.0, 58.0];
    let mut events: Vec<_> = durations
        .iter()
        .enumerate()
        .map(|(i, d)| task(at(today(), 8 + i as u32), true, Some(*d)))
        .collect();
    // Incomplete tasks do not count toward the mean.
    events.push(task(at(today(), 20), false, Some(200.0)));
    let insights = analyze(&events, None, &config());
    assert_eq!(insights.optimal_session_minutes, 60);
}

// ── Learning style ─────────────────────────────────────────────────────────

fn tasks_with_rate(done: usize, total: usize) -> Vec<BehavioralEvent> {
    (0..total)
        .map(|i| task(at(today() - Duration::days(i as i64), 10), i < done, Some(30.0)))
        .collect()
}

#[test]
fn learning_style_buckets() {
    let cases = [
        (9, 10, LearningStyle::ReadingWriting),
        (7, 10, LearningStyle::Visual),
        (5, 10, LearningStyle::Kinesthetic),
        (2, 10, LearningStyle::Auditory),
    ];
    for (done, total, expected) in cases {
        let insights = analyze(
            &tasks_with_rate(done, total),
            Some(LearningStyle::ReadingWriting),
            &config(),
        );
        assert_eq!(insights.learning_style, expected, "{done}/{total}");
    }
}

#[test]
fn keep_current_defaults_to_visual_without_profile_style() {
    let insights = analyze(&tasks_with_rate(10, 10), None, &config());
    assert_eq!(insights.learning_style, LearningStyle::Visual);
    assert_eq!(insights.task_completion_rate, 1.0);
}

// ── Motivation ─────────────────────────────────────────────────────────────

fn responses(accepted: usize, total: usize) -> Vec<BehavioralEvent> {
    (0..total)
        .map(|i| suggestion(at(today(), (i % 24) as u32), i < accepted))
        .collect()
}

#[test]
fn motivation_sets_follow_acceptance() {
    let metrics = analyze(&responses(8, 10), None, &config());
    assert_eq!(metrics.motivation_factors, motivation::METRICS_ORIENTED);
    assert!((metrics.suggestion_acceptance_rate - 0.8).abs() < 1e-9);

    let mastery = analyze(&responses(5, 10), None, &config());
    assert_eq!(mastery.motivation_factors, motivation::MASTERY_ORIENTED);

    let reward = analyze(&responses(1, 10), None, &config());
    assert_eq!(reward.motivation_factors, motivation::REWARD_ORIENTED);
}

// ── Environment ────────────────────────────────────────────────────────────

#[test]
fn environment_ranks_locations_and_noise() {
    let places = [
        ("library", "quiet"),
        ("home", "moderate"),
        ("library", "quiet"),
        ("cafe", "loud"),
        ("home", "quiet"),
        ("library", "moderate"),
    ];
    let events: Vec<_> = places
        .iter()
        .enumerate()
        .map(|(i, (loc, noise))| environment(at(today(), 8 + i as u32), Some(loc), Some(noise)))
        .collect();
    let insights = analyze(&events, None, &config());
    assert_eq!(insights.environmental_preferences.locations, vec!["library", "home"]);
    assert_eq!(insights.environmental_preferences.noise_level, "quiet");
}

// ── Adaptation ─────────────────────────────────────────────────────────────

#[test]
fn adaptation_rules_are_independent() {
    let mut events: Vec<_> = (0..6).map(|i| skip(at(today(), i))).collect();
    events.extend((0..11).map(|i| modification(at(today() - Duration::days(1), i))));
    events.extend((0..7).map(|i| productivity(at(today() - Duration::days(2), 8 + i), 1.0, None)));
    let insights = analyze(&events, None, &config());
    assert_eq!(
        insights.adaptation_recommendations,
        vec![
            adaptation::REDUCE_COMPLEXITY,
            adaptation::UPDATE_PROFILE,
            adaptation::ADJUST_ENVIRONMENT,
        ]
    );
}

#[test]
fn focus_rule_uses_only_recent_events() {
    // Old sessions were poor, the last seven are good.
    let mut events: Vec<_> = (0..10)
        .map(|i| productivity(at(today() - Duration::days(5), i), 0.5, None))
        .collect();
    events.extend((0..7).map(|i| productivity(at(today(), 8 + i), 4.0, None)));
    let insights = analyze(&events, None, &config());
    assert!(insights.adaptation_recommendations.is_empty());
}

#[test]
fn limits_are_strictly_greater_than() {
    let mut events: Vec<_> = (0..5).map(|i| skip(at(today(), i))).collect();
    events.extend((0..10).map(|i| modification(at(today(), 10 + i))));
    assert!(analyze(&events, None, &config())
        .adaptation_recommendations
        .is_empty());
}

// ── Insights ───────────────────────────────────────────────────────────────

#[test]
fn insights_are_bounded_and_categorised() {
    let mut events = Vec::new();
    for i in 0..8 {
        let d = today() - Duration::days(i);
        events.push(productivity(at(d, 9), 4.5, Some(TimeOfDay::Morning)));
        events.push(productivity(at(d, 15), 2.0, Some(TimeOfDay::Afternoon)));
        events.push(blur(at(d, 16), Some("loud"), None));
        events.push(task(at(d, 10), i % 4 != 0, Some(45.0)));
        events.push(suggestion(at(d, 11), true));
        events.push(environment(at(d, 12), Some("office"), Some("quiet")));
    }
    let reviews = ReviewHistory {
        reviews: vec![
            review(today() - Duration::days(2), 3.0, &["Meetings"]),
            review(today() - Duration::days(1), 4.0, &["meetings ", "email"]),
        ],
        analysis: ReviewAnalysis {
            average_rating: 3.5,
            ..Default::default()
        },
    };
    let signals = BehavioralSignals::from_events(&events);
    let personalization = analyze(&events, None, &config());
    let insights = derive_insights(&personalization, &signals, &reviews, &config());

    let categories: Vec<_> = insights.iter().map(|i| i.category).collect();
    assert_eq!(
        categories,
        vec![
            InsightCategory::Productivity,
            InsightCategory::Obstacles,
            InsightCategory::Triggers,
            InsightCategory::Rewards,
            InsightCategory::Environment,
            InsightCategory::Motivation,
        ]
    );
    for insight in &insights {
        assert!((0.0..=1.0).contains(&insight.pattern_strength));
        assert!((0.0..=1.0).contains(&insight.behavioral_correlation));
        assert!(!insight.actionable_recommendations.is_empty());
    }
    assert!(insights[1].description.contains("meetings"));
}

#[test]
fn trend_tolerance_is_configurable() {
    let reviews = ReviewHistory {
        reviews: vec![
            review(today() - Duration::days(2), 3.0, &["meetings"]),
            review(today() - Duration::days(1), 4.0, &["meetings"]),
        ],
        analysis: ReviewAnalysis {
            average_rating: 3.5,
            ..Default::default()
        },
    };
    let signals = BehavioralSignals::from_events(&[]);
    let personalization = analyze(&[], None, &config());
    let obstacle_trend = |config: &PatternConfig| {
        derive_insights(&personalization, &signals, &reviews, config)
            .into_iter()
            .find(|i| i.category == InsightCategory::Obstacles)
            .map(|i| i.trend)
    };

    assert_eq!(obstacle_trend(&config()), Some(Trend::Improving));
    let wide = PatternConfig {
        trend_tolerance: 0.5,
        ..config()
    };
    assert_eq!(obstacle_trend(&wide), Some(Trend::Stable));
}

#[test]
fn no_history_yields_no_insights() {
    let signals = BehavioralSignals::from_events(&[]);
    let personalization = analyze(&[], None, &config());
    let insights = derive_insights(&personalization, &signals, &ReviewHistory::default(), &config());
    assert!(insights.is_empty());
}

// ── Engine ─────────────────────────────────────────────────────────────────

fn engine(store: InMemoryStore) -> (Arc<InMemoryStore>, PatternEngine<InMemoryStore, InMemoryStore>) {
    let store = Arc::new(store);
    let engine = PatternEngine::new(
        store.clone(),
        store.clone(),
        Arc::new(FixedClock::on(today())),
        PatternConfig::default(),
    );
    (store, engine)
}

#[tokio::test]
async fn engine_uses_profile_learning_style() {
    let store = InMemoryStore::new()
        .with_profile(Profile {
            learning_style: Some(LearningStyle::Auditory),
            ..profile(60.0)
        })
        .with_events(tasks_with_rate(10, 10));
    let (_, engine) = engine(store);
    let insights = engine.generate_personalization_insights(USER).await.unwrap();
    assert_eq!(insights.learning_style, LearningStyle::Auditory);
}

#[tokio::test]
async fn engine_ignores_events_outside_window() {
    let old: Vec<_> = (0..10)
        .map(|i| productivity(at(today() - Duration::days(60), i), 5.0, Some(TimeOfDay::Night)))
        .collect();
    let (_, engine) = engine(InMemoryStore::new().with_events(old));
    let insights = engine.generate_personalization_insights(USER).await.unwrap();
    assert_eq!(insights.productivity_peaks, vec!["06:00-12:00", "12:00-17:00"]);
}

#[tokio::test]
async fn profile_failure_degrades_to_default_style() {
    let store = InMemoryStore::new()
        .with_events(tasks_with_rate(10, 10))
        .with_fault(Component::Profile, Fault::Error);
    let (_, engine) = engine(store);
    let insights = engine.generate_personalization_insights(USER).await.unwrap();
    assert_eq!(insights.learning_style, LearningStyle::Visual);
}

#[tokio::test]
async fn unreachable_store_is_fatal() {
    let store = InMemoryStore::new().with_fault(Component::Events, Fault::Unavailable);
    let (_, engine) = engine(store);
    let err = engine.generate_personalization_insights(USER).await.unwrap_err();
    assert!(matches!(err, CadenceError::DataUnavailable { .. }));
}

#[tokio::test]
async fn invalid_user_is_rejected_before_querying() {
    let (store, engine) = engine(InMemoryStore::new());
    assert!(engine
        .generate_personalization_insights("bad user id")
        .await
        .is_err());
    assert_eq!(store.calls(Component::Events), 0);
}

#[test]
fn default_preferences_are_moderate() {
    let prefs = cadence_patterns::analyses::environment::default_preferences();
    assert_eq!(prefs.noise_level, "moderate");
    assert!(prefs.locations.is_empty());
}
