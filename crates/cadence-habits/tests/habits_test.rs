use std::sync::Arc;

use cadence_core::config::HabitConfig;
use cadence_core::models::TimeOfDay;
use cadence_core::traits::FixedClock;
use cadence_core::CadenceError;
use cadence_habits::engine::{self, HabitEngine};
use cadence_habits::{timeline, CompletionHistory, MissState};
use chrono::Duration;
use test_fixtures::*;

fn today() -> chrono::NaiveDate {
    day(2026, 4, 14)
}

fn engine_for(store: InMemoryStore) -> HabitEngine<InMemoryStore> {
    HabitEngine::new(
        Arc::new(store),
        Arc::new(FixedClock::on(today())),
        HabitConfig::default(),
    )
}

// ── Golden scenarios ───────────────────────────────────────────────────────

#[test]
fn golden_habit_scenarios() {
    let scenarios: Vec<GoldenHabitScenario> = load_fixture("golden/habit_scenarios.json");
    assert!(!scenarios.is_empty());
    for s in scenarios {
        let h = habit("h", pattern_start(s.today, s.pattern.len()));
        let records = completions("h", s.today, &s.pattern);
        let state = CompletionHistory::from_records(&records, s.today).streak_state(&h, 30);
        assert_eq!(state.current_streak, s.expected_current_streak, "{}", s.name);
        assert_eq!(state.longest_streak, s.expected_longest_streak, "{}", s.name);
        assert!(
            (state.consistency_percentage - s.expected_consistency).abs() < 0.01,
            "{}: consistency {} != {}",
            s.name,
            state.consistency_percentage,
            s.expected_consistency
        );
    }
}

#[test]
fn fourteen_day_example_with_one_miss() {
    let pattern = [
        true, true, true, false, true, true, true, true, true, true, true, true, true, true,
    ];
    let h = habit("read", pattern_start(today(), 14));
    let records = completions("read", today(), &pattern);
    let state = CompletionHistory::from_records(&records, today()).streak_state(&h, 30);
    assert_eq!(state.current_streak, 10);
    assert_eq!(state.longest_streak, 10);
    assert!((state.consistency_percentage - 92.857).abs() < 0.01);
    assert_eq!(state.last_completed, Some(today()));
}

#[test]
fn missing_days_count_as_misses() {
    let h = habit("walk", today() - Duration::days(9));
    // Only the first five and the last two days are recorded.
    let mut records = completions("walk", today() - Duration::days(5), &[true; 5]);
    records.extend(completions("walk", today(), &[true, true]));
    let state = CompletionHistory::from_records(&records, today()).streak_state(&h, 30);
    assert_eq!(state.current_streak, 2);
    assert_eq!(state.longest_streak, 5);
    assert!((state.consistency_percentage - 70.0).abs() < 1e-9);
}

#[test]
fn duplicate_day_keeps_latest_record() {
    let h = habit("stretch", today());
    let mut records = completions("stretch", today(), &[false]);
    records.extend(completions("stretch", today(), &[true]));
    let state = CompletionHistory::from_records(&records, today()).streak_state(&h, 30);
    assert_eq!(state.current_streak, 1);
}

// ── Engine ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn user_without_habits_gets_empty_results() {
    let engine = engine_for(InMemoryStore::new());
    assert!(engine.compute_streaks(USER).await.unwrap().is_empty());
    let score = engine.compute_consistency_score(USER).await.unwrap();
    assert_eq!(score.overall_score, 0.0);
    assert!(score.habit_scores.is_empty());
    assert!(!score.recommendations.is_empty());
    assert!(engine.suggest_stacks(USER).await.unwrap().is_empty());
}

#[tokio::test]
async fn habits_without_history_are_excluded_from_mean() {
    let store = InMemoryStore::new()
        .with_habits(vec![
            habit("meditate", today() - Duration::days(9)),
            habit("journal", today()),
        ])
        .with_completions(completions("meditate", today(), &[true; 10]));
    let engine = engine_for(store);

    let score = engine.compute_consistency_score(USER).await.unwrap();
    assert_eq!(score.overall_score, 100.0);
    assert_eq!(score.habit_scores.len(), 1);
    assert!(score.insights.iter().any(|i| i.contains("journal")));
}

#[tokio::test]
async fn inactive_habits_are_not_scored() {
    let mut retired = habit("retired", today() - Duration::days(3));
    retired.active = false;
    let store = InMemoryStore::new()
        .with_habits(vec![retired])
        .with_completions(completions("retired", today(), &[false; 4]));
    let streaks = engine_for(store).compute_streaks(USER).await.unwrap();
    assert!(streaks.is_empty());
}

#[tokio::test]
async fn invalid_user_id_is_rejected_before_querying() {
    let store = InMemoryStore::new();
    let engine = engine_for(store);
    let err = engine.compute_streaks("").await.unwrap_err();
    assert!(matches!(err, CadenceError::InvalidInput { .. }));
}

#[tokio::test]
async fn single_miss_produces_never_miss_twice_message() {
    let store = InMemoryStore::new()
        .with_habits(vec![habit("run", today() - Duration::days(4))])
        .with_completions(completions("run", today(), &[true, true, true, true, false]));
    let report = engine_for(store).report(USER).await.unwrap();
    assert_eq!(report.evaluations[0].miss_state, MissState::MissedOnce);
    assert_eq!(report.evaluations[0].state.current_streak, 0);
    assert!(report
        .consistency
        .insights
        .iter()
        .any(|i| i.contains("Never miss twice")));
}

#[tokio::test]
async fn low_consistency_recommends_focusing() {
    let store = InMemoryStore::new()
        .with_habits(vec![habit("gym", today() - Duration::days(9))])
        .with_completions(completions(
            "gym",
            today(),
            &[true, false, false, false, false, false, false, false, false, true],
        ));
    let score = engine_for(store).compute_consistency_score(USER).await.unwrap();
    assert!((score.overall_score - 20.0).abs() < 1e-9);
    assert!(score.recommendations.iter().any(|r| r.contains("below 50%")));
    assert!(score.recommendations.iter().any(|r| r.contains("Shrink gym")));
}

#[tokio::test]
async fn recommendation_thresholds_follow_config() {
    // 70% consistency: neither low nor ready to grow under the defaults.
    let store = || {
        InMemoryStore::new()
            .with_habits(vec![habit("gym", today() - Duration::days(9))])
            .with_completions(completions(
                "gym",
                today(),
                &[true, true, true, false, true, true, false, true, false, true],
            ))
    };
    let default_score = engine_for(store()).compute_consistency_score(USER).await.unwrap();
    assert!((default_score.overall_score - 70.0).abs() < 1e-9);
    assert!(!default_score.recommendations.iter().any(|r| r.contains("below")));
    assert!(!default_score.recommendations.iter().any(|r| r.contains("ready to add")));

    let strict = HabitConfig {
        low_overall_consistency: 75.0,
        struggling_habit_consistency: 75.0,
        ..HabitConfig::default()
    };
    let engine = HabitEngine::new(Arc::new(store()), Arc::new(FixedClock::on(today())), strict);
    let score = engine.compute_consistency_score(USER).await.unwrap();
    assert!(score.recommendations.iter().any(|r| r.contains("below 75%")));
    assert!(score.recommendations.iter().any(|r| r.contains("Shrink gym")));

    let lenient = HabitConfig {
        ready_to_grow_consistency: 60.0,
        ..HabitConfig::default()
    };
    let engine = HabitEngine::new(Arc::new(store()), Arc::new(FixedClock::on(today())), lenient);
    let score = engine.compute_consistency_score(USER).await.unwrap();
    assert!(score.recommendations.iter().any(|r| r.contains("at or above 60%")));
}

// ── Stacking ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn stacks_pair_reliable_anchor_with_correlated_candidate() {
    let created = today() - Duration::days(20);
    let anchor_pattern = [true; 21];
    // Candidate done on every other day: ~50% correlation with the anchor.
    let candidate_pattern: Vec<bool> = (0..21).map(|i| i % 2 == 0).collect();
    let store = InMemoryStore::new()
        .with_habits(vec![
            habit_at("coffee", created, TimeOfDay::Morning),
            habit_at("stretch", created, TimeOfDay::Morning),
            habit_at("read", created, TimeOfDay::Evening),
        ])
        .with_completions(completions("coffee", today(), &anchor_pattern))
        .with_completions(completions("stretch", today(), &candidate_pattern))
        .with_completions(completions("read", today(), &candidate_pattern));

    let stacks = engine_for(store).suggest_stacks(USER).await.unwrap();
    assert_eq!(stacks.len(), 1, "evening habit is not compatible with a morning anchor");
    let s = &stacks[0];
    assert_eq!(s.anchor_habit, "coffee");
    assert_eq!(s.suggested_habit, "stretch");
    // 0.5 * min(21/21, 1) + 0.5 * 11/21
    assert!((s.confidence_score - (0.5 + 0.5 * 11.0 / 21.0)).abs() < 1e-9);
    assert!(s.rationale.contains("coffee"));
}

#[tokio::test]
async fn no_stacks_without_a_qualifying_anchor() {
    let created = today() - Duration::days(9);
    let store = InMemoryStore::new()
        .with_habits(vec![habit("a", created), habit("b", created)])
        .with_completions(completions("a", today(), &[false; 10]))
        .with_completions(completions("b", today(), &[true, false, true, false, true, false, true, false, true, false]));
    assert!(engine_for(store).suggest_stacks(USER).await.unwrap().is_empty());
}

// ── Timeline ───────────────────────────────────────────────────────────────

#[test]
fn daily_completion_rates_respect_creation_day() {
    let window = cadence_core::models::Period::Weekly.window(today());
    let habits = vec![
        habit("old", today() - Duration::days(30)),
        habit("new", today() - Duration::days(2)),
    ];
    let mut records = completions("old", today(), &[true; 7]);
    records.extend(completions("new", today(), &[false, true, true]));
    let rates = timeline::daily_completion_rates(&habits, &records, &window);
    assert_eq!(rates.len(), 7);
    assert_eq!(rates[0], 1.0); // only "old" exists
    assert_eq!(rates[4], 0.5); // "new" created, not done
    assert_eq!(rates[6], 1.0);
}

#[test]
fn consistency_series_has_one_point_per_day() {
    let window = cadence_core::models::Period::Weekly.window(today());
    let habits = vec![habit("h", today() - Duration::days(13))];
    let records = completions("h", today(), &[true; 14]);
    let series = timeline::consistency_series(&habits, &records, &window, &HabitConfig::default());
    assert_eq!(series.len(), 7);
    assert!(series.iter().all(|v| (*v - 100.0).abs() < 1e-9));
}

#[test]
fn evaluate_is_deterministic() {
    let habits = vec![habit("x", today() - Duration::days(5)), habit("y", today() - Duration::days(5))];
    let mut records = completions("x", today(), &[true, false, true, true, true, true]);
    records.extend(completions("y", today(), &[true; 6]));
    let a = engine::evaluate(&habits, &records, today(), &HabitConfig::default());
    let b = engine::evaluate(&habits, &records, today(), &HabitConfig::default());
    assert_eq!(a.streaks(), b.streaks());
    assert_eq!(a.consistency, b.consistency);
    assert_eq!(a.stacks, b.stacks);
}

#[tokio::test]
async fn consistency_as_of_ignores_later_days() {
    let created = today() - Duration::days(9);
    // Perfect for the first five days, then nothing.
    let pattern = [true, true, true, true, true, false, false, false, false, false];
    let store = InMemoryStore::new()
        .with_habits(vec![habit("h", created)])
        .with_completions(completions("h", today(), &pattern));
    let engine = engine_for(store);
    let then = engine
        .consistency_as_of(USER, created + Duration::days(4))
        .await
        .unwrap();
    let now = engine.consistency_as_of(USER, today()).await.unwrap();
    assert_eq!(then, 100.0);
    assert!((now - 50.0).abs() < 1e-9);
}
