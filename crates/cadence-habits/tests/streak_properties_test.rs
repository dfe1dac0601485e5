//! Property tests for streak and consistency invariants.

use cadence_habits::CompletionHistory;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use test_fixtures::{habit, pattern_start};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()
}

proptest! {
    #[test]
    fn longest_is_at_least_current(pattern in prop::collection::vec(any::<bool>(), 1..120)) {
        let history = CompletionHistory::from_pattern(&pattern, today());
        let state = history.streak_state(&habit("h", pattern_start(today(), pattern.len())), 30);
        prop_assert!(state.longest_streak >= state.current_streak);
    }

    #[test]
    fn current_streak_counts_trailing_completions(pattern in prop::collection::vec(any::<bool>(), 1..120)) {
        let history = CompletionHistory::from_pattern(&pattern, today());
        let trailing = pattern.iter().rev().take_while(|d| **d).count() as u32;
        prop_assert_eq!(history.current_streak(), trailing);
    }

    #[test]
    fn a_miss_today_resets_the_streak(mut pattern in prop::collection::vec(any::<bool>(), 1..60)) {
        pattern.push(false);
        let history = CompletionHistory::from_pattern(&pattern, today());
        prop_assert_eq!(history.current_streak(), 0);
    }

    #[test]
    fn consistency_is_a_percentage(
        pattern in prop::collection::vec(any::<bool>(), 1..120),
        created_back in 0i64..200,
        window in 1u32..90,
    ) {
        let history = CompletionHistory::from_pattern(&pattern, today());
        let pct = history.consistency_percentage(today() - Duration::days(created_back), window);
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn all_done_is_full_consistency(len in 1usize..60) {
        let pattern = vec![true; len];
        let history = CompletionHistory::from_pattern(&pattern, today());
        let state = history.streak_state(&habit("h", pattern_start(today(), len)), 30);
        prop_assert!((state.consistency_percentage - 100.0).abs() < 1e-9);
        prop_assert_eq!(state.current_streak as usize, len);
    }
}
