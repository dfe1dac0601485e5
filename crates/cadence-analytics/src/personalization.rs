//! Personalization metrics: how well adaptive changes are landing.

use chrono::{Duration, NaiveDate};

use cadence_core::constants::{
    ADJUSTMENT_EVALUATION_DAYS, DAYS_PER_WEEK, MAX_REVIEW_RATING, NEUTRAL_RATIO,
};
use cadence_core::models::{
    AdjustmentRecord, DateWindow, EveningReview, Habit, HabitCompletionRecord, Profile,
};
use cadence_habits::timeline;

/// Profile completion as a 0-1 fraction. No profile → 0.
pub fn profile_completeness(profile: Option<&Profile>) -> f64 {
    profile.map_or(0.0, |p| (p.completion_percentage / 100.0).clamp(0.0, 1.0))
}

/// Routine modifications per week over a window of `window_days`.
pub fn routine_modification_frequency(modifications: usize, window_days: u32) -> f64 {
    let weeks = f64::from(window_days.max(1)) / DAYS_PER_WEEK;
    modifications as f64 / weeks
}

/// `0.5 + (late-half mean rating - early-half mean rating) / 5`, clamped to [0, 1].
///
/// Fewer than two reviews is neutral.
pub fn learning_progression(reviews: &[EveningReview]) -> f64 {
    if reviews.len() < 2 {
        return NEUTRAL_RATIO;
    }
    let mut ratings: Vec<(NaiveDate, f64)> = reviews.iter().map(|r| (r.date, r.rating)).collect();
    ratings.sort_by_key(|(d, _)| *d);
    let mid = ratings.len() / 2;
    let mean = |slice: &[(NaiveDate, f64)]| {
        slice.iter().map(|(_, r)| r).sum::<f64>() / slice.len() as f64
    };
    let delta = mean(&ratings[mid..]) - mean(&ratings[..mid]);
    (NEUTRAL_RATIO + delta / MAX_REVIEW_RATING).clamp(0.0, 1.0)
}

/// Share of evaluable adjustments after which completion improved.
///
/// An adjustment is evaluable once a full week has passed since it was
/// emitted. It counts as effective when the mean daily completion rate over
/// the following week beats the week ending on the emission day. No
/// evaluable adjustments is neutral.
pub fn adaptation_effectiveness(
    adjustments: &[AdjustmentRecord],
    habits: &[Habit],
    records: &[HabitCompletionRecord],
    today: NaiveDate,
) -> f64 {
    let span = Duration::days(ADJUSTMENT_EVALUATION_DAYS);
    let evaluable: Vec<NaiveDate> = adjustments
        .iter()
        .map(|a| a.emitted_on)
        .filter(|d| *d + span <= today)
        .collect();
    if evaluable.is_empty() {
        return NEUTRAL_RATIO;
    }
    let week = ADJUSTMENT_EVALUATION_DAYS as u32;
    let improved = evaluable
        .iter()
        .filter(|emitted| {
            let before = DateWindow::ending_at(**emitted, week);
            let after = DateWindow::ending_at(**emitted + span, week);
            mean_rate(habits, records, &after) > mean_rate(habits, records, &before)
        })
        .count();
    improved as f64 / evaluable.len() as f64
}

fn mean_rate(habits: &[Habit], records: &[HabitCompletionRecord], window: &DateWindow) -> f64 {
    let rates = timeline::daily_completion_rates(habits, records, window);
    if rates.is_empty() {
        0.0
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    }
}
