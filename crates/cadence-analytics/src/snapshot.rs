//! Pure composition of a snapshot from already-fetched source data.

use chrono::NaiveDate;

use cadence_core::config::CadenceConfig;
use cadence_core::models::{
    AnalyticsSnapshot, BehavioralEvent, ConsistencyScore, DateWindow, Insight, InsightCategory,
    PersonalizationMetrics, Period, ProductivityPattern,
};
use cadence_habits::{engine as habits, timeline};
use cadence_patterns::analyses::{distractions, peaks};
use cadence_patterns::{analyze_signals, derive_insights, BehavioralSignals};

use crate::aggregator::SourceData;
use crate::personalization;

const PRODUCTIVE_HOURS: usize = 3;

/// Build the snapshot for `period` as of `today`. Deterministic in its inputs.
pub fn compose(
    data: &SourceData,
    period: Period,
    today: NaiveDate,
    config: &CadenceConfig,
) -> AnalyticsSnapshot {
    let window = &data.window;
    let report = habits::evaluate(&data.habits, &data.completions, today, &config.habits);

    let analysis_window = DateWindow::ending_at(today, config.patterns.analysis_window_days);
    let analysis_events = events_within(&data.events, &analysis_window);
    let analysis_signals = BehavioralSignals::from_events(&analysis_events);
    let window_events = events_within(&data.events, window);
    let window_signals = BehavioralSignals::from_events(&window_events);

    let deep_work_trend: Vec<f64> = data.activity.iter().map(|a| a.deep_work_hours).collect();
    let productivity_pattern = ProductivityPattern {
        dates: window.days(),
        daily_completion_rates: timeline::daily_completion_rates(
            &data.habits,
            &data.completions,
            window,
        ),
        focus_quality_trend: data.activity.iter().map(|a| a.focus_quality).collect(),
        deep_work_hours_trend: deep_work_trend.clone(),
        distraction_counts: distractions::distraction_counts(&window_signals, window),
        energy_patterns: peaks::energy_patterns(&window_signals),
        most_productive_hours: peaks::most_productive_hours(&window_signals, PRODUCTIVE_HOURS),
        distraction_patterns: distractions::ranked_triggers(&window_signals),
    };

    let current_style = data.profile.as_ref().and_then(|p| p.learning_style);
    let personalization = analyze_signals(&analysis_signals, current_style, &config.patterns);

    let behavioral_insights = if data.is_zero_history() {
        getting_started_insights()
    } else {
        rank_insights(
            derive_insights(
                &personalization,
                &analysis_signals,
                &data.reviews,
                &config.patterns,
            ),
            config.analytics.min_insight_strength,
            config.analytics.max_insights,
        )
    };

    let personalization_metrics = PersonalizationMetrics {
        profile_completeness: personalization::profile_completeness(data.profile.as_ref()),
        adaptation_effectiveness: personalization::adaptation_effectiveness(
            &data.adjustments,
            &data.habits,
            &data.completions,
            today,
        ),
        suggestion_acceptance_rate: personalization.suggestion_acceptance_rate,
        routine_modification_frequency: personalization::routine_modification_frequency(
            analysis_signals.modifications,
            config.patterns.analysis_window_days,
        ),
        learning_progression: personalization::learning_progression(&data.reviews.reviews),
    };

    AnalyticsSnapshot {
        user_id: data.user_id.clone(),
        period,
        consistency_score: ConsistencyScore {
            overall_score: report.consistency.overall_score.clamp(0.0, 100.0),
            ..report.consistency.clone()
        },
        identity_alignment: data.identity_alignment.clamp(0.0, 100.0),
        deep_work_trend,
        habit_streaks: report.streaks(),
        productivity_pattern,
        behavioral_insights,
        personalization_metrics,
    }
}

fn events_within(events: &[BehavioralEvent], window: &DateWindow) -> Vec<BehavioralEvent> {
    events
        .iter()
        .filter(|e| window.contains(e.date()))
        .cloned()
        .collect()
}

/// Drop weak insights, strongest first (stable), at most `max`.
pub fn rank_insights(mut insights: Vec<Insight>, min_strength: f64, max: usize) -> Vec<Insight> {
    insights.retain(|i| i.pattern_strength >= min_strength);
    insights.sort_by(|a, b| b.pattern_strength.total_cmp(&a.pattern_strength));
    insights.truncate(max);
    insights
}

/// Shown to users with no history at all.
pub fn getting_started_insights() -> Vec<Insight> {
    vec![
        Insight::new(
            InsightCategory::Motivation,
            "Welcome! Track one habit for a week to unlock your first patterns.",
        )
        .recommend("Pick a habit small enough to finish in two minutes and check it off today."),
        Insight::new(
            InsightCategory::Productivity,
            "Log a few focus sessions to discover when you do your best work.",
        )
        .recommend("Start a timer for your next task and rate your focus when it ends."),
    ]
}
