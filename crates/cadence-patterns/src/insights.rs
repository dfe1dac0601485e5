//! Turns the sub-analyses into ranked, user-facing behavioral insights.

use chrono::NaiveDate;

use cadence_core::config::PatternConfig;
use cadence_core::constants::{MAX_FOCUS_QUALITY, MAX_REVIEW_RATING};
use cadence_core::models::{
    Insight, InsightCategory, PersonalizationInsights, ReviewHistory,
};

use crate::analyses::{distractions, learning_style, motivation};
use crate::ranking::{rank_by_count, rank_by_mean, trend};
use crate::signals::BehavioralSignals;

/// Minimum times an obstacle must recur before it becomes an insight.
const MIN_OBSTACLE_MENTIONS: usize = 2;

/// One insight per category that has enough data behind it.
///
/// Strengths and correlations are within [0, 1]. Categories without enough
/// data are omitted, so a user with no history gets an empty list.
pub fn derive_insights(
    personalization: &PersonalizationInsights,
    signals: &BehavioralSignals<'_>,
    reviews: &ReviewHistory,
    config: &PatternConfig,
) -> Vec<Insight> {
    [
        productivity(personalization, signals, config),
        obstacles(reviews, config),
        triggers(personalization, signals, config),
        rewards(personalization, signals, config),
        environment(personalization, signals, config),
        motivation_insight(personalization, signals, config),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn productivity(
    personalization: &PersonalizationInsights,
    signals: &BehavioralSignals<'_>,
    config: &PatternConfig,
) -> Option<Insight> {
    if signals.focus.len() < config.min_relevant_events {
        return None;
    }
    let ranked = rank_by_mean(signals.focus.iter().map(|s| (s.time_of_day, s.focus_quality)));
    let (best, best_mean, _) = ranked.first()?.clone();
    let worst_mean = ranked.last().map_or(best_mean, |w| w.1);
    let series: Vec<f64> = signals.focus.iter().map(|s| s.focus_quality).collect();

    Some(
        Insight::new(
            InsightCategory::Productivity,
            format!(
                "Your focus is highest in the {} ({best_mean:.1}/5 on average).",
                best.as_str()
            ),
        )
        .with_strength(
            (best_mean - worst_mean) / MAX_FOCUS_QUALITY,
            personalization.task_completion_rate,
        )
        .with_trend(trend(&series, true, config.trend_tolerance))
        .recommend(format!("Schedule deep work during {}.", best.peak_range())),
    )
}

fn obstacles(reviews: &ReviewHistory, config: &PatternConfig) -> Option<Insight> {
    let mentions = reviews
        .reviews
        .iter()
        .flat_map(|r| r.obstacles.iter())
        .map(|o| o.trim().to_lowercase())
        .filter(|o| !o.is_empty());
    let (top, count) = rank_by_count(mentions).into_iter().next()?;
    if count < MIN_OBSTACLE_MENTIONS {
        return None;
    }
    let total = reviews.reviews.len().max(1);
    let mut ordered: Vec<(NaiveDate, f64)> =
        reviews.reviews.iter().map(|r| (r.date, r.rating)).collect();
    ordered.sort_by_key(|(d, _)| *d);
    let ratings: Vec<f64> = ordered.into_iter().map(|(_, r)| r).collect();

    Some(
        Insight::new(
            InsightCategory::Obstacles,
            format!("\"{top}\" came up in {count} of your last {total} evening reviews."),
        )
        .with_strength(
            count as f64 / total as f64,
            1.0 - reviews.analysis.average_rating / MAX_REVIEW_RATING,
        )
        .with_trend(trend(&ratings, true, config.trend_tolerance))
        .recommend(format!("Decide tonight how you will handle \"{top}\" tomorrow.")),
    )
}

fn triggers(
    personalization: &PersonalizationInsights,
    signals: &BehavioralSignals<'_>,
    config: &PatternConfig,
) -> Option<Insight> {
    let top = personalization.distraction_triggers.first()?;
    let total = signals.distractions.len().max(1);

    Some(
        Insight::new(
            InsightCategory::Triggers,
            format!(
                "Most interruptions look like {} ({} of {total}).",
                top.trigger.replace('_', " "),
                top.occurrences
            ),
        )
        .with_strength(
            top.occurrences as f64 / total as f64,
            1.0 - personalization.task_completion_rate,
        )
        .with_trend(trend(
            &daily_distraction_series(signals),
            false,
            config.trend_tolerance,
        ))
        .recommend(trigger_remedy(&top.trigger)),
    )
}

fn trigger_remedy(trigger: &str) -> &'static str {
    match trigger {
        distractions::NOISY_ENVIRONMENT => {
            "Use noise-cancelling headphones or move somewhere quieter for focus sessions."
        }
        distractions::SOCIAL_INTERRUPTION => {
            "Let the people around you know when you are in a focus block."
        }
        _ => "Silence notifications and block distracting sites during focus sessions.",
    }
}

/// Blur count per calendar day from the first to the last distraction.
fn daily_distraction_series(signals: &BehavioralSignals<'_>) -> Vec<f64> {
    let (Some(first), Some(last)) = (signals.distractions.first(), signals.distractions.last())
    else {
        return Vec::new();
    };
    let start = first.timestamp.date_naive();
    let end = last.timestamp.date_naive();
    let mut series = vec![0.0; ((end - start).num_days() + 1).max(1) as usize];
    for d in &signals.distractions {
        let i = (d.timestamp.date_naive() - start).num_days() as usize;
        if let Some(slot) = series.get_mut(i) {
            *slot += 1.0;
        }
    }
    series
}

fn rewards(
    personalization: &PersonalizationInsights,
    signals: &BehavioralSignals<'_>,
    config: &PatternConfig,
) -> Option<Insight> {
    if signals.suggestions.len() < config.min_relevant_events {
        return None;
    }
    let rate = personalization.suggestion_acceptance_rate;
    let series: Vec<f64> = signals
        .suggestions
        .iter()
        .map(|s| if s.accepted { 1.0 } else { 0.0 })
        .collect();
    let factors = personalization.motivation_factors.join(", ").replace('_', " ");
    let recommendation = match personalization.motivation_factors.first().map(String::as_str) {
        Some(f) if motivation::METRICS_ORIENTED.contains(&f) => {
            "Keep streaks and progress charts visible where you start your day."
        }
        Some(f) if motivation::REWARD_ORIENTED.contains(&f) => {
            "Pair each completed routine with a small reward or a check-in partner."
        }
        _ => "Frame goals as skills to build and review what you learned each week.",
    };

    Some(
        Insight::new(
            InsightCategory::Rewards,
            format!(
                "You accept {:.0}% of suggestions; {factors} motivate you most.",
                rate * 100.0
            ),
        )
        .with_strength((rate - 0.5).abs() * 2.0, rate)
        .with_trend(trend(&series, true, config.trend_tolerance))
        .recommend(recommendation),
    )
}

fn environment(
    personalization: &PersonalizationInsights,
    signals: &BehavioralSignals<'_>,
    config: &PatternConfig,
) -> Option<Insight> {
    if signals.environment.len() < config.min_relevant_events {
        return None;
    }
    let prefs = &personalization.environmental_preferences;
    let top = prefs.locations.first()?;
    let at_top = signals
        .environment
        .iter()
        .filter(|s| s.location == Some(top.as_str()))
        .count();
    let share = at_top as f64 / signals.environment.len() as f64;

    Some(
        Insight::new(
            InsightCategory::Environment,
            format!(
                "You work most often at {top} with {} noise.",
                prefs.noise_level
            ),
        )
        .with_strength(share, share)
        .recommend(format!("Keep your {top} setup ready so starting a session takes no effort.")),
    )
}

fn motivation_insight(
    personalization: &PersonalizationInsights,
    signals: &BehavioralSignals<'_>,
    config: &PatternConfig,
) -> Option<Insight> {
    if signals.tasks.len() < config.min_relevant_events {
        return None;
    }
    let rate = learning_style::task_completion_rate(signals);
    let series: Vec<f64> = signals
        .tasks
        .iter()
        .map(|t| if t.completed { 1.0 } else { 0.0 })
        .collect();
    let next_step = if rate < config.learning_visual_threshold {
        "Break tasks into smaller steps you can finish in one session."
    } else {
        "Raise the difficulty gradually to keep the challenge engaging."
    };

    Some(
        Insight::new(
            InsightCategory::Motivation,
            format!("You finish {:.0}% of the tasks you start.", rate * 100.0),
        )
        .with_strength(rate, personalization.suggestion_acceptance_rate)
        .with_trend(trend(&series, true, config.trend_tolerance))
        .recommend(next_step)
        .recommend(format!(
            "Plan focus sessions of about {} minutes.",
            personalization.optimal_session_minutes
        )),
    )
}
