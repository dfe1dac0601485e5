//! AnalyticsAggregator: checks the event store, fans out to every
//! collaborator concurrently, then composes the snapshot.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime};
use futures::future::join_all;
use tracing::{info, Instrument};

use cadence_core::config::CadenceConfig;
use cadence_core::constants::ADJUSTMENT_EVALUATION_DAYS;
use cadence_core::errors::CadenceResult;
use cadence_core::ingest::{validate_date_range, validate_user_id};
use cadence_core::models::{
    AdjustmentRecord, AnalyticsSnapshot, BehavioralEvent, DailyActivityStats, DateWindow, Habit,
    HabitCompletionRecord, Period, Profile, ReviewHistory,
};
use cadence_core::traits::{AdjustmentLog, Clock, EventStore, ProfileProvider, ReviewProvider};

use crate::fetch::{fetch_with_retry, Degradation, Degradations, RetryPolicy};
use crate::snapshot;

/// Everything read from collaborators for one request, defaults already applied.
#[derive(Debug, Clone)]
pub struct SourceData {
    pub user_id: String,
    pub window: DateWindow,
    pub habits: Vec<Habit>,
    /// Full completion history up to the end of the window.
    pub completions: Vec<HabitCompletionRecord>,
    /// One entry per window day, oldest first. Untracked days are empty.
    pub activity: Vec<DailyActivityStats>,
    pub events: Vec<BehavioralEvent>,
    pub profile: Option<Profile>,
    /// 0-100 as reported by the profile collaborator.
    pub identity_alignment: f64,
    pub reviews: ReviewHistory,
    pub adjustments: Vec<AdjustmentRecord>,
}

impl SourceData {
    /// No completions, events, or reviews: a brand-new user.
    pub fn is_zero_history(&self) -> bool {
        self.completions.is_empty() && self.events.is_empty() && self.reviews.reviews.is_empty()
    }
}

/// A snapshot plus the collaborators that were replaced by defaults.
#[derive(Debug, Clone)]
pub struct AnalyticsReport {
    pub snapshot: AnalyticsSnapshot,
    pub degraded: Vec<Degradation>,
}

/// Analytics aggregator. One instance serves any number of users.
pub struct AnalyticsAggregator<S, P, R>
where
    S: EventStore + AdjustmentLog,
    P: ProfileProvider,
    R: ReviewProvider,
{
    store: Arc<S>,
    profiles: Arc<P>,
    reviews: Arc<R>,
    clock: Arc<dyn Clock>,
    config: CadenceConfig,
}

impl<S, P, R> AnalyticsAggregator<S, P, R>
where
    S: EventStore + AdjustmentLog,
    P: ProfileProvider,
    R: ReviewProvider,
{
    pub fn new(
        store: Arc<S>,
        profiles: Arc<P>,
        reviews: Arc<R>,
        clock: Arc<dyn Clock>,
        config: CadenceConfig,
    ) -> Self {
        Self {
            store,
            profiles,
            reviews,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &CadenceConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Snapshot for `period` ending today.
    pub async fn get_analytics_data(
        &self,
        user_id: &str,
        period: Period,
    ) -> CadenceResult<AnalyticsSnapshot> {
        Ok(self.get_analytics_report(user_id, period).await?.snapshot)
    }

    /// Snapshot plus the list of defaulted collaborators.
    pub async fn get_analytics_report(
        &self,
        user_id: &str,
        period: Period,
    ) -> CadenceResult<AnalyticsReport> {
        validate_user_id(user_id)?;
        let span = cadence_observability::analytics_span!(user_id, period);
        self.build_report(user_id, period).instrument(span).await
    }

    async fn build_report(&self, user_id: &str, period: Period) -> CadenceResult<AnalyticsReport> {
        let today = self.today();
        let (data, degraded) = self.collect(user_id, period.window(today)).await?;
        let snapshot = snapshot::compose(&data, period, today, &self.config);
        info!(
            habits = snapshot.habit_streaks.len(),
            insights = snapshot.behavioral_insights.len(),
            degraded = degraded.len(),
            "analytics snapshot composed"
        );
        Ok(AnalyticsReport { snapshot, degraded })
    }

    /// Read every collaborator for `window`.
    ///
    /// An inverted window is rejected. The habit listing doubles as the
    /// event-store reachability check: a fatal error there is returned.
    /// Every other read runs concurrently and falls back to its default on
    /// failure.
    pub async fn collect(
        &self,
        user_id: &str,
        window: DateWindow,
    ) -> CadenceResult<(SourceData, Vec<Degradation>)> {
        validate_user_id(user_id)?;
        validate_date_range(&window)?;
        let policy = RetryPolicy::from_config(&self.config.analytics);
        let mut degraded = Degradations::default();

        let habits = match fetch_with_retry("habits", policy, || self.store.list_habits(user_id)).await
        {
            Ok(habits) => habits,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                degraded.record("habits", e.to_string());
                Vec::new()
            }
        };

        let analysis_days = self.config.patterns.analysis_window_days;
        let today = window.end;
        let events_from = DateWindow::ending_at(today, analysis_days)
            .start
            .min(window.start)
            .and_time(NaiveTime::MIN)
            .and_utc();
        let adjustments_from =
            today - Duration::days(i64::from(analysis_days) + ADJUSTMENT_EVALUATION_DAYS);

        let (completions, events, (activity, activity_failure), profile, identity, reviews, adjustments) = tokio::join!(
            fetch_with_retry("completions", policy, || {
                self.store.query_habit_completions(user_id, None, None, Some(today))
            }),
            fetch_with_retry("events", policy, || {
                self.store
                    .query_events(user_id, None, Some(events_from), Some(window.end_instant()))
            }),
            self.daily_activity(user_id, &window, policy),
            fetch_with_retry("profile", policy, || self.profiles.get_profile(user_id)),
            fetch_with_retry("identity_alignment", policy, || {
                self.profiles.identity_alignment(user_id)
            }),
            fetch_with_retry("reviews", policy, || {
                self.reviews.get_review_history(user_id, analysis_days)
            }),
            fetch_with_retry("adjustments", policy, || {
                self.store.adjustments_since(user_id, adjustments_from)
            }),
        );

        if let Some(reason) = activity_failure {
            degraded.record("activity", reason);
        }
        let data = SourceData {
            user_id: user_id.to_string(),
            window,
            habits,
            completions: degraded.absorb("completions", completions, Vec::new()),
            activity,
            events: degraded.absorb("events", events, Vec::new()),
            profile: degraded.absorb("profile", profile, None),
            identity_alignment: degraded.absorb("identity_alignment", identity, 0.0),
            reviews: degraded.absorb("reviews", reviews, ReviewHistory::default()),
            adjustments: degraded.absorb("adjustments", adjustments, Vec::new()),
        };
        Ok((data, degraded.into_vec()))
    }

    /// One stats entry per window day. Failed days become empty days; the
    /// second value summarises the failures, if any.
    async fn daily_activity(
        &self,
        user_id: &str,
        window: &DateWindow,
        policy: RetryPolicy,
    ) -> (Vec<DailyActivityStats>, Option<String>) {
        let days = window.days();
        let results = join_all(days.iter().map(|&date| {
            fetch_with_retry("activity", policy, move || {
                self.store.query_daily_activity_stats(user_id, date)
            })
        }))
        .await;

        let mut failed = 0usize;
        let mut last_error = None;
        let stats = days
            .iter()
            .zip(results)
            .map(|(&date, result)| match result {
                Ok(Some(stats)) => DailyActivityStats { date, ..stats },
                Ok(None) => DailyActivityStats::empty(date),
                Err(e) => {
                    failed += 1;
                    last_error = Some(e.to_string());
                    DailyActivityStats::empty(date)
                }
            })
            .collect();
        let summary =
            last_error.map(|e| format!("{failed} of {} days defaulted: {e}", days.len()));
        (stats, summary)
    }
}
