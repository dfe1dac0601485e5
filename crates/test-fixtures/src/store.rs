//! In-memory collaborators with per-component fault injection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use cadence_core::errors::{CadenceError, CadenceResult, StorageError};
use cadence_core::models::*;
use cadence_core::traits::{AdjustmentLog, EventStore, ProfileProvider, ReviewProvider};
use chrono::{DateTime, NaiveDate, Utc};

/// A collaborator call that can be faulted independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Events,
    Habits,
    Completions,
    Activity,
    Profile,
    Identity,
    Reviews,
    Adjustments,
}

/// Injected behavior for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Every call fails with a storage error.
    Error,
    /// Every call reports the store as unreachable.
    Unavailable,
    /// Every call sleeps before answering.
    Delay(Duration),
    /// The first `n` calls fail with a storage error, later calls succeed.
    FailTimes(usize),
}

#[derive(Default)]
struct Data {
    events: Vec<BehavioralEvent>,
    habits: Vec<Habit>,
    completions: Vec<HabitCompletionRecord>,
    activity: HashMap<NaiveDate, DailyActivityStats>,
    profile: Option<Profile>,
    identity_alignment: f64,
    reviews: ReviewHistory,
    adjustments: Vec<AdjustmentRecord>,
}

/// In-memory store implementing every collaborator trait for a single user.
#[derive(Default)]
pub struct InMemoryStore {
    data: Mutex<Data>,
    faults: Mutex<HashMap<Component, Fault>>,
    calls: Mutex<HashMap<Component, AtomicUsize>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_habits(self, habits: Vec<Habit>) -> Self {
        self.lock().habits = habits;
        self
    }

    pub fn with_completions(self, records: Vec<HabitCompletionRecord>) -> Self {
        self.lock().completions.extend(records);
        self
    }

    pub fn with_events(self, events: Vec<BehavioralEvent>) -> Self {
        self.lock().events.extend(events);
        self
    }

    pub fn with_activity(self, stats: Vec<DailyActivityStats>) -> Self {
        {
            let mut data = self.lock();
            for s in stats {
                data.activity.insert(s.date, s);
            }
        }
        self
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        self.lock().profile = Some(profile);
        self
    }

    pub fn with_identity_alignment(self, score: f64) -> Self {
        self.lock().identity_alignment = score;
        self
    }

    pub fn with_reviews(self, reviews: Vec<EveningReview>) -> Self {
        {
            let mut data = self.lock();
            let average = if reviews.is_empty() {
                0.0
            } else {
                reviews.iter().map(|r| r.rating).sum::<f64>() / reviews.len() as f64
            };
            data.reviews = ReviewHistory {
                analysis: ReviewAnalysis {
                    average_rating: average,
                    common_obstacles: Vec::new(),
                    review_streak: reviews.len() as u32,
                },
                reviews,
            };
        }
        self
    }

    pub fn with_adjustments(self, records: Vec<AdjustmentRecord>) -> Self {
        self.lock().adjustments.extend(records);
        self
    }

    pub fn with_fault(self, component: Component, fault: Fault) -> Self {
        self.inject(component, fault);
        self
    }

    pub fn inject(&self, component: Component, fault: Fault) {
        if let Ok(mut faults) = self.faults.lock() {
            faults.insert(component, fault);
        }
    }

    pub fn clear_faults(&self) {
        if let Ok(mut faults) = self.faults.lock() {
            faults.clear();
        }
    }

    /// Number of calls made to a component so far.
    pub fn calls(&self, component: Component) -> usize {
        self.calls
            .lock()
            .ok()
            .and_then(|c| c.get(&component).map(|n| n.load(Ordering::SeqCst)))
            .unwrap_or(0)
    }

    pub fn adjustments(&self) -> Vec<AdjustmentRecord> {
        self.lock().adjustments.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Data> {
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn enter(&self, component: Component) -> CadenceResult<()> {
        let count = {
            let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
            calls
                .entry(component)
                .or_default()
                .fetch_add(1, Ordering::SeqCst)
                + 1
        };
        let fault = self
            .faults
            .lock()
            .ok()
            .and_then(|f| f.get(&component).copied());
        match fault {
            None => Ok(()),
            Some(Fault::Error) => Err(query_failed(component)),
            Some(Fault::Unavailable) => Err(CadenceError::unavailable(
                "event_store",
                format!("{component:?} unreachable"),
            )),
            Some(Fault::Delay(d)) => {
                tokio::time::sleep(d).await;
                Ok(())
            }
            Some(Fault::FailTimes(n)) if count <= n => Err(query_failed(component)),
            Some(Fault::FailTimes(_)) => Ok(()),
        }
    }
}

fn query_failed(component: Component) -> CadenceError {
    StorageError::SqliteError {
        message: format!("injected failure in {component:?}"),
    }
    .into()
}

impl EventStore for InMemoryStore {
    async fn query_events(
        &self,
        user_id: &str,
        event_types: Option<&[EventType]>,
        since: Option<DateTime<Utc>>,
        until: Option<DateTime<Utc>>,
    ) -> CadenceResult<Vec<BehavioralEvent>> {
        self.enter(Component::Events).await?;
        let mut events: Vec<BehavioralEvent> = self
            .lock()
            .events
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter(|e| event_types.map_or(true, |types| types.contains(&e.event_type())))
            .filter(|e| since.map_or(true, |s| e.timestamp >= s))
            .filter(|e| until.map_or(true, |u| e.timestamp < u))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.timestamp);
        Ok(events)
    }

    async fn list_habits(&self, user_id: &str) -> CadenceResult<Vec<Habit>> {
        self.enter(Component::Habits).await?;
        Ok(self
            .lock()
            .habits
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn query_habit_completions(
        &self,
        user_id: &str,
        habit_id: Option<&str>,
        since: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) -> CadenceResult<Vec<HabitCompletionRecord>> {
        self.enter(Component::Completions).await?;
        let mut records: Vec<HabitCompletionRecord> = self
            .lock()
            .completions
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter(|r| habit_id.map_or(true, |h| r.habit_id == h))
            .filter(|r| since.map_or(true, |s| r.date >= s))
            .filter(|r| until.map_or(true, |u| r.date <= u))
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    async fn query_daily_activity_stats(
        &self,
        _user_id: &str,
        date: NaiveDate,
    ) -> CadenceResult<Option<DailyActivityStats>> {
        self.enter(Component::Activity).await?;
        Ok(self.lock().activity.get(&date).cloned())
    }
}

impl ProfileProvider for InMemoryStore {
    async fn get_profile(&self, _user_id: &str) -> CadenceResult<Option<Profile>> {
        self.enter(Component::Profile).await?;
        Ok(self.lock().profile.clone())
    }

    async fn identity_alignment(&self, _user_id: &str) -> CadenceResult<f64> {
        self.enter(Component::Identity).await?;
        Ok(self.lock().identity_alignment)
    }
}

impl ReviewProvider for InMemoryStore {
    async fn get_review_history(&self, _user_id: &str, _days: u32) -> CadenceResult<ReviewHistory> {
        self.enter(Component::Reviews).await?;
        Ok(self.lock().reviews.clone())
    }
}

impl AdjustmentLog for InMemoryStore {
    async fn append_adjustments(&self, records: &[AdjustmentRecord]) -> CadenceResult<usize> {
        self.enter(Component::Adjustments).await?;
        let mut inner = self.lock();
        let mut inserted = 0;
        for record in records {
            let logged = inner.adjustments.iter().any(|r| {
                r.id == record.id
                    || (r.user_id == record.user_id
                        && r.emitted_on == record.emitted_on
                        && r.adjustment.adjustment_type == record.adjustment.adjustment_type)
            });
            if !logged {
                inner.adjustments.push(record.clone());
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn adjustments_since(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> CadenceResult<Vec<AdjustmentRecord>> {
        self.enter(Component::Adjustments).await?;
        let mut records: Vec<AdjustmentRecord> = self
            .lock()
            .adjustments
            .iter()
            .filter(|r| r.user_id == user_id && r.emitted_on >= since)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.emitted_on);
        Ok(records)
    }
}
