//! HabitEngine: fetches habits and completions, evaluates them in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use cadence_core::config::HabitConfig;
use cadence_core::errors::CadenceResult;
use cadence_core::ingest::validate_user_id;
use cadence_core::models::{
    ConsistencyScore, Habit, HabitCompletionRecord, HabitStreakState, StackSuggestion,
};
use cadence_core::traits::{Clock, EventStore};
use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, Instrument};

use crate::history::CompletionHistory;
use crate::messaging::{self, MissState};
use crate::{consistency, stacking, timeline};

/// One active habit with its derived state.
#[derive(Debug, Clone)]
pub struct HabitEvaluation {
    pub habit: Habit,
    pub state: HabitStreakState,
    pub miss_state: MissState,
    pub history: CompletionHistory,
}

/// Everything the habit engine derives for a user in one pass.
#[derive(Debug, Clone, Default)]
pub struct HabitReport {
    pub evaluations: Vec<HabitEvaluation>,
    pub consistency: ConsistencyScore,
    pub stacks: Vec<StackSuggestion>,
}

impl HabitReport {
    pub fn streaks(&self) -> Vec<HabitStreakState> {
        self.evaluations.iter().map(|e| e.state.clone()).collect()
    }
}

/// Habit consistency engine.
pub struct HabitEngine<S: EventStore> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    config: HabitConfig,
}

impl<S: EventStore> HabitEngine<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>, config: HabitConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &HabitConfig {
        &self.config
    }

    /// Streak state for every active habit. No habits → empty.
    pub async fn compute_streaks(&self, user_id: &str) -> CadenceResult<Vec<HabitStreakState>> {
        Ok(self.report(user_id).await?.streaks())
    }

    /// Overall consistency score. No habits → zero score, never an error.
    pub async fn compute_consistency_score(&self, user_id: &str) -> CadenceResult<ConsistencyScore> {
        Ok(self.report(user_id).await?.consistency)
    }

    /// Habit-stacking suggestions, strongest first.
    pub async fn suggest_stacks(&self, user_id: &str) -> CadenceResult<Vec<StackSuggestion>> {
        Ok(self.report(user_id).await?.stacks)
    }

    /// Overall consistency score as it stood at the end of `date`.
    pub async fn consistency_as_of(&self, user_id: &str, date: NaiveDate) -> CadenceResult<f64> {
        validate_user_id(user_id)?;
        let habits = self.store.list_habits(user_id).await?;
        let records = self
            .store
            .query_habit_completions(user_id, None, None, Some(date))
            .await?;
        Ok(timeline::consistency_as_of(&habits, &records, date, &self.config))
    }

    /// Fetch and evaluate everything in one pass.
    pub async fn report(&self, user_id: &str) -> CadenceResult<HabitReport> {
        validate_user_id(user_id)?;
        let span = cadence_observability::habits_span!(user_id);
        self.fetch_and_evaluate(user_id).instrument(span).await
    }

    async fn fetch_and_evaluate(&self, user_id: &str) -> CadenceResult<HabitReport> {
        let habits = self.store.list_habits(user_id).await?;
        let records = self
            .store
            .query_habit_completions(user_id, None, None, None)
            .await?;
        Ok(evaluate(&habits, &records, self.clock.today(), &self.config))
    }
}

/// Evaluate active habits against their full completion history as of `today`.
pub fn evaluate(
    habits: &[Habit],
    records: &[HabitCompletionRecord],
    today: NaiveDate,
    config: &HabitConfig,
) -> HabitReport {
    let mut grouped: HashMap<&str, Vec<&HabitCompletionRecord>> = HashMap::new();
    for r in records {
        grouped.entry(r.habit_id.as_str()).or_default().push(r);
    }

    let evaluations: Vec<HabitEvaluation> = habits
        .par_iter()
        .filter(|h| h.active)
        .map(|habit| {
            let recs = grouped
                .get(habit.habit_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            let history = CompletionHistory::from_records(recs.iter().copied(), today);
            HabitEvaluation {
                habit: habit.clone(),
                state: history.streak_state(habit, config.rolling_window_days),
                miss_state: messaging::miss_state(&history),
                history,
            }
        })
        .collect();

    debug!(
        habits = evaluations.len(),
        records = records.len(),
        "habits evaluated"
    );

    HabitReport {
        consistency: consistency::score(&evaluations, config),
        stacks: stacking::suggest(&evaluations, config),
        evaluations,
    }
}
