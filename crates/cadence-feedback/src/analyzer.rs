//! FeedbackAnalyzer: pure rules over a history. AdaptiveFeedback: the async
//! entry point that gathers the history and logs what was emitted.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, info, Instrument};

use cadence_analytics::AnalyticsAggregator;
use cadence_core::config::FeedbackConfig;
use cadence_core::errors::CadenceResult;
use cadence_core::ingest::validate_user_id;
use cadence_core::models::{AdjustmentRecord, AdjustmentType, DateWindow, PerformanceAnalysis};
use cadence_core::traits::{AdjustmentLog, EventStore, ProfileProvider, ReviewProvider};
use cadence_observability::tracing_setup::events;

use crate::history::PerformanceHistory;
use crate::rules;

/// Runs every detection rule over one history.
#[derive(Debug, Clone, Default)]
pub struct FeedbackAnalyzer {
    config: FeedbackConfig,
}

impl FeedbackAnalyzer {
    pub fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Deterministic. Histories shorter than `min_history_days` yield an
    /// empty analysis.
    pub fn analyze(&self, history: &PerformanceHistory) -> PerformanceAnalysis {
        let required = self.config.min_history_days as usize;
        if history.days() < required {
            events::insufficient_data("performance_patterns", history.days(), required);
            return PerformanceAnalysis::default();
        }

        let declining_patterns = rules::declining_patterns(history, &self.config);

        let mut system_adjustments = rules::decline_adjustments(&declining_patterns);
        let has_timing = system_adjustments
            .iter()
            .any(|a| a.adjustment_type == AdjustmentType::TimingOptimization);
        if !has_timing {
            system_adjustments.extend(rules::erratic_timing(history, &self.config));
        }
        system_adjustments.extend(rules::struggling_habits(history, &self.config));
        let high_performer = rules::is_high_performer(history, &self.config);
        if high_performer {
            system_adjustments.push(rules::escalation(history));
        }
        system_adjustments.sort_by(|a, b| {
            b.expected_impact
                .partial_cmp(&a.expected_impact)
                .unwrap_or(Ordering::Equal)
        });

        let improvement_opportunities = rules::improvement_opportunities(history, &self.config);
        let mut optimization_suggestions = rules::optimization_suggestions(
            history,
            &declining_patterns,
            &improvement_opportunities,
            high_performer,
            &self.config,
        );
        optimization_suggestions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });

        PerformanceAnalysis {
            declining_patterns,
            improvement_opportunities,
            system_adjustments,
            optimization_suggestions,
        }
    }
}

/// Adaptive feedback for stored users.
pub struct AdaptiveFeedback<S, P, R>
where
    S: EventStore + AdjustmentLog,
    P: ProfileProvider,
    R: ReviewProvider,
{
    aggregator: Arc<AnalyticsAggregator<S, P, R>>,
    analyzer: FeedbackAnalyzer,
}

impl<S, P, R> AdaptiveFeedback<S, P, R>
where
    S: EventStore + AdjustmentLog,
    P: ProfileProvider,
    R: ReviewProvider,
{
    /// Uses the aggregator's feedback configuration.
    pub fn new(aggregator: Arc<AnalyticsAggregator<S, P, R>>) -> Self {
        let analyzer = FeedbackAnalyzer::new(aggregator.config().feedback.clone());
        Self {
            aggregator,
            analyzer,
        }
    }

    pub fn analyzer(&self) -> &FeedbackAnalyzer {
        &self.analyzer
    }

    /// Analyze the last `history_days` days and append every emitted
    /// adjustment to the adjustment log.
    ///
    /// A failed append is logged and does not change the returned analysis.
    pub async fn analyze_performance_patterns(
        &self,
        user_id: &str,
    ) -> CadenceResult<PerformanceAnalysis> {
        validate_user_id(user_id)?;
        let span = cadence_observability::feedback_span!(user_id);
        self.run(user_id).instrument(span).await
    }

    async fn run(&self, user_id: &str) -> CadenceResult<PerformanceAnalysis> {
        let today = self.aggregator.today();
        let window = DateWindow::ending_at(today, self.analyzer.config().history_days);
        let (data, degraded) = self.aggregator.collect(user_id, window).await?;
        let history =
            PerformanceHistory::from_source(&data, today, &self.aggregator.config().habits);
        debug!(days = history.days(), degraded = degraded.len(), "performance history built");

        let analysis = self.analyzer.analyze(&history);

        if !analysis.system_adjustments.is_empty() {
            let records: Vec<AdjustmentRecord> = analysis
                .system_adjustments
                .iter()
                .cloned()
                .map(|a| AdjustmentRecord::new(user_id, today, a))
                .collect();
            if let Err(e) = self.aggregator.store().append_adjustments(&records).await {
                events::adjustment_log_failed(user_id, &e.to_string());
            }
        }

        info!(
            declines = analysis.declining_patterns.len(),
            adjustments = analysis.system_adjustments.len(),
            suggestions = analysis.optimization_suggestions.len(),
            "performance analysis complete"
        );
        Ok(analysis)
    }
}
