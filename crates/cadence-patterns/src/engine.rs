//! PatternEngine: fetches the analysis window and runs every sub-analysis.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, Instrument};

use cadence_core::config::PatternConfig;
use cadence_core::errors::CadenceResult;
use cadence_core::ingest::validate_user_id;
use cadence_core::models::{BehavioralEvent, LearningStyle, PersonalizationInsights};
use cadence_core::traits::{Clock, EventStore, ProfileProvider};
use cadence_observability::events;

use crate::analyses::{
    adaptation, distractions, environment, learning_style, motivation, peaks, session,
};
use crate::signals::BehavioralSignals;

/// Run every sub-analysis over `events`. Never fails.
pub fn analyze(
    events: &[BehavioralEvent],
    current_style: Option<LearningStyle>,
    config: &PatternConfig,
) -> PersonalizationInsights {
    analyze_signals(&BehavioralSignals::from_events(events), current_style, config)
}

pub fn analyze_signals(
    signals: &BehavioralSignals<'_>,
    current_style: Option<LearningStyle>,
    config: &PatternConfig,
) -> PersonalizationInsights {
    PersonalizationInsights {
        productivity_peaks: peaks::productivity_peaks(signals, config),
        distraction_triggers: distractions::distraction_triggers(signals, config),
        optimal_session_minutes: session::optimal_session_minutes(signals, config),
        learning_style: learning_style::infer_learning_style(signals, current_style, config),
        motivation_factors: motivation::motivation_factors(signals, config),
        environmental_preferences: environment::environmental_preferences(signals, config),
        adaptation_recommendations: adaptation::adaptation_recommendations(signals, config),
        suggestion_acceptance_rate: motivation::acceptance_rate(signals),
        task_completion_rate: learning_style::task_completion_rate(signals),
    }
}

/// Pattern recognition engine.
pub struct PatternEngine<S: EventStore, P: ProfileProvider> {
    store: Arc<S>,
    profiles: Arc<P>,
    clock: Arc<dyn Clock>,
    config: PatternConfig,
}

impl<S: EventStore, P: ProfileProvider> PatternEngine<S, P> {
    pub fn new(store: Arc<S>, profiles: Arc<P>, clock: Arc<dyn Clock>, config: PatternConfig) -> Self {
        Self {
            store,
            profiles,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Personalization insights over the last `analysis_window_days`.
    ///
    /// An unreadable profile only loses the current learning style.
    pub async fn generate_personalization_insights(
        &self,
        user_id: &str,
    ) -> CadenceResult<PersonalizationInsights> {
        validate_user_id(user_id)?;
        let span = cadence_observability::patterns_span!(user_id, tracing::field::Empty);
        self.run(user_id).instrument(span).await
    }

    async fn run(&self, user_id: &str) -> CadenceResult<PersonalizationInsights> {
        let since = self.clock.now() - Duration::days(i64::from(self.config.analysis_window_days));
        let events = self
            .store
            .query_events(user_id, None, Some(since), None)
            .await?;
        tracing::Span::current().record("event_count", events.len());

        let current_style = match self.profiles.get_profile(user_id).await {
            Ok(profile) => profile.and_then(|p| p.learning_style),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                events::partial_data_default("profile", &e.to_string());
                None
            }
        };

        let insights = analyze(&events, current_style, &self.config);
        debug!(
            events = events.len(),
            recommendations = insights.adaptation_recommendations.len(),
            "personalization insights generated"
        );
        Ok(insights)
    }
}
