use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Analytics aggregator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Per-collaborator call timeout (milliseconds).
    pub collaborator_timeout_ms: u64,
    /// Delay before the single retry of a failed collaborator read (milliseconds).
    pub retry_backoff_ms: u64,
    /// Insights weaker than this are dropped from the snapshot.
    pub min_insight_strength: f64,
    /// Maximum number of behavioral insights in a snapshot.
    pub max_insights: usize,
}

impl AnalyticsConfig {
    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_millis(self.collaborator_timeout_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            collaborator_timeout_ms: defaults::DEFAULT_COLLABORATOR_TIMEOUT_MS,
            retry_backoff_ms: defaults::DEFAULT_RETRY_BACKOFF_MS,
            min_insight_strength: defaults::DEFAULT_MIN_INSIGHT_STRENGTH,
            max_insights: defaults::DEFAULT_MAX_INSIGHTS,
        }
    }
}
