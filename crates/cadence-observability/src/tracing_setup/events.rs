//! Structured events shared by every engine.

use tracing::{debug, warn};

/// A collaborator failed or timed out and its documented default was used.
pub fn partial_data_default(component: &str, reason: &str) {
    warn!(component, reason, "collaborator degraded, using default");
}

/// A collaborator read failed once and is being retried.
pub fn collaborator_retry(component: &str, reason: &str) {
    debug!(component, reason, "retrying collaborator read");
}

/// A sub-analysis had too little data and returned its default.
pub fn insufficient_data(analysis: &str, available: usize, required: usize) {
    debug!(analysis, available, required, "insufficient data, using default");
}

/// Appending to the adjustment log failed; the analysis result is unaffected.
pub fn adjustment_log_failed(user_id: &str, reason: &str) {
    warn!(user_id, reason, "failed to append emitted adjustments");
}
