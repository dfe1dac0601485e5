//! Distraction triggers from blur interactions.

use cadence_core::config::PatternConfig;
use cadence_core::models::{DateWindow, DistractionPattern};

use super::sufficient;
use crate::ranking::rank_by_count;
use crate::signals::{BehavioralSignals, DistractionSample};

pub const NOISY_ENVIRONMENT: &str = "noisy_environment";
pub const SOCIAL_INTERRUPTION: &str = "social_interruption";
pub const DIGITAL_DISTRACTION: &str = "digital_distraction";

const TOP_TRIGGERS: usize = 3;

/// Attribute a blur to a trigger. Noise is checked before social context.
pub fn classify(sample: &DistractionSample<'_>) -> &'static str {
    let noisy = sample
        .noise_level
        .is_some_and(|n| n.eq_ignore_ascii_case("loud") || n.eq_ignore_ascii_case("high"));
    if noisy {
        return NOISY_ENVIRONMENT;
    }
    let social = sample.social_context.is_some_and(|s| {
        !s.is_empty() && !s.eq_ignore_ascii_case("alone") && !s.eq_ignore_ascii_case("none")
    });
    if social {
        SOCIAL_INTERRUPTION
    } else {
        DIGITAL_DISTRACTION
    }
}

/// Up to three triggers, most frequent first; ties keep first-occurrence order.
pub fn distraction_triggers(
    signals: &BehavioralSignals<'_>,
    config: &PatternConfig,
) -> Vec<DistractionPattern> {
    if !sufficient("distraction_triggers", signals.distractions.len(), config) {
        return Vec::new();
    }
    ranked_triggers(signals)
        .into_iter()
        .take(TOP_TRIGGERS)
        .collect()
}

/// Every trigger with its tally, ungated.
pub fn ranked_triggers(signals: &BehavioralSignals<'_>) -> Vec<DistractionPattern> {
    rank_by_count(signals.distractions.iter().map(classify))
        .into_iter()
        .map(|(trigger, occurrences)| DistractionPattern {
            trigger: trigger.to_string(),
            occurrences,
        })
        .collect()
}

/// Blur interactions per day of `window`. Days without any are 0.
pub fn distraction_counts(signals: &BehavioralSignals<'_>, window: &DateWindow) -> Vec<u32> {
    let mut counts = vec![0u32; window.len()];
    for sample in &signals.distractions {
        if let Some(i) = window.index_of(sample.timestamp.date_naive()) {
            counts[i] += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample<'a>(noise: Option<&'a str>, social: Option<&'a str>) -> DistractionSample<'a> {
        DistractionSample {
            timestamp: Utc::now(),
            noise_level: noise,
            social_context: social,
        }
    }

    #[test]
    fn classification() {
        assert_eq!(classify(&sample(Some("LOUD"), Some("coworkers"))), NOISY_ENVIRONMENT);
        assert_eq!(classify(&sample(Some("quiet"), Some("coworkers"))), SOCIAL_INTERRUPTION);
        assert_eq!(classify(&sample(None, Some("alone"))), DIGITAL_DISTRACTION);
        assert_eq!(classify(&sample(None, None)), DIGITAL_DISTRACTION);
    }
}
