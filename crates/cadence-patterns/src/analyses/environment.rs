//! Preferred locations and noise level.

use cadence_core::config::PatternConfig;
use cadence_core::models::EnvironmentalPreferences;

use super::sufficient;
use crate::ranking::rank_by_count;
use crate::signals::BehavioralSignals;

pub const DEFAULT_NOISE_LEVEL: &str = "moderate";

const TOP_LOCATIONS: usize = 2;

pub fn environmental_preferences(
    signals: &BehavioralSignals<'_>,
    config: &PatternConfig,
) -> EnvironmentalPreferences {
    if !sufficient("environment", signals.environment.len(), config) {
        return default_preferences();
    }
    let locations = rank_by_count(signals.environment.iter().filter_map(|s| s.location))
        .into_iter()
        .take(TOP_LOCATIONS)
        .map(|(loc, _)| loc.to_string())
        .collect();
    let noise_level = rank_by_count(signals.environment.iter().filter_map(|s| s.noise_level))
        .into_iter()
        .next()
        .map_or_else(|| DEFAULT_NOISE_LEVEL.to_string(), |(n, _)| n.to_string());
    EnvironmentalPreferences {
        locations,
        noise_level,
    }
}

pub fn default_preferences() -> EnvironmentalPreferences {
    EnvironmentalPreferences {
        locations: Vec::new(),
        noise_level: DEFAULT_NOISE_LEVEL.to_string(),
    }
}
