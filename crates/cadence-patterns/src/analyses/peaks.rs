//! Productivity peaks, hourly focus ranking, and energy by time of day.

use chrono::Timelike;

use cadence_core::config::PatternConfig;
use cadence_core::models::{EnergyPoint, TimeOfDay};

use super::sufficient;
use crate::ranking::rank_by_mean;
use crate::signals::BehavioralSignals;

/// Returned when focus data is too thin to rank buckets.
pub const DEFAULT_PEAKS: [TimeOfDay; 2] = [TimeOfDay::Morning, TimeOfDay::Afternoon];

const PEAK_COUNT: usize = 2;

/// The two time-of-day buckets with the highest mean focus quality, as clock ranges.
pub fn productivity_peaks(signals: &BehavioralSignals<'_>, config: &PatternConfig) -> Vec<String> {
    if !sufficient("productivity_peaks", signals.focus.len(), config) {
        return DEFAULT_PEAKS
            .iter()
            .map(|t| t.peak_range().to_string())
            .collect();
    }
    rank_by_mean(signals.focus.iter().map(|s| (s.time_of_day, s.focus_quality)))
        .into_iter()
        .take(PEAK_COUNT)
        .map(|(bucket, _, _)| bucket.peak_range().to_string())
        .collect()
}

/// Top `n` clock hours ("HH:00") by mean focus quality. Empty without data.
pub fn most_productive_hours(signals: &BehavioralSignals<'_>, n: usize) -> Vec<String> {
    rank_by_mean(
        signals
            .focus
            .iter()
            .map(|s| (s.timestamp.hour(), s.focus_quality)),
    )
    .into_iter()
    .take(n)
    .map(|(hour, _, _)| format!("{hour:02}:00"))
    .collect()
}

/// Mean energy level per bucket, in morning → night order. Buckets without
/// samples are omitted.
pub fn energy_patterns(signals: &BehavioralSignals<'_>) -> Vec<EnergyPoint> {
    TimeOfDay::ALL
        .iter()
        .filter_map(|bucket| {
            let values: Vec<f64> = signals
                .focus
                .iter()
                .filter(|s| s.time_of_day == *bucket)
                .filter_map(|s| s.energy_level)
                .collect();
            if values.is_empty() {
                return None;
            }
            Some(EnergyPoint {
                time_of_day: *bucket,
                average_energy: values.iter().sum::<f64>() / values.len() as f64,
                samples: values.len(),
            })
        })
        .collect()
}
