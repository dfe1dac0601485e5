//! Rolling performance history, built from aggregator source data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cadence_analytics::SourceData;
use cadence_core::config::HabitConfig;
use cadence_core::models::DateWindow;
use cadence_habits::{engine, timeline};

/// Current consistency of one habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitConsistency {
    pub habit_id: String,
    pub name: String,
    /// 0-100.
    pub consistency: f64,
}

/// Day-indexed metrics over the observed part of the history window.
///
/// All series have the same length. Leading days before the first habit or
/// tracked activity are trimmed so they cannot fake an improvement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceHistory {
    pub dates: Vec<NaiveDate>,
    /// 0-1 per day.
    pub completion_rates: Vec<f64>,
    pub deep_work_hours: Vec<f64>,
    /// 0-5 per day, 0 on untracked days.
    pub focus_quality: Vec<f64>,
    /// Overall consistency score (0-100) as of each day.
    pub consistency_series: Vec<f64>,
    /// Current identity alignment, 0-100.
    pub identity_alignment: f64,
    /// Habits with history only.
    pub habit_consistency: Vec<HabitConsistency>,
}

impl PerformanceHistory {
    pub fn from_source(data: &SourceData, today: NaiveDate, config: &HabitConfig) -> Self {
        let window = &data.window;
        let dates = window.days();
        let first_observed = dates.iter().position(|d| {
            let habit_existed = data.habits.iter().any(|h| h.active && h.created_on <= *d);
            let tracked = window
                .index_of(*d)
                .and_then(|i| data.activity.get(i))
                .is_some_and(|a| a.sessions > 0 || a.deep_work_hours > 0.0 || a.focus_quality > 0.0);
            habit_existed || tracked
        });
        let Some(start) = first_observed else {
            return Self {
                identity_alignment: data.identity_alignment.clamp(0.0, 100.0),
                ..Self::default()
            };
        };

        let completion_rates =
            timeline::daily_completion_rates(&data.habits, &data.completions, window);
        let consistency_series =
            timeline::consistency_series(&data.habits, &data.completions, window, config);
        let report = engine::evaluate(&data.habits, &data.completions, today, config);

        Self {
            dates: dates[start..].to_vec(),
            completion_rates: completion_rates[start..].to_vec(),
            deep_work_hours: (start..dates.len())
                .map(|i| data.activity.get(i).map_or(0.0, |a| a.deep_work_hours))
                .collect(),
            focus_quality: (start..dates.len())
                .map(|i| data.activity.get(i).map_or(0.0, |a| a.focus_quality))
                .collect(),
            consistency_series: consistency_series[start..].to_vec(),
            identity_alignment: data.identity_alignment.clamp(0.0, 100.0),
            habit_consistency: report
                .evaluations
                .iter()
                .filter(|e| e.state.has_history)
                .map(|e| HabitConsistency {
                    habit_id: e.habit.habit_id.clone(),
                    name: e.habit.name.clone(),
                    consistency: e.state.consistency_percentage,
                })
                .collect(),
        }
    }

    /// Number of observed days.
    pub fn days(&self) -> usize {
        self.dates.len()
    }

    /// A history of daily completion rates ending on `end`; every other
    /// series starts at zero.
    pub fn from_completion_rates(end: NaiveDate, completion_rates: Vec<f64>) -> Self {
        let n = completion_rates.len();
        let dates = if n == 0 {
            Vec::new()
        } else {
            DateWindow::ending_at(end, n as u32).days()
        };
        Self {
            dates,
            completion_rates,
            deep_work_hours: vec![0.0; n],
            focus_quality: vec![0.0; n],
            consistency_series: vec![0.0; n],
            identity_alignment: 0.0,
            habit_consistency: Vec::new(),
        }
    }

    pub fn with_deep_work(mut self, hours: Vec<f64>) -> Self {
        self.deep_work_hours = fit(hours, self.days());
        self
    }

    pub fn with_focus(mut self, focus: Vec<f64>) -> Self {
        self.focus_quality = fit(focus, self.days());
        self
    }

    pub fn with_consistency(mut self, series: Vec<f64>) -> Self {
        self.consistency_series = fit(series, self.days());
        self
    }

    pub fn with_identity_alignment(mut self, alignment: f64) -> Self {
        self.identity_alignment = alignment.clamp(0.0, 100.0);
        self
    }

    pub fn with_habit(mut self, habit_id: &str, consistency: f64) -> Self {
        self.habit_consistency.push(HabitConsistency {
            habit_id: habit_id.to_string(),
            name: habit_id.to_string(),
            consistency,
        });
        self
    }
}

/// Right-align `series` to `len` days: keep the most recent values and
/// zero-fill missing leading days.
fn fit(mut series: Vec<f64>, len: usize) -> Vec<f64> {
    if series.len() > len {
        series.drain(..series.len() - len);
    }
    let mut padded = vec![0.0; len - series.len()];
    padded.extend(series);
    padded
}
