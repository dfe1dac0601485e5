//! Order-stable tallies, means, and half-over-half trends.

use std::collections::HashMap;
use std::hash::Hash;

use cadence_core::models::Trend;

/// Count occurrences, most frequent first. Ties keep first-seen order.
pub fn rank_by_count<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut tally: Vec<(K, usize)> = Vec::new();
    for item in items {
        match index.get(&item) {
            Some(&i) => tally[i].1 += 1,
            None => {
                index.insert(item.clone(), tally.len());
                tally.push((item, 1));
            }
        }
    }
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
}

/// Mean value per key, highest mean first. Ties keep first-seen order.
/// Returns `(key, mean, samples)`.
pub fn rank_by_mean<K, I>(samples: I) -> Vec<(K, f64, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut sums: Vec<(K, f64, usize)> = Vec::new();
    for (key, value) in samples {
        match index.get(&key) {
            Some(&i) => {
                sums[i].1 += value;
                sums[i].2 += 1;
            }
            None => {
                index.insert(key.clone(), sums.len());
                sums.push((key, value, 1));
            }
        }
    }
    let mut means: Vec<(K, f64, usize)> = sums
        .into_iter()
        .map(|(k, sum, n)| (k, sum / n as f64, n))
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Compare the second half of `series` with the first half.
///
/// `higher_is_better = false` flips the direction (e.g. distraction counts).
/// A relative change below `tolerance` counts as stable.
pub fn trend(series: &[f64], higher_is_better: bool, tolerance: f64) -> Trend {
    if series.len() < 2 {
        return Trend::Stable;
    }
    let mid = series.len() / 2;
    let (early, late) = (mean(&series[..mid]), mean(&series[series.len() - mid..]));
    let (Some(early), Some(late)) = (early, late) else {
        return Trend::Stable;
    };
    let scale = early.abs().max(late.abs());
    if scale == 0.0 || (late - early).abs() / scale < tolerance {
        return Trend::Stable;
    }
    match (late > early, higher_is_better) {
        (true, true) | (false, false) => Trend::Improving,
        _ => Trend::Declining,
    }
}
