//! First-third vs last-third trend signal and dispersion.

/// Means of the earliest and most recent thirds of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thirds {
    pub early_mean: f64,
    pub recent_mean: f64,
}

impl Thirds {
    /// `None` for series shorter than three points.
    pub fn of(series: &[f64]) -> Option<Self> {
        let k = series.len() / 3;
        if k == 0 {
            return None;
        }
        Some(Self {
            early_mean: mean(&series[..k]),
            recent_mean: mean(&series[series.len() - k..]),
        })
    }

    /// Relative drop from early to recent, positive when declining.
    /// Zero when the early mean is not positive.
    pub fn relative_drop(&self) -> f64 {
        if self.early_mean <= 0.0 {
            0.0
        } else {
            (self.early_mean - self.recent_mean) / self.early_mean
        }
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Population standard deviation over the mean. `None` when the mean is 0.
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    let m = mean(values);
    if values.is_empty() || m <= 0.0 {
        return None;
    }
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt() / m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirds_of_a_decline() {
        let series = [1.0, 1.0, 0.8, 0.8, 0.5, 0.5];
        let t = Thirds::of(&series).unwrap();
        assert_eq!(t.early_mean, 1.0);
        assert_eq!(t.recent_mean, 0.5);
        assert!((t.relative_drop() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn short_or_empty_series() {
        assert!(Thirds::of(&[1.0, 2.0]).is_none());
        let flat_zero = Thirds::of(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(flat_zero.relative_drop(), 0.0);
    }

    #[test]
    fn variation() {
        assert_eq!(coefficient_of_variation(&[2.0, 2.0, 2.0]), Some(0.0));
        assert!(coefficient_of_variation(&[0.0, 0.0]).is_none());
        let cv = coefficient_of_variation(&[0.0, 4.0]).unwrap();
        assert!((cv - 1.0).abs() < 1e-9);
    }
}
