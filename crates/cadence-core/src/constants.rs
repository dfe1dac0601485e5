/// Cadence engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound of the focus-quality and energy scales reported by the UI.
pub const MAX_FOCUS_QUALITY: f64 = 5.0;

/// Upper bound of an evening-review rating.
pub const MAX_REVIEW_RATING: f64 = 5.0;

/// Maximum accepted length of a user id.
pub const MAX_USER_ID_LEN: usize = 128;

/// Days on each side of an emitted adjustment used to judge whether it helped.
pub const ADJUSTMENT_EVALUATION_DAYS: i64 = 7;

/// Neutral value for ratio-style metrics that have no data behind them.
pub const NEUTRAL_RATIO: f64 = 0.5;

/// Days in a week, for per-week frequencies.
pub const DAYS_PER_WEEK: f64 = 7.0;
