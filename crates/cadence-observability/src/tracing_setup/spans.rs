//! Span definitions per operation: analytics, habits, patterns, feedback.

/// Create an analytics snapshot span.
#[macro_export]
macro_rules! analytics_span {
    ($user_id:expr, $period:expr) => {
        tracing::info_span!("cadence.analytics", user_id = %$user_id, period = %$period)
    };
}

/// Create a habit consistency span.
#[macro_export]
macro_rules! habits_span {
    ($user_id:expr) => {
        tracing::info_span!("cadence.habits", user_id = %$user_id)
    };
}

/// Create a pattern recognition span.
#[macro_export]
macro_rules! patterns_span {
    ($user_id:expr, $event_count:expr) => {
        tracing::info_span!("cadence.patterns", user_id = %$user_id, event_count = $event_count)
    };
}

/// Create a feedback analysis span.
#[macro_export]
macro_rules! feedback_span {
    ($user_id:expr) => {
        tracing::info_span!("cadence.feedback", user_id = %$user_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYTICS: &str = "cadence.analytics";
    pub const HABITS: &str = "cadence.habits";
    pub const PATTERNS: &str = "cadence.patterns";
    pub const FEEDBACK: &str = "cadence.feedback";
}
