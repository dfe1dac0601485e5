use cadence_core::config::ObservabilityConfig;
use cadence_observability::tracing_setup::spans::names;
use cadence_observability::{analytics_span, events, feedback_span, init_tracing};

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig::default();
    let first = init_tracing(&config);
    let second = init_tracing(&config);
    assert_eq!(first, second, "second call must not reinstall the subscriber");
}

#[test]
fn spans_and_events_can_be_emitted() {
    init_tracing(&ObservabilityConfig::default());
    let span = analytics_span!("user-1", "weekly");
    let _guard = span.enter();
    events::partial_data_default("profile", "timed out after 3000ms");
    events::insufficient_data("productivity_peaks", 2, 5);
    drop(_guard);

    let span = feedback_span!("user-1");
    let _guard = span.enter();
    events::adjustment_log_failed("user-1", "disk full");
}

#[test]
fn span_names_are_namespaced() {
    for name in [names::ANALYTICS, names::HABITS, names::PATTERNS, names::FEEDBACK] {
        assert!(name.starts_with("cadence."));
    }
}
