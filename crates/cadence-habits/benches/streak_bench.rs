use cadence_core::config::HabitConfig;
use cadence_habits::engine;
use cadence_habits::CompletionHistory;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_fixtures::{completions, day, habit, pattern_start};

fn bench_streaks(c: &mut Criterion) {
    let today = day(2026, 6, 30);
    let pattern: Vec<bool> = (0..365).map(|i| i % 9 != 0).collect();

    c.bench_function("history_streak_state_365d", |b| {
        let h = habit("h", pattern_start(today, pattern.len()));
        let history = CompletionHistory::from_pattern(&pattern, today);
        b.iter(|| black_box(history.streak_state(&h, 30)))
    });

    let habits: Vec<_> = (0..50)
        .map(|i| habit(&format!("h{i}"), pattern_start(today, pattern.len())))
        .collect();
    let records: Vec<_> = habits
        .iter()
        .flat_map(|h| completions(&h.habit_id, today, &pattern))
        .collect();
    let config = HabitConfig::default();

    c.bench_function("evaluate_50_habits", |b| {
        b.iter(|| black_box(engine::evaluate(&habits, &records, today, &config)))
    });
}

criterion_group!(benches, bench_streaks);
criterion_main!(benches);
