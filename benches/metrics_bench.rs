//! Benchmarks for draft metric computation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use penwise::editor::{DerivedMetrics, EditorSession, WritingGoals};

fn create_draft(words: usize) -> String {
    (0..words)
        .map(|i| if i % 12 == 11 { "sentence.\n" } else { "word " })
        .collect()
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let goals = WritingGoals::default();

    for size in [100, 1000, 10000, 100000] {
        let draft = create_draft(size);

        group.throughput(Throughput::Bytes(draft.len() as u64));

        group.bench_function(format!("compute_{}", size), |b| {
            b.iter(|| DerivedMetrics::compute(black_box(&draft), &goals))
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    let draft = create_draft(5000);

    group.bench_function("edit_and_read", |b| {
        let mut session = EditorSession::default();
        b.iter(|| {
            session.set_body(black_box(draft.as_str()));
            (session.compute_metrics(), session.goal_progress())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_metrics, bench_session);
criterion_main!(benches);
