//! Populated-slot access benchmarks.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use sg_core::{OnceHolder, RacyHolder};

static ONCE: OnceHolder<Vec<u64>> = OnceHolder::new("bench-once");
static RACY: RacyHolder<Vec<u64>> = RacyHolder::new("bench-racy");

fn populated_access(c: &mut Criterion) {
    ONCE.get_or_init(|| vec![1, 2, 3]);
    RACY.get_or_init(|| vec![1, 2, 3]);

    let mut group = c.benchmark_group("populated_access");
    group.bench_function("once_holder", |b| {
        b.iter(|| black_box(ONCE.get_or_init(|| unreachable!()).len()))
    });
    group.bench_function("racy_holder", |b| {
        b.iter(|| black_box(Arc::strong_count(&RACY.get_or_init(|| unreachable!()))))
    });
    group.finish();
}

criterion_group!(benches, populated_access);
criterion_main!(benches);
