use RustedComputor::numerical::square_root::{sqrt_adaptive, sqrt_reference};
use RustedComputor::polynomial::equation_api::Computor;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_pipeline(c: &mut Criterion) {
    let computor = Computor::new();
    c.bench_function("quadratic equation", |b| {
        b.iter(|| computor.run(black_box("5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0")))
    });
}

fn bench_square_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("square root");
    // integral but not a perfect square: the reference method scans up to the root
    group.bench_function("reference", |b| b.iter(|| sqrt_reference(black_box(1_000_003.0))));
    group.bench_function("adaptive", |b| b.iter(|| sqrt_adaptive(black_box(1_000_003.0))));
    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_square_root);
criterion_main!(benches);
