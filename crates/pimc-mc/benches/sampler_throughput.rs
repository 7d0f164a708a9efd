use criterion::{criterion_group, criterion_main, Criterion};
use pimc_core::RngHandle;
use pimc_mc::sample_quarter_circle;

fn bench_sampler(c: &mut Criterion) {
    c.bench_function("sample_quarter_circle_100k", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            sample_quarter_circle(&mut rng, 100_000).unwrap()
        })
    });

    c.bench_function("sample_quarter_circle_1m", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            sample_quarter_circle(&mut rng, 1_000_000).unwrap()
        })
    });
}

criterion_group!(benches, bench_sampler);
criterion_main!(benches);
