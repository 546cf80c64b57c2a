use scatter_core::{compose, ChartConfig, DataGenerator};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn bench_compose(c: &mut Criterion) {
    let cfg = ChartConfig::default();
    let mut group = c.benchmark_group("compose");
    for &n in &[50usize, 5_000usize, 50_000usize] {
        let data = DataGenerator::seeded(n as u64).generate(n, cfg.max_value).expect("generate");
        group.bench_with_input(BenchmarkId::new("visual", n), &data, |b, d| {
            b.iter(|| black_box(compose(d, &cfg)));
        });
        group.bench_with_input(BenchmarkId::new("svg", n), &data, |b, d| {
            b.iter(|| black_box(compose(d, &cfg).to_svg().expect("svg")));
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_50", |b| {
        let mut gen = DataGenerator::seeded(7);
        b.iter(|| black_box(gen.generate(50, 1000.0).expect("generate")));
    });
}

criterion_group!(benches, bench_compose, bench_generate);
criterion_main!(benches);
