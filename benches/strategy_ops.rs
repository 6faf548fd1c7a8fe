use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knapsack_dp::{maximum_value, Item, SolverBuilder, Specification, Strategy};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_items(rng: &mut StdRng, n: usize, max_weight: i64) -> Vec<Item<u64>> {
    (0..n)
        .map(|_| {
            let weight = rng.gen_range(1..=max_weight);
            Item::new(weight, rng.gen_range(1..1_000))
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let spec = Specification::new(2_000, random_items(&mut rng, 120, 200));
    let dense = SolverBuilder::new().with_strategy(Strategy::Dense).build();
    let lazy = SolverBuilder::new().with_strategy(Strategy::Lazy).build();

    let mut group = c.benchmark_group("strategy_ops");
    group.bench_function("dense_value", |b| {
        b.iter(|| black_box(dense.maximum_value(black_box(&spec)).unwrap()));
    });
    group.bench_function("lazy_value", |b| {
        b.iter(|| black_box(lazy.maximum_value(black_box(&spec)).unwrap()));
    });
    group.bench_function("dense_value_and_select", |b| {
        b.iter(|| {
            let solution = dense.solve(black_box(&spec)).unwrap();
            black_box(solution.select());
        });
    });
    group.bench_function("lazy_value_and_select", |b| {
        b.iter(|| {
            let solution = lazy.solve(black_box(&spec)).unwrap();
            black_box(solution.select());
        });
    });
    group.finish();
}

fn bench_sparse_capacity(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let spec = Specification::new(1_i64 << 36, random_items(&mut rng, 18, 1_i64 << 34));

    let mut group = c.benchmark_group("sparse_capacity");
    group.sample_size(20);
    group.bench_function("auto_value", |b| {
        b.iter(|| black_box(maximum_value(black_box(&spec)).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_sparse_capacity);
criterion_main!(benches);
