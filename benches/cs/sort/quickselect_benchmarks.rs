use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use randselect::sort::{select_with, RngSource};

fn generate_random_vec(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");
    for &size in &[100usize, 1_000, 10_000, 100_000] {
        let data = generate_random_vec(size, 42);
        let rank = (size + 1) / 2;

        group.bench_with_input(BenchmarkId::new("randomized_select", size), &data, |b, data| {
            let mut source = RngSource::seeded(7);
            b.iter(|| {
                let mut arr = data.clone();
                black_box(select_with(&mut arr, 1, size, rank, &mut source).unwrap())
            })
        });

        group.bench_with_input(BenchmarkId::new("select_nth_unstable", size), &data, |b, data| {
            b.iter(|| {
                let mut arr = data.clone();
                black_box(*arr.select_nth_unstable(rank - 1).1)
            })
        });

        group.bench_with_input(BenchmarkId::new("sort_unstable", size), &data, |b, data| {
            b.iter(|| {
                let mut arr = data.clone();
                arr.sort_unstable();
                black_box(arr[rank - 1])
            })
        });
    }
    group.finish();
}

fn bench_sorted_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_input");
    for &size in &[1_000usize, 10_000] {
        let data: Vec<i64> = (0..size as i64).collect();
        group.bench_with_input(BenchmarkId::new("randomized_select", size), &data, |b, data| {
            let mut source = RngSource::seeded(7);
            b.iter(|| {
                let mut arr = data.clone();
                black_box(select_with(&mut arr, 1, size, 1, &mut source).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_median, bench_sorted_input);
criterion_main!(benches);
