//! Benchmarks for packed column comparison.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use relmetric::{column_diff, words_for, Word};
use rand::prelude::*;

fn random_column(rows: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..words_for(rows)).map(|_| rng.gen()).collect()
}

fn bench_column_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_diff");

    // Exact multiples and ragged tails.
    for rows in [32, 100, 1024, 4096, 65_536 + 7] {
        let a = random_column(rows, 42);
        let b = random_column(rows, 43);

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |bench, &rows| {
            bench.iter(|| column_diff(black_box(&a), black_box(&b), rows))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_column_diff);
criterion_main!(benches);
