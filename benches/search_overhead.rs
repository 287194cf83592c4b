/// Binary Search Benchmarks
///
/// Measures probe cost against slice size and compares the step-counting
/// engine with the standard library's `binary_search`.
use algorithms::search::{binary_search, BinarySearch};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

/// Benchmark: present items across sizes
fn bench_search_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_sizes");
    group.measurement_time(Duration::from_secs(5));

    for size in [16usize, 256, 4096, 65_536, 1_048_576].iter() {
        let values: Vec<u64> = (0..*size as u64).map(|v| v * 3).collect();
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let item = (size as u64 / 3) * 3;
            b.iter(|| binary_search(black_box(&values), black_box(&item)));
        });
    }

    group.finish();
}

/// Benchmark: absent items terminate as quickly as present ones
fn bench_search_absent(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_absent");
    let values: Vec<u64> = (0..65_536u64).map(|v| v * 2).collect();

    group.bench_function("odd_item", |b| {
        b.iter(|| binary_search(black_box(&values), black_box(&40_001)));
    });
    group.bench_function("past_end", |b| {
        b.iter(|| binary_search(black_box(&values), black_box(&u64::MAX)));
    });

    group.finish();
}

/// Benchmark: step counting vs std
fn bench_against_std(c: &mut Criterion) {
    let mut group = c.benchmark_group("against_std");
    let values: Vec<u64> = (0..65_536u64).collect();

    group.bench_function("algorithms", |b| {
        b.iter(|| binary_search(black_box(&values), black_box(&12_345)));
    });
    group.bench_function("std", |b| {
        b.iter(|| black_box(&values).binary_search(black_box(&12_345)));
    });

    group.finish();
}

/// Benchmark: builder overhead on top of the free function
fn bench_builder(c: &mut Criterion) {
    let search = BinarySearch::new()
        .with_item(777u64)
        .with_values((0..4096u64).collect::<Vec<_>>());

    c.bench_function("builder_search", |b| {
        b.iter(|| black_box(&search).search());
    });
}

criterion_group!(
    benches,
    bench_search_sizes,
    bench_search_absent,
    bench_against_std,
    bench_builder
);
criterion_main!(benches);
