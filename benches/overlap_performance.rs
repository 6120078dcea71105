use boxlap::{inclusion, intersection, iou, BoxSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a grid of `count` boxes in `ndim` dimensions with staggered
/// offsets so that neighbors overlap.
fn create_test_boxes(count: usize, ndim: usize) -> BoxSet {
    let pairs: Vec<(Vec<f64>, Vec<f64>)> = (0..count)
        .map(|i| {
            let offset = (i as f64) * 0.75;
            let lower: Vec<f64> = (0..ndim).map(|d| offset + d as f64).collect();
            let upper: Vec<f64> = lower.iter().map(|lo| lo + 1.5).collect();
            (lower, upper)
        })
        .collect();
    BoxSet::from_bounds(&pairs).unwrap()
}

fn bench_pairwise_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_kernels");

    for &size in &[32usize, 128, 512] {
        let a = create_test_boxes(size, 2);
        let b = create_test_boxes(size, 2);

        group.bench_with_input(
            BenchmarkId::new("intersection", size),
            &size,
            |bencher, _| {
                bencher.iter(|| intersection(black_box(&a), black_box(&b)).unwrap())
            },
        );
        group.bench_with_input(BenchmarkId::new("iou", size), &size, |bencher, _| {
            bencher.iter(|| iou(black_box(&a), black_box(&b)).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("inclusion", size),
            &size,
            |bencher, _| bencher.iter(|| inclusion(black_box(&a), black_box(&b)).unwrap()),
        );
    }

    group.finish();
}

fn bench_dimensionality(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimensionality");

    for &ndim in &[1usize, 2, 4, 8] {
        let a = create_test_boxes(128, ndim);
        let b = create_test_boxes(128, ndim);

        group.bench_with_input(BenchmarkId::new("iou_128", ndim), &ndim, |bencher, _| {
            bencher.iter(|| iou(black_box(&a), black_box(&b)).unwrap())
        });
    }

    group.finish();
}

fn bench_parallel_fill(c: &mut Criterion) {
    // With the `parallel` feature the same calls fan out across rayon
    // tasks; compare against a sequential build of this bench.
    let a = create_test_boxes(1024, 2);
    let b = create_test_boxes(1024, 2);

    let mut group = c.benchmark_group("large_fill");
    group.sample_size(20);
    group.bench_function("iou_1024x1024", |bencher| {
        bencher.iter(|| iou(black_box(&a), black_box(&b)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_pairwise_kernels,
    bench_dimensionality,
    bench_parallel_fill
);
criterion_main!(benches);
