extern crate criterion;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dual_heap::DualHeap;

use crate::generators::{gen_random_usizes, get_random_strings};

pub fn bench_extract(c: &mut Criterion) {
    let base = gen_random_usizes(500_000, 0);

    let mut group = c.benchmark_group("extract_min_usize");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        assert!(base.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_heap: DualHeap<usize> = base[..size].iter().cloned().collect();
            b.iter_batched(
                || base_heap.clone(),
                |mut heap| {
                    for _ in 0..1000 {
                        let _ = heap.extract_min();
                    }
                    heap
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();

    let mut group = c.benchmark_group("extract_both_usize");
    for &size in &[100_000, 200_000, 300_000, 400_000, 500_000] {
        assert!(base.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_heap: DualHeap<usize> = base[..size].iter().cloned().collect();
            b.iter_batched(
                || base_heap.clone(),
                |mut heap| {
                    for _ in 0..500 {
                        let _ = heap.extract_min();
                        let _ = heap.extract_max();
                    }
                    heap
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();

    let mut group = c.benchmark_group("extract_max_string");
    let base = get_random_strings(50_000, 0);

    for &size in &[10_000, 20_000, 30_000, 40_000, 50_000] {
        assert!(base.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_heap: DualHeap<String> = base[..size].iter().cloned().collect();
            b.iter_batched(
                || base_heap.clone(),
                |mut heap| {
                    for _ in 0..1000 {
                        let _ = heap.extract_max();
                    }
                    heap
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
