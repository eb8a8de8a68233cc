//! Roster benchmarks
//!
//! - Registry admission (validation + linear duplicate scan)
//! - Search and credit sort over a populated registry
//! - Store save/load of a full roster

use course_roster::{Record, Registry, Store, StoreConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Distinct, valid records.
fn create_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::new(
                format!("{:06}", i % 1_000_000),
                format!("student number {}", i % 97),
                format!("CSC{:03}", i % 1000),
                "systems programming",
                if i % 2 == 0 { "2024-F" } else { "2024-S" },
                3,
                f64::from(u32::try_from(i % 50).unwrap_or(0) + 1) / 10.0,
                "exam",
            )
        })
        .collect()
}

/// Benchmark bulk import into an empty registry
fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_import");

    for size in [100, 1_000, 5_000].iter() {
        let records = create_records(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut registry = Registry::new();
                black_box(registry.import_many(records.clone()));
            });
        });
    }

    group.finish();
}

/// Benchmark keyword search and credit sort
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_queries");
    let registry = Registry::from_records(create_records(5_000));

    group.bench_function("search", |b| {
        b.iter(|| black_box(registry.search("number 4")));
    });
    group.bench_function("sorted_by_credit", |b| {
        b.iter(|| black_box(registry.sorted_by_credit()));
    });
    group.bench_function("count_by_semester", |b| {
        b.iter(|| black_box(registry.count_by_semester("2024-f")));
    });

    group.finish();
}

/// Benchmark save + load round trip
fn bench_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_roundtrip");
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(StoreConfig::in_dir(dir.path())).unwrap();

    for size in [1_000, 10_000].iter() {
        let records = create_records(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                store.save(&records);
                black_box(store.load());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_import, bench_queries, bench_store);
criterion_main!(benches);
