//! Criterion benchmarks for student store operations.
//!
//! Lookups are linear scans, so these track how create, get, update and
//! list scale with the collection size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use std::hint::black_box;
use student_store_core::StudentStore;

fn payload(i: usize) -> Value {
    json!({
        "name": format!("Student {}", i),
        "surname": "Bench",
        "personalId": i,
        "email": format!("s{}@bench.test", i)
    })
}

/// Creates a store pre-populated with `size` students, returning their ids.
fn populated_store(size: usize) -> (StudentStore, Vec<String>) {
    let store = StudentStore::default();
    let ids = (0..size)
        .map(|i| store.create(payload(i)).expect("Failed to create student").id)
        .collect();
    (store, ids)
}

/// Benchmark: validated create
fn benchmark_create(c: &mut Criterion) {
    c.bench_function("create_student", |b| {
        let store = StudentStore::default();
        let mut i = 0usize;
        b.iter(|| {
            i += 1;
            black_box(store.create(payload(i)).unwrap());
        })
    });
}

/// Benchmark: lookup by id at several collection sizes
fn benchmark_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_student");
    for size in [100usize, 1_000, 10_000] {
        let (store, ids) = populated_store(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut i = 0usize;
            b.iter(|| {
                i = (i + 7919) % ids.len();
                black_box(store.get(&ids[i]).unwrap());
            })
        });
    }
    group.finish();
}

/// Benchmark: merge update of a single field
fn benchmark_update(c: &mut Criterion) {
    let (store, ids) = populated_store(1_000);
    c.bench_function("update_student_email", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % ids.len();
            black_box(
                store
                    .update(&ids[i], json!({"email": "changed@bench.test"}))
                    .unwrap(),
            );
        })
    });
}

/// Benchmark: full collection snapshot
fn benchmark_list(c: &mut Criterion) {
    let (store, _) = populated_store(1_000);
    c.bench_function("list_students_1000", |b| {
        b.iter(|| black_box(store.list().unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_create,
    benchmark_get,
    benchmark_update,
    benchmark_list
);
criterion_main!(benches);
