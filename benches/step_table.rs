#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;

use criterion::{criterion_group, criterion_main, Criterion};
use proptest::{ prelude::{ any, Strategy}, strategy::ValueTree, test_runner::TestRunner};
use steptable::StepHashTable;

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;

fn hash_table_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = any::<[(String, String); ITEMS_AMOUNT]>()
    .new_tree(&mut runner)
    .unwrap()
    .current();
    // Proptest can mint empty keys, which the step table rejects by design.
    let items: Vec<(String, String)> = items
        .into_iter()
        .filter(|(key, _)| !key.is_empty())
        .collect();

    let mut group = c.benchmark_group("Hash table comparison benchmark");
    group.sample_size(SAMPLE_SIZE);
    let mut step_table = StepHashTable::new();
    let mut rust_map = HashMap::new();
    group.bench_function("steptable set", |b| {
        b.iter(
            || {
            for (key, value) in items.clone() {
                step_table.set(key, value).unwrap();
            }

        });
    });
    group.bench_function("rust std insert", |b| {
        b.iter(
            || {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }

        });
    });
    group.bench_function("steptable get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = step_table.get(key.as_str());
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = rust_map.get(key);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_table_benches);
criterion_main!(benches);
