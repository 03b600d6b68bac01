//! Benchmarks for RankKV ranked set and store operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rankkv::config::Config;
use rankkv::ranked::{Item, RankedSet};
use rankkv::store::Store;

/// Deterministic spread of values on both sides of the default threshold
fn value_at(i: i64) -> i64 {
    (i * 7919) % 250
}

fn ranked_benchmarks(c: &mut Criterion) {
    c.bench_function("ranked_insert_at_capacity", |b| {
        let mut set = RankedSet::new(100, 100, 100).unwrap();
        let mut i = 0i64;
        b.iter(|| {
            set.insert(Item::new("k", value_at(i)));
            i += 1;
        });
    });

    c.bench_function("ranked_sort_full", |b| {
        let mut set = RankedSet::new(100, 100, 100).unwrap();
        b.iter(|| {
            for i in 0..100 {
                set.insert(Item::new("k", value_at(i)));
            }
            set.sort();
            black_box(set.sorted_values());
        });
    });
}

fn store_benchmarks(c: &mut Criterion) {
    let store = Store::open(Config::default()).unwrap();
    for i in 0..1000 {
        store.set(&format!("key{}", i), value_at(i));
    }

    c.bench_function("store_set", |b| {
        let mut i = 0i64;
        b.iter(|| {
            store.set("bench", value_at(i));
            i += 1;
        });
    });

    c.bench_function("store_get", |b| {
        b.iter(|| black_box(store.get("key500").unwrap()));
    });

    c.bench_function("store_get_rank", |b| {
        b.iter(|| black_box(store.get_rank(10).unwrap()));
    });
}

criterion_group!(benches, ranked_benchmarks, store_benchmarks);
criterion_main!(benches);
