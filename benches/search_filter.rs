// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the dashboard's filtering paths.
//!
//! Measures:
//! - Site quick-search over the page corpus
//! - Table row filtering (the dashboard search)

use criterion::{criterion_group, criterion_main, Criterion};
use festboard::data;
use festboard::search;
use std::hint::black_box;

fn bench_site_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_filter");

    group.bench_function("site_results_hit", |b| {
        b.iter(|| black_box(search::site_results(black_box("art"))));
    });

    group.bench_function("site_results_miss", |b| {
        b.iter(|| black_box(search::site_results(black_box("zzzz"))));
    });

    group.finish();
}

fn bench_table_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_filter");

    let table = data::users_table();

    group.bench_function("table_rows_filtered", |b| {
        b.iter(|| {
            let matched = table.filtered(black_box("example.com")).count();
            black_box(matched);
        });
    });

    group.bench_function("table_rows_unfiltered", |b| {
        b.iter(|| {
            let matched = table.filtered(black_box("")).count();
            black_box(matched);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_site_search, bench_table_filter);
criterion_main!(benches);
