//! Benchmarks for color resolution and CSS rendering

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tackboard_colors::{ColorCatalog, MemorySettings};

fn bench_find(c: &mut Criterion) {
    let catalog = ColorCatalog::new(Arc::new(MemorySettings::new()));

    let mut group = c.benchmark_group("find");
    group.bench_function("by_id", |b| b.iter(|| catalog.find(black_box("amber"))));
    group.bench_function("by_name", |b| {
        b.iter(|| catalog.find(black_box("Deep Orange")))
    });
    group.bench_function("miss", |b| {
        b.iter(|| catalog.find(black_box("nonexistent")))
    });
    group.finish();
}

fn bench_css(c: &mut Criterion) {
    let catalog = ColorCatalog::new(Arc::new(MemorySettings::new()));
    c.bench_function("render_css", |b| b.iter(|| black_box(catalog.css())));
}

criterion_group!(benches, bench_find, bench_css);
criterion_main!(benches);
