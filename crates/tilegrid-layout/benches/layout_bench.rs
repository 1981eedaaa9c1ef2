//! Benchmarks for grid planning and application.
//!
//! Run with: cargo bench -p tilegrid-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tilegrid_core::simulated::SimulatedHost;
use tilegrid_core::{ComputedPadding, Sides, Size};
use tilegrid_layout::{GridLayout, GridParams, column_count};

fn bench_column_count(c: &mut Criterion) {
    let params = GridParams::default();
    c.bench_function("layout/column_count", |b| {
        b.iter(|| column_count(black_box(800.0), black_box(params)))
    });
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/plan");
    let layout = GridLayout::default();

    for tiles in [12usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(tiles), &tiles, |b, &n| {
            b.iter(|| black_box(layout.plan(Sides::all(12.0), black_box(1920.0), n)))
        });
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/apply");
    let layout = GridLayout::default();

    for tiles in [12usize, 256, 4096] {
        let mut host = SimulatedHost::new(
            Size::new(1920.0, 1080.0),
            ComputedPadding::uniform("12px"),
            tiles,
        );
        group.bench_with_input(BenchmarkId::from_parameter(tiles), &tiles, |b, &n| {
            b.iter(|| black_box(layout.apply(&mut host, n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_column_count, bench_plan, bench_apply);
criterion_main!(benches);
