//! Criterion benchmarks for arcaug critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Parse: puzzle JSON to validated grids
//! - Transforms: single primitives and composed chains on one grid
//! - Augment: the full catalog applied to a puzzle, plus encoding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use arcaug::build::{augment, encode_variants};
use arcaug::models::{ExamplePair, Grid, Puzzle};
use arcaug::registry::TransformRegistry;
use arcaug::transforms::Transform;

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generate a size x size grid cycling through every color
fn make_grid(size: usize) -> Grid {
    let rows = (0..size).map(|r| (0..size).map(|c| ((r * 7 + c * 3) % 10) as u8).collect()).collect();
    Grid::new(rows).unwrap()
}

/// Generate a puzzle with `shots` train pairs and one test pair
fn make_puzzle(shots: usize, size: usize) -> Puzzle {
    let pair = || ExamplePair::new(make_grid(size), make_grid(size));
    Puzzle::new((0..shots).map(|_| pair()).collect(), vec![pair()])
}

// =============================================================================
// Parse Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [3, 10, 30].iter() {
        let json = String::from_utf8(make_puzzle(3, *size).to_json_bytes().unwrap()).unwrap();
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("puzzle", size), &json, |b, json| {
            b.iter(|| Puzzle::from_json(black_box(json)))
        });
    }

    group.finish();
}

// =============================================================================
// Transform Benchmarks
// =============================================================================

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let grid = make_grid(30);

    let cases = [
        ("rotate90", Transform::Rotate90),
        ("transpose", Transform::Transpose),
        ("reflect_to_the_right", Transform::ReflectRight),
        ("increase_resolution_2", Transform::IncreaseResolution { factor: 2 }),
        ("roll_colors_1", Transform::RollColors { shift: 1 }),
    ];
    for (name, transform) in cases.iter() {
        group.bench_function(*name, |b| b.iter(|| transform.apply(black_box(&grid))));
    }

    let registry = TransformRegistry::standard();
    for entry in registry.iter().filter(|e| e.transform.is_composed()) {
        group.bench_function(entry.name, |b| b.iter(|| entry.transform.apply(black_box(&grid))));
    }

    group.finish();
}

// =============================================================================
// Augment Benchmarks
// =============================================================================

fn bench_augment(c: &mut Criterion) {
    let mut group = c.benchmark_group("augment");
    let registry = TransformRegistry::standard();

    for size in [3, 10, 30].iter() {
        let puzzle = make_puzzle(3, *size);
        group.throughput(Throughput::Elements(registry.len() as u64));
        group.bench_with_input(BenchmarkId::new("catalog", size), &puzzle, |b, puzzle| {
            b.iter(|| augment(black_box(puzzle), &registry))
        });
    }

    let variants = augment(&make_puzzle(3, 30), &registry).unwrap();
    group.bench_function("encode_catalog_30x30", |b| {
        b.iter(|| encode_variants(black_box(&variants)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_transforms, bench_augment);
criterion_main!(benches);
