//! Performance measurement for complete grid generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wavegrid::algorithm::generator::generate;
use wavegrid::spatial::tiles::{AdjacencyTable, TileSet};

/// Measures full generation time as the grid grows
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in &[10usize, 20, 40] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let Ok(grid) = generate(
                    black_box(size),
                    black_box(size),
                    TileSet::terrain(),
                    AdjacencyTable::terrain(),
                    12345,
                ) else {
                    return;
                };
                black_box(grid.collapsed_count());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
