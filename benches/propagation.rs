//! Performance measurement for one propagation cascade after a collapse

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wavegrid::algorithm::propagation::{Frontier, propagate};
use wavegrid::spatial::grid::Grid;
use wavegrid::spatial::tiles::{AdjacencyTable, TERRAIN_MOUNTAIN};

/// Measures the cascade triggered by pinning the center of a fresh grid
fn bench_propagate_from_center(c: &mut Criterion) {
    let table = AdjacencyTable::terrain();
    let Ok(base) = Grid::new(40, 40, 3) else {
        return;
    };

    c.bench_function("propagate_from_center", |b| {
        b.iter(|| {
            let mut grid = base.clone();
            if !grid.collapse_to([20, 20], TERRAIN_MOUNTAIN) {
                return;
            }
            let mut frontier = Frontier::seeded_with_neighbors(&grid, [20, 20]);
            let result = propagate(&mut grid, &table, &mut frontier);
            black_box(result.is_ok());
        });
    });
}

criterion_group!(benches, bench_propagate_from_center);
criterion_main!(benches);
