//! Validates grid storage, neighbor ordering, entropy scanning, and the
//! tile alphabet / adjacency configuration types

// Tests unwrap and panic to fail loudly
#![allow(clippy::unwrap_used, clippy::panic)]

use rand::{SeedableRng, rngs::StdRng};
use wavegrid::algorithm::domain::TileDomain;
use wavegrid::io::error::GenerationError;
use wavegrid::spatial::grid::Grid;
use wavegrid::spatial::tiles::{
    AdjacencyTable, TERRAIN_GRASS, TERRAIN_MOUNTAIN, TERRAIN_WATER, TileId, TileSet,
};

#[test]
fn test_new_grid_has_full_domains() {
    let grid = Grid::new(3, 2, 4).unwrap();
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.collapsed_count(), 0);
    for pos in grid.positions() {
        let domain = grid.domain(pos).unwrap();
        assert_eq!(domain.len(), 4);
        assert!(!domain.is_singleton());
    }
}

#[test]
fn test_zero_dimensions_are_rejected() {
    assert!(matches!(
        Grid::new(0, 5, 3),
        Err(GenerationError::InvalidParameter { parameter: "width", .. })
    ));
    assert!(matches!(
        Grid::new(5, 0, 3),
        Err(GenerationError::InvalidParameter { parameter: "height", .. })
    ));
    assert!(matches!(
        Grid::new(5, 5, 0),
        Err(GenerationError::EmptyTileSet)
    ));
}

#[test]
fn test_neighbor_order_is_fixed() {
    let grid = Grid::new(3, 3, 2).unwrap();

    let center: Vec<[usize; 2]> = grid.neighbors([1, 1]).collect();
    assert_eq!(center, vec![[0, 1], [2, 1], [1, 0], [1, 2]]);

    let corner: Vec<[usize; 2]> = grid.neighbors([0, 0]).collect();
    assert_eq!(corner, vec![[1, 0], [0, 1]]);

    let edge: Vec<[usize; 2]> = grid.neighbors([2, 1]).collect();
    assert_eq!(edge, vec![[1, 1], [2, 0], [2, 2]]);
}

#[test]
fn test_single_cell_grid_has_no_neighbors() {
    let grid = Grid::new(1, 1, 3).unwrap();
    assert_eq!(grid.neighbors([0, 0]).count(), 0);
}

#[test]
fn test_min_entropy_cells_track_the_global_minimum() {
    let mut grid = Grid::new(2, 2, 3).unwrap();
    assert_eq!(grid.min_entropy_cells().len(), 4);

    // A collapsed cell drops out of the candidate set.
    assert!(grid.collapse_to([0, 1], TERRAIN_GRASS));
    assert_eq!(grid.min_entropy_cells(), vec![[0, 0], [1, 0], [1, 1]]);

    // Collapsed cells never reappear as candidates.
    for pos in [[0, 0], [1, 0], [1, 1]] {
        assert!(grid.collapse_to(pos, TERRAIN_GRASS));
    }
    assert!(grid.min_entropy_cells().is_empty());
    assert!(grid.is_fully_collapsed());
}

#[test]
fn test_collapse_draws_only_from_the_domain() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut grid = Grid::new(1, 2, 3).unwrap();

    let tile = grid.collapse([0, 0], &mut rng).unwrap();
    assert_eq!(grid.tile([0, 0]), Some(tile));
    assert!(grid.domain([0, 0]).unwrap().is_singleton());

    // Out-of-bounds positions collapse nothing and consume no draw.
    assert_eq!(grid.collapse([5, 5], &mut rng), None);
}

#[test]
fn test_collapse_to_rejects_tiles_outside_the_domain() {
    let mut grid = Grid::new(2, 1, 3).unwrap();
    assert!(grid.collapse_to([0, 0], TERRAIN_WATER));

    // The cell is now pinned; a different tile no longer fits.
    assert!(!grid.collapse_to([0, 0], TERRAIN_MOUNTAIN));
    assert_eq!(grid.tile([0, 0]), Some(TERRAIN_WATER));
}

#[test]
fn test_tile_set_construction_and_lookup() {
    let tiles = TileSet::terrain();
    assert_eq!(tiles.len(), 3);
    assert_eq!(tiles.name(TERRAIN_WATER), Some("water"));
    assert_eq!(tiles.id_of("mountain"), Some(TERRAIN_MOUNTAIN));
    assert_eq!(tiles.id_of("lava"), None);

    let ids: Vec<TileId> = tiles.ids().collect();
    assert_eq!(ids, vec![TERRAIN_WATER, TERRAIN_GRASS, TERRAIN_MOUNTAIN]);

    let names: Vec<String> = Vec::new();
    assert!(matches!(
        TileSet::new(names),
        Err(GenerationError::EmptyTileSet)
    ));
}

#[test]
fn test_terrain_rules_are_symmetric() {
    let table = AdjacencyTable::terrain();
    let tiles = [TERRAIN_WATER, TERRAIN_GRASS, TERRAIN_MOUNTAIN];
    for &a in &tiles {
        for &b in &tiles {
            let forward = table.allowed(a).is_some_and(|row| row.contains(b));
            let backward = table.allowed(b).is_some_and(|row| row.contains(a));
            assert_eq!(forward, backward);
        }
    }
    assert!(!table.allowed(TERRAIN_WATER).unwrap().contains(TERRAIN_MOUNTAIN));
}

#[test]
fn test_asymmetric_rules_are_preserved() {
    let mut table = AdjacencyTable::new(2);
    table.allow(TileId::new(0), TileId::new(1));
    table.allow(TileId::new(1), TileId::new(1));

    assert!(table.validate(2).is_ok());
    assert!(table.allowed(TileId::new(0)).unwrap().contains(TileId::new(1)));
    assert!(!table.allowed(TileId::new(1)).unwrap().contains(TileId::new(0)));
}

#[test]
fn test_domain_set_operations() {
    let mut first = TileDomain::new(8);
    first.insert(TileId::new(1));
    first.insert(TileId::new(3));
    first.insert(TileId::new(5));

    let mut second = TileDomain::new(8);
    second.insert(TileId::new(3));
    second.insert(TileId::new(5));
    second.insert(TileId::new(7));

    first.intersect_with(&second);
    let members: Vec<TileId> = first.tiles().collect();
    assert_eq!(members, vec![TileId::new(3), TileId::new(5)]);
    assert_eq!(first.len(), 2);
    assert!(!first.is_singleton());

    let mut third = TileDomain::new(8);
    third.insert(TileId::new(0));
    first.intersect_with(&third);
    assert!(first.is_empty());
    assert_eq!(first.singleton(), None);
}

#[test]
fn test_domain_selection_is_in_id_order() {
    let domain = TileDomain::all(3);
    assert_eq!(domain.select(0), Some(TileId::new(0)));
    assert_eq!(domain.select(2), Some(TileId::new(2)));
    assert_eq!(domain.select(3), None);

    let mut sparse = TileDomain::new(5);
    sparse.insert(TileId::new(4));
    assert_eq!(sparse.select(0), Some(TileId::new(4)));
    assert_eq!(sparse.singleton(), Some(TileId::new(4)));
    assert!(sparse.is_singleton());
}
