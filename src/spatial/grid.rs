//! Rectangular cell grid with bounds-checked neighbor lookup
//!
//! Owns one possibility domain per cell in row-major layout. A grid is
//! exclusively owned by a single in-flight generation attempt and is reset
//! wholesale when the attempt hits a contradiction.

use crate::algorithm::domain::TileDomain;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::tiles::TileId;
use ndarray::Array2;
use rand::Rng;

/// Row/column offsets to the four edge-sharing neighbors
///
/// The order is fixed (up, down, left, right) so that a seeded random source
/// reproduces identical runs.
const NEIGHBOR_OFFSETS: [[i32; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// Grid of cells, each holding a possibility domain over the tile alphabet
///
/// Positions are `[row, col]` with `0 <= row < height` and `0 <= col < width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    domains: Array2<TileDomain>,
    tile_count: usize,
}

impl Grid {
    /// Create a grid with every cell's domain set to the full alphabet
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidParameter` if either dimension is
    /// zero or exceeds `MAX_GRID_DIMENSION`, or if the alphabet is empty.
    pub fn new(width: usize, height: usize, tile_count: usize) -> Result<Self> {
        if width == 0 || width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if height == 0 || height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &height,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if tile_count == 0 {
            return Err(GenerationError::EmptyTileSet);
        }

        Ok(Self {
            domains: Array2::from_elem((height, width), TileDomain::all(tile_count)),
            tile_count,
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.domains.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.domains.nrows()
    }

    /// Size of the tile alphabet the grid was built for
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// The possibility domain at a position
    pub fn domain(&self, pos: [usize; 2]) -> Option<&TileDomain> {
        self.domains.get(pos)
    }

    /// The collapsed tile at a position, if its domain is a singleton
    ///
    /// This is the only read a renderer should perform: non-singleton domains
    /// may be mid-shrink and about to be discarded.
    pub fn tile(&self, pos: [usize; 2]) -> Option<TileId> {
        self.domains.get(pos).and_then(TileDomain::singleton)
    }

    /// The up-to-4 in-bounds positions sharing an edge with `pos`
    ///
    /// Always yielded in the same fixed order: up, down, left, right.
    pub fn neighbors(&self, pos: [usize; 2]) -> impl Iterator<Item = [usize; 2]> + '_ {
        let rows = self.domains.nrows() as i32;
        let cols = self.domains.ncols() as i32;
        NEIGHBOR_OFFSETS.iter().filter_map(move |offset| {
            let row = pos[0] as i32 + offset[0];
            let col = pos[1] as i32 + offset[1];
            (row >= 0 && row < rows && col >= 0 && col < cols)
                .then(|| [row as usize, col as usize])
        })
    }

    /// All uncollapsed positions sharing the globally minimal domain size
    ///
    /// Positions are reported in row-major order. An empty result means the
    /// grid is fully collapsed.
    pub fn min_entropy_cells(&self) -> Vec<[usize; 2]> {
        let mut min_entropy = usize::MAX;
        let mut candidates = Vec::new();

        for ((row, col), domain) in self.domains.indexed_iter() {
            let entropy = domain.len();
            if entropy <= 1 {
                continue;
            }
            if entropy < min_entropy {
                min_entropy = entropy;
                candidates.clear();
            }
            if entropy == min_entropy {
                candidates.push([row, col]);
            }
        }

        candidates
    }

    /// Collapse the cell at `pos` to one tile chosen uniformly at random
    ///
    /// Consumes exactly one draw from the supplied source. Returns `None`
    /// without drawing if the position is out of bounds or its domain is
    /// empty; neither occurs while the attempt invariants hold.
    pub fn collapse<R: Rng>(&mut self, pos: [usize; 2], rng: &mut R) -> Option<TileId> {
        let domain = self.domains.get(pos)?;
        if domain.is_empty() {
            return None;
        }
        let chosen = domain.select(rng.random_range(0..domain.len()))?;
        self.collapse_to(pos, chosen).then_some(chosen)
    }

    /// Collapse the cell at `pos` to a specific tile
    ///
    /// Returns `false` and leaves the cell untouched if the position is out
    /// of bounds or the tile is not in the cell's current domain.
    pub fn collapse_to(&mut self, pos: [usize; 2], tile: TileId) -> bool {
        let Some(domain) = self.domains.get_mut(pos) else {
            return false;
        };
        if !domain.contains(tile) {
            return false;
        }
        let mut singleton = TileDomain::new(self.tile_count);
        singleton.insert(tile);
        *domain = singleton;
        true
    }

    /// Replace the domain at `pos`, committing a propagation shrink
    pub(crate) fn set_domain(&mut self, pos: [usize; 2], domain: TileDomain) {
        if let Some(cell) = self.domains.get_mut(pos) {
            *cell = domain;
        }
    }

    /// Number of cells whose domain has collapsed to a singleton
    pub fn collapsed_count(&self) -> usize {
        self.domains.iter().filter(|d| d.is_singleton()).count()
    }

    /// Test if every cell has collapsed to exactly one tile
    pub fn is_fully_collapsed(&self) -> bool {
        self.domains.iter().all(TileDomain::is_singleton)
    }

    /// Iterate over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> {
        let (rows, cols) = self.domains.dim();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| [row, col]))
    }

    /// Restore every cell's domain to the full alphabet
    ///
    /// Discards the in-flight attempt; equivalent to allocating a fresh grid
    /// of the same dimensions.
    pub fn reset(&mut self) {
        let full = TileDomain::all(self.tile_count);
        self.domains.fill(full);
    }
}
