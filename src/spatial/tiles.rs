//! Tile alphabets and the compatibility relation between tile kinds
//!
//! A `TileSet` fixes the closed alphabet for one generation run; the
//! `AdjacencyTable` records, per tile, which tiles may sit on any of its four
//! sides. The table is directionless: the same row is consulted regardless of
//! which side a neighbor occupies. It need not be symmetric, and asymmetry
//! supplied by configuration is preserved rather than corrected.

use crate::algorithm::domain::TileDomain;
use crate::io::error::{GenerationError, Result};

/// Identifier of one tile kind, an index into its `TileSet`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(usize);

impl TileId {
    /// Create an id from a raw alphabet index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw alphabet index
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Water tile of the built-in terrain preset
pub const TERRAIN_WATER: TileId = TileId::new(0);
/// Grass tile of the built-in terrain preset
pub const TERRAIN_GRASS: TileId = TileId::new(1);
/// Mountain tile of the built-in terrain preset
pub const TERRAIN_MOUNTAIN: TileId = TileId::new(2);

/// The closed, named alphabet of tile kinds for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    names: Vec<String>,
}

impl TileSet {
    /// Create a tile set from kind names
    ///
    /// Ids are assigned in iteration order.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::EmptyTileSet` if no names are supplied.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(GenerationError::EmptyTileSet);
        }
        Ok(Self { names })
    }

    /// The water/grass/mountain demo alphabet
    pub fn terrain() -> Self {
        Self {
            names: vec![
                "water".to_string(),
                "grass".to_string(),
                "mountain".to_string(),
            ],
        }
    }

    /// Number of tile kinds
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Test for an empty alphabet (never true after construction)
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all tile ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = TileId> {
        (0..self.names.len()).map(TileId::new)
    }

    /// Name of a tile kind
    pub fn name(&self, tile: TileId) -> Option<&str> {
        self.names.get(tile.index()).map(String::as_str)
    }

    /// Look up a tile kind by name
    pub fn id_of(&self, name: &str) -> Option<TileId> {
        self.names.iter().position(|n| n == name).map(TileId::new)
    }
}

/// Per-tile sets of permitted 4-directional neighbors
///
/// Total over the alphabet it was sized for. Rows are stored as fixed-width
/// domains so propagation can intersect them directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyTable {
    rows: Vec<TileDomain>,
}

impl AdjacencyTable {
    /// Create a table with every row empty
    ///
    /// Rows must be populated with `allow` or `allow_pair` before the table
    /// passes validation.
    pub fn new(tile_count: usize) -> Self {
        Self {
            rows: vec![TileDomain::new(tile_count); tile_count],
        }
    }

    /// The demo terrain rules: water borders water/grass, grass borders
    /// everything, mountain borders grass/mountain
    pub fn terrain() -> Self {
        let mut table = Self::new(3);
        table.allow_pair(TERRAIN_WATER, TERRAIN_WATER);
        table.allow_pair(TERRAIN_WATER, TERRAIN_GRASS);
        table.allow_pair(TERRAIN_GRASS, TERRAIN_GRASS);
        table.allow_pair(TERRAIN_GRASS, TERRAIN_MOUNTAIN);
        table.allow_pair(TERRAIN_MOUNTAIN, TERRAIN_MOUNTAIN);
        table
    }

    /// Permit `neighbor` beside `tile` (one direction of the relation)
    pub fn allow(&mut self, tile: TileId, neighbor: TileId) {
        if let Some(row) = self.rows.get_mut(tile.index()) {
            row.insert(neighbor);
        }
    }

    /// Permit `a` and `b` beside each other in both directions
    pub fn allow_pair(&mut self, a: TileId, b: TileId) {
        self.allow(a, b);
        self.allow(b, a);
    }

    /// The set of tiles permitted beside `tile`
    ///
    /// Returns `None` for ids outside the alphabet the table was sized for.
    pub fn allowed(&self, tile: TileId) -> Option<&TileDomain> {
        self.rows.get(tile.index())
    }

    /// Number of rows in the table
    pub const fn tile_count(&self) -> usize {
        self.rows.len()
    }

    /// Reject tables that can never produce a valid collapse
    ///
    /// A table is usable only when it covers the whole alphabet and every
    /// tile permits at least one neighbor. Checked once at generator
    /// construction so the failure is never discovered mid-run.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidParameter` if the table does not
    /// cover `tile_count` rows, or `GenerationError::EmptyAdjacencyRow` if
    /// any row maps to the empty set.
    pub fn validate(&self, tile_count: usize) -> Result<()> {
        if self.rows.len() != tile_count {
            return Err(GenerationError::InvalidParameter {
                parameter: "adjacency",
                value: self.rows.len().to_string(),
                reason: format!("table must cover all {tile_count} tile kinds"),
            });
        }
        for (index, row) in self.rows.iter().enumerate() {
            if row.is_empty() {
                return Err(GenerationError::EmptyAdjacencyRow { tile: index });
            }
        }
        Ok(())
    }
}
