use crate::spatial::tiles::TileId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-width possibility set over the tile alphabet
///
/// Holds one bit per tile kind, making intersection, size, and singleton
/// tests constant-time bit operations. A cell's domain starts full and only
/// ever shrinks while an attempt is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDomain {
    bits: BitVec,
    tile_count: usize,
}

impl TileDomain {
    /// Create a domain with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
            tile_count,
        }
    }

    /// Create a domain containing every tile in the alphabet
    pub fn all(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
            tile_count,
        }
    }

    /// Insert a tile, ignoring ids outside the alphabet
    pub fn insert(&mut self, tile: TileId) {
        if tile.index() < self.tile_count {
            self.bits.set(tile.index(), true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: TileId) -> bool {
        self.bits.get(tile.index()).as_deref() == Some(&true)
    }

    /// Intersect this domain with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Number of tiles still possible
    ///
    /// This is the cell's entropy: lower means more constrained.
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test if exactly one tile remains
    pub fn is_singleton(&self) -> bool {
        self.len() == 1
    }

    /// The remaining tile, if the domain has collapsed to one
    pub fn singleton(&self) -> Option<TileId> {
        if self.is_singleton() {
            self.bits.first_one().map(TileId::new)
        } else {
            None
        }
    }

    /// The `index`-th present tile in ascending id order
    ///
    /// Used for uniform random selection out of the domain.
    pub fn select(&self, index: usize) -> Option<TileId> {
        self.bits.iter_ones().nth(index).map(TileId::new)
    }

    /// Iterate over the present tiles in ascending id order
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones().map(TileId::new)
    }

    /// Size of the tile alphabet this domain ranges over
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }
}

impl fmt::Display for TileDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiles: Vec<usize> = self.bits.iter_ones().collect();
        write!(f, "TileDomain({} tiles: {tiles:?})", self.len())
    }
}
