//! Spatial data structures for grid collapse
//!
//! This module contains spatial-related functionality including:
//! - Grid storage with bounds-checked neighbor lookup
//! - Tile alphabets and adjacency configuration

/// Cell grid with possibility domains
pub mod grid;
/// Tile alphabets and the compatibility relation
pub mod tiles;

pub use grid::Grid;
