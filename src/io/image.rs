//! PNG export of collapsed grids
//!
//! Renders one fixed-size square per cell in the tile's configured color.
//! Cells that have not collapsed render with the uncollapsed fallback color,
//! which only occurs for grids exported mid-attempt.

use crate::io::configuration::UNCOLLAPSED_COLOR;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::grid::Grid;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Save a grid as a PNG, `cell_size` pixels per cell edge
///
/// `colors` maps tile ids to RGBA values and must cover the grid's alphabet.
///
/// # Errors
///
/// Returns `GenerationError::InvalidParameter` if `cell_size` is zero or
/// `colors` does not cover the alphabet, and `GenerationError::ImageExport`
/// if encoding or writing the file fails.
pub fn export_grid_as_png(
    grid: &Grid,
    colors: &[[u8; 4]],
    cell_size: u32,
    path: &Path,
) -> Result<()> {
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be at least 1 pixel",
        ));
    }
    if colors.len() < grid.tile_count() {
        return Err(invalid_parameter(
            "colors",
            &colors.len(),
            &format!("must cover all {} tile kinds", grid.tile_count()),
        ));
    }

    let image_width = grid.width() as u32 * cell_size;
    let image_height = grid.height() as u32 * cell_size;

    let buffer = ImageBuffer::from_fn(image_width, image_height, |px, py| {
        let pos = [(py / cell_size) as usize, (px / cell_size) as usize];
        let color = grid
            .tile(pos)
            .and_then(|tile| colors.get(tile.index()).copied())
            .unwrap_or(UNCOLLAPSED_COLOR);
        Rgba(color)
    });

    buffer
        .save(path)
        .map_err(|source| GenerationError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}
