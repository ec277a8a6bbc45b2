//! Generation constants and runtime configuration defaults

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: usize = 20;

/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: usize = 20;

/// Default edge length of one rendered cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 40;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// RGBA colors of the terrain preset, indexed by tile id
/// (water blue, grass green, mountain gray)
pub const TERRAIN_COLORS: [[u8; 4]; 3] = [
    [0, 121, 241, 255],
    [0, 228, 48, 255],
    [130, 130, 130, 255],
];

/// Color for cells that have not collapsed to a single tile
pub const UNCOLLAPSED_COLOR: [u8; 4] = [0, 0, 0, 0];
