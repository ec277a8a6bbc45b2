//! Constrained grid-collapse terrain generation
//!
//! Narrows every cell of a rectangular grid from the full tile alphabet down
//! to a single tile such that all side-adjacent cells are mutually
//! compatible, using minimum-entropy selection, constraint propagation, and
//! whole-grid restart on contradiction (a simplified wave function collapse).

#![forbid(unsafe_code)]

/// Core collapse machinery: domains, propagation, and the attempt loop
pub mod algorithm;
/// Input/output operations, rendering, and error handling
pub mod io;
/// Grid and tile alphabet data structures
pub mod spatial;

pub use io::error::{GenerationError, Result};
