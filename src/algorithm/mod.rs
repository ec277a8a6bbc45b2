/// Fixed-width possibility sets over the tile alphabet
pub mod domain;
/// Attempt orchestration and the public generation entry point
pub mod generator;
/// Constraint propagation and contradiction detection
pub mod propagation;
