//! Input/output operations and error handling

/// Command-line interface and batch run orchestration
pub mod cli;
/// Generation constants and configuration defaults
pub mod configuration;
/// Error types for generation and export
pub mod error;
/// PNG export of collapsed grids
pub mod image;
/// Progress display for generation runs
pub mod progress;
