//! Input/output operations and error handling

/// Plain-text module catalog loading
pub mod catalog;
/// Command-line interface
pub mod cli;
/// Solver constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering of finished grids
pub mod image;
/// Attempt progress display
pub mod progress;
