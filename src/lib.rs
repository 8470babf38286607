//! Socket-constrained tile grid generation by local wave function collapse
//!
//! A small catalog of modules, each with four directional socket codes, is
//! placed onto a 2D grid by constraint propagation: cells collapse one at a
//! time, each collapse narrows the eight surrounding cells by one hop, and
//! contradictions are absorbed by single-step backtracking or whole-grid
//! regeneration. Consistency is local by design, so retries are part of
//! normal operation rather than an error path.

#![forbid(unsafe_code)]

/// Core constraint-solving engine: domains, compatibility, propagation,
/// selection, and the attempt loop
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Module catalog and grid data structures
pub mod spatial;

pub use io::error::{GenerationError, Result};
