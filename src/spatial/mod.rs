//! Spatial data structures for the solver
//!
//! This module contains the structural side of generation:
//! - The module catalog and direction/socket model
//! - The cell grid owned by one generation attempt

/// Cell grid owned by a single generation attempt
pub mod grid;
/// Module definitions, directions, and the immutable registry
pub mod modules;

pub use grid::{Cell, Grid};
pub use modules::{Direction, Module, ModuleDefinition, ModuleRegistry, SocketCode};
