//! Mutable cell grid owned by a single generation attempt
//!
//! The grid holds nothing but cell state; all narrowing logic lives in the
//! algorithm layer. Dimensions are fixed for the lifetime of an attempt, and
//! regeneration replaces the grid wholesale.

use ndarray::Array2;

use crate::algorithm::domain::ModuleSet;

/// One grid position
///
/// A cell is unexplored while `domain` is `None`, in superposition while the
/// domain holds more than one candidate, and collapsed once exactly one
/// remains. `developed` records that the cell's collapse has already been
/// propagated outward, which excludes it from reselection.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    /// Candidate modules still possible here, once computed
    pub domain: Option<ModuleSet>,
    /// Whether this cell's collapse has been propagated to its neighbors
    pub developed: bool,
}

/// Rectangular field of cells addressed by (row, col)
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid with every cell unexplored and undeveloped
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: Array2::default((height, width)),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Test whether signed coordinates fall inside the grid
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows() && (col as usize) < self.cols()
    }

    /// Cell at the given position
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get([row, col])
    }

    /// Mutable cell at the given position
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut([row, col])
    }

    /// Domain size at the given position, if a domain has been computed
    pub fn domain_size(&self, row: usize, col: usize) -> Option<usize> {
        self.cell(row, col)
            .and_then(|cell| cell.domain.as_ref())
            .map(ModuleSet::len)
    }

    /// Test whether every cell has collapsed to a single module
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.domain.as_ref().is_some_and(ModuleSet::is_collapsed))
    }
}
