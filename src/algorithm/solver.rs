//! Generation attempt state machine and the outer regeneration loop
//!
//! One `GenerationAttempt` owns a grid from seed to Solved or Abandoned. The
//! `Generator` runs attempts until one solves, replacing the grid wholesale
//! between attempts, and gives up with an error once the attempt cap is hit.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::domain::ModuleSet;
use crate::algorithm::propagation::{propagate_diagonal, propagate_orthogonal};
use crate::algorithm::selection::select_next_cell;
use crate::io::configuration::{RETRY_LIMIT, SEED_CELL, STEP_LIMIT_SLACK};
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::modules::ModuleRegistry;

/// Seeded random source for collapse choices
///
/// The only non-determinism in the solver lives here, so a fixed seed
/// reproduces a run exactly.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic selector from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a uniform index below `len`, or 0 for an empty range
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.rng.random_range(0..len)
        }
    }
}

/// Solver parameters for one generation run
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Grid height in cells
    pub height: usize,
    /// Grid width in cells
    pub width: usize,
    /// Cell force-initialized with the full registry before the loop
    pub seed_cell: (usize, usize),
    /// Single-step backtracks tolerated per attempt before abandoning it
    pub retry_limit: usize,
    /// Full regenerations allowed before generation fails outright
    pub max_attempts: usize,
    /// Per-attempt step budget; derived from the grid area when `None`
    pub step_limit: Option<usize>,
}

impl SolverConfig {
    /// Configuration with default seeding, retry, and attempt settings
    pub const fn new(height: usize, width: usize, max_attempts: usize) -> Self {
        Self {
            height,
            width,
            seed_cell: SEED_CELL,
            retry_limit: RETRY_LIMIT,
            max_attempts,
            step_limit: None,
        }
    }
}

/// Domain and coordinates of the most recent collapse, captured beforehand
///
/// Exactly one level of history: restoring it undoes the last collapse and
/// nothing more.
#[derive(Clone, Debug)]
pub struct BacktrackSnapshot {
    /// Row of the collapsed cell
    pub row: usize,
    /// Column of the collapsed cell
    pub col: usize,
    /// Domain the cell held immediately before collapsing
    pub domain: ModuleSet,
}

/// Result of advancing an attempt by one solver step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A cell was collapsed and its choice propagated one hop outward
    Collapsed {
        /// Row of the collapsed cell
        row: usize,
        /// Column of the collapsed cell
        col: usize,
        /// Registry index of the chosen module
        module: usize,
    },
    /// A contradiction was absorbed by restoring the last collapse snapshot
    Backtracked {
        /// Row of the contradicted cell
        row: usize,
        /// Column of the contradicted cell
        col: usize,
    },
    /// Every cell has collapsed
    Solved,
    /// The attempt is beyond local repair and must be regenerated
    Exhausted,
}

/// One full pass over a grid, from seed to Solved or Abandoned
///
/// Owns its grid exclusively; a new attempt starts from a brand-new grid and
/// shares nothing with its predecessor.
pub struct GenerationAttempt<'a> {
    registry: &'a ModuleRegistry,
    grid: Grid,
    snapshot: Option<BacktrackSnapshot>,
    retries: usize,
    retry_limit: usize,
}

impl<'a> GenerationAttempt<'a> {
    /// Create an attempt with the seed cell holding the full registry
    ///
    /// The seed cell is the only cell with a domain, so the first step
    /// selects and collapses it through the ordinary path, giving the loop
    /// something non-trivial to propagate from.
    pub fn new(
        registry: &'a ModuleRegistry,
        height: usize,
        width: usize,
        seed_cell: (usize, usize),
        retry_limit: usize,
    ) -> Self {
        let mut grid = Grid::new(height, width);
        if let Some(cell) = grid.cell_mut(seed_cell.0, seed_cell.1) {
            cell.domain = Some(ModuleSet::all(registry.len()));
        }

        Self {
            registry,
            grid,
            snapshot: None,
            retries: 0,
            retry_limit,
        }
    }

    /// Current grid state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Snapshot of the last successful collapse, if any
    pub const fn snapshot(&self) -> Option<&BacktrackSnapshot> {
        self.snapshot.as_ref()
    }

    /// Backtracks spent so far in this attempt
    pub const fn retries(&self) -> usize {
        self.retries
    }

    /// Advance the attempt by one select/collapse/propagate step
    pub fn step(&mut self, selector: &mut RandomSelector) -> StepOutcome {
        if self.grid.is_fully_collapsed() {
            return StepOutcome::Solved;
        }

        let Some((row, col)) = select_next_cell(&self.grid) else {
            // Undeveloped frontier is unreachable; nothing left to collapse
            return StepOutcome::Exhausted;
        };

        let domain = self
            .grid
            .cell(row, col)
            .and_then(|cell| cell.domain.clone());
        let Some(domain) = domain else {
            return StepOutcome::Exhausted;
        };

        if domain.is_empty() {
            return self.backtrack(row, col);
        }

        self.snapshot = Some(BacktrackSnapshot {
            row,
            col,
            domain: domain.clone(),
        });

        let members = domain.to_vec();
        let Some(&chosen) = members.get(selector.pick_index(members.len())) else {
            return StepOutcome::Exhausted;
        };

        if let Some(cell) = self.grid.cell_mut(row, col) {
            cell.developed = true;
            cell.domain = Some(ModuleSet::singleton(self.registry.len(), chosen));
        }

        propagate_orthogonal(&mut self.grid, self.registry, (row, col), chosen);
        propagate_diagonal(&mut self.grid, self.registry, (row, col));

        StepOutcome::Collapsed {
            row,
            col,
            module: chosen,
        }
    }

    /// Absorb a contradiction by re-opening the last collapsed cell
    ///
    /// The contradicted cell keeps its empty domain; only the snapshot cell
    /// is restored, with its pre-collapse domain and `developed` cleared, so
    /// the next pass can draw differently there.
    fn backtrack(&mut self, row: usize, col: usize) -> StepOutcome {
        if self.retries >= self.retry_limit {
            return StepOutcome::Exhausted;
        }
        let Some(snapshot) = self.snapshot.clone() else {
            // Contradiction before any collapse: nothing to re-open
            return StepOutcome::Exhausted;
        };

        self.retries += 1;
        if let Some(cell) = self.grid.cell_mut(snapshot.row, snapshot.col) {
            cell.domain = Some(snapshot.domain);
            cell.developed = false;
        }

        StepOutcome::Backtracked { row, col }
    }
}

/// One cell of the finished grid, in presentation terms
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Row of the cell
    pub row: usize,
    /// Column of the cell
    pub col: usize,
    /// Registry index of the assigned module
    pub module: usize,
    /// Identity of the assigned module
    pub identity: String,
}

/// Fully collapsed grid handed to the presentation layer
#[derive(Clone, Debug)]
pub struct GeneratedGrid {
    /// Grid height in cells
    pub rows: usize,
    /// Grid width in cells
    pub cols: usize,
    /// Row-major module assignment for every cell
    pub placements: Vec<Placement>,
    /// Generation attempts consumed, including the successful one
    pub attempts: usize,
    /// Single-step backtracks absorbed across all attempts
    pub backtracks: usize,
}

impl GeneratedGrid {
    /// Extract placements from a fully collapsed grid
    ///
    /// Returns `None` if any cell has not collapsed to a single module.
    fn from_grid(
        grid: &Grid,
        registry: &ModuleRegistry,
        attempts: usize,
        backtracks: usize,
    ) -> Option<Self> {
        let mut placements = Vec::with_capacity(grid.rows() * grid.cols());
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let module = grid
                    .cell(row, col)
                    .and_then(|cell| cell.domain.as_ref())
                    .and_then(ModuleSet::sole_member)?;
                let identity = registry.get(module)?.identity().to_string();
                placements.push(Placement {
                    row,
                    col,
                    module,
                    identity,
                });
            }
        }

        Some(Self {
            rows: grid.rows(),
            cols: grid.cols(),
            placements,
            attempts,
            backtracks,
        })
    }

    /// Registry index assigned to the given cell
    pub fn module_at(&self, row: usize, col: usize) -> Option<usize> {
        self.placements
            .get(row * self.cols + col)
            .map(|placement| placement.module)
    }
}

/// Drives generation attempts until one solves or the cap is exhausted
pub struct Generator<'a> {
    registry: &'a ModuleRegistry,
    config: SolverConfig,
    selector: RandomSelector,
    attempts_run: usize,
    total_backtracks: usize,
}

impl<'a> Generator<'a> {
    /// Create a generator over a loaded registry
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid is too small to hold the configured seed cell
    /// - `max_attempts` is zero
    pub fn new(registry: &'a ModuleRegistry, config: SolverConfig, seed: u64) -> Result<Self> {
        if config.seed_cell.0 >= config.height || config.seed_cell.1 >= config.width {
            return Err(GenerationError::OutOfBoundsConfiguration {
                height: config.height,
                width: config.width,
                seed_cell: config.seed_cell,
            });
        }
        if config.max_attempts == 0 {
            return Err(crate::io::error::invalid_parameter(
                "max_attempts",
                &config.max_attempts,
                &"at least one generation attempt is required",
            ));
        }

        Ok(Self {
            registry,
            config,
            selector: RandomSelector::new(seed),
            attempts_run: 0,
            total_backtracks: 0,
        })
    }

    /// Attempts started so far
    pub const fn attempts_run(&self) -> usize {
        self.attempts_run
    }

    /// Backtracks absorbed across all attempts so far
    pub const fn total_backtracks(&self) -> usize {
        self.total_backtracks
    }

    /// Run one generation attempt on a brand-new grid
    ///
    /// Returns the finished grid on success, or `None` when the attempt was
    /// abandoned and the caller should try again.
    ///
    /// # Errors
    ///
    /// Returns an error if the attempt exceeds its step budget.
    pub fn execute_attempt(&mut self) -> Result<Option<GeneratedGrid>> {
        self.attempts_run += 1;

        let step_limit = self.config.step_limit.unwrap_or(
            self.config.height * self.config.width + 2 * self.config.retry_limit + STEP_LIMIT_SLACK,
        );

        let mut attempt = GenerationAttempt::new(
            self.registry,
            self.config.height,
            self.config.width,
            self.config.seed_cell,
            self.config.retry_limit,
        );

        let mut steps = 0;
        loop {
            steps += 1;
            if steps > step_limit {
                return Err(GenerationError::StepLimitExceeded {
                    attempt: self.attempts_run,
                    steps,
                });
            }

            match attempt.step(&mut self.selector) {
                StepOutcome::Collapsed { .. } => {}
                StepOutcome::Backtracked { .. } => self.total_backtracks += 1,
                StepOutcome::Solved => {
                    return Ok(GeneratedGrid::from_grid(
                        attempt.grid(),
                        self.registry,
                        self.attempts_run,
                        self.total_backtracks,
                    ));
                }
                StepOutcome::Exhausted => return Ok(None),
            }
        }
    }

    /// Run attempts until one solves
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Every allowed attempt was abandoned (`GenerationFailed`)
    /// - An attempt exceeded its step budget
    pub fn generate(&mut self) -> Result<GeneratedGrid> {
        for _ in 0..self.config.max_attempts {
            if let Some(result) = self.execute_attempt()? {
                return Ok(result);
            }
        }

        Err(GenerationError::GenerationFailed {
            attempts: self.attempts_run,
        })
    }
}
