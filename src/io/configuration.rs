//! Solver constants and runtime configuration defaults

/// Single-step backtracks tolerated per attempt before abandoning it
pub const RETRY_LIMIT: usize = 5;

/// Cell force-initialized with the full registry before each attempt
pub const SEED_CELL: (usize, usize) = (1, 1);

/// Extra steps allowed beyond the analytic per-attempt bound
pub const STEP_LIMIT_SLACK: usize = 16;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 16;

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 16;

/// Default cap on full regenerations before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

// Output settings
/// Side length of one cell in exported images, in pixels
pub const PIXELS_PER_CELL: u32 = 8;

/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_grid";
