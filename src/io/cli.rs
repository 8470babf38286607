//! Command-line interface for generating grids from module catalog files

use crate::algorithm::solver::{GeneratedGrid, Generator, SolverConfig};
use crate::io::catalog::load_definitions;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED, DEFAULT_WIDTH, OUTPUT_SUFFIX,
};
use crate::io::error::{GenerationError, Result};
use crate::io::image::{export_grid_as_png, module_palette};
use crate::io::progress::AttemptProgress;
use crate::spatial::modules::ModuleRegistry;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "socketgrid")]
#[command(
    author,
    version,
    about = "Generate a socket-constrained tile grid from a module catalog"
)]
/// Command-line arguments for the grid generation tool
pub struct Cli {
    /// Module catalog file (one module per line: identity and 4 socket codes)
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum full regenerations before giving up
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Output PNG path (defaults to <catalog stem>_grid.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the solved grid as module identities
    #[arg(short, long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates catalog loading, generation, and export for one run
pub struct GridProcessor {
    cli: Cli,
}

impl GridProcessor {
    /// Create a processor from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the catalog, generate a grid, and export the results
    ///
    /// # Errors
    ///
    /// Returns an error if catalog loading, generation, or export fails
    pub fn run(&self) -> Result<()> {
        let definitions = load_definitions(&self.cli.catalog)?;
        let registry = ModuleRegistry::load(definitions)?;

        let config = SolverConfig::new(self.cli.height, self.cli.width, self.cli.attempts);
        let mut generator = Generator::new(&registry, config, self.cli.seed)?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| AttemptProgress::new(self.cli.attempts));

        let mut solved = None;
        for attempt in 1..=self.cli.attempts {
            if let Some(ref bar) = progress {
                bar.update(attempt, generator.total_backtracks());
            }
            if let Some(result) = generator.execute_attempt()? {
                solved = Some(result);
                break;
            }
        }

        let Some(result) = solved else {
            if let Some(ref bar) = progress {
                bar.finish_failed();
            }
            return Err(GenerationError::GenerationFailed {
                attempts: generator.attempts_run(),
            });
        };

        if let Some(ref bar) = progress {
            bar.finish_solved(result.attempts);
        }

        let palette = module_palette(registry.len());
        let output_path = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| Self::default_output_path(&self.cli.catalog));
        export_grid_as_png(
            &result,
            &palette,
            output_path
                .to_str()
                .ok_or_else(|| crate::io::error::invalid_parameter(
                    "output",
                    &output_path.display(),
                    &"output path is not valid UTF-8",
                ))?,
        )?;

        if self.cli.print {
            Self::print_grid(&result);
        }

        Ok(())
    }

    // Allow print for the user-requested grid dump
    #[allow(clippy::print_stdout)]
    fn print_grid(result: &GeneratedGrid) {
        for row in 0..result.rows {
            let line: Vec<&str> = result
                .placements
                .iter()
                .filter(|placement| placement.row == row)
                .map(|placement| placement.identity.as_str())
                .collect();
            println!("{}", line.join(" "));
        }
    }

    fn default_output_path(catalog_path: &Path) -> PathBuf {
        let stem = catalog_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = catalog_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
