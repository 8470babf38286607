//! CLI entry point for socket-constrained grid generation

use clap::Parser;
use socketgrid::io::cli::{Cli, GridProcessor};

fn main() -> socketgrid::Result<()> {
    let cli = Cli::parse();
    let processor = GridProcessor::new(cli);
    processor.run()
}
