//! CLI entry point for the constrained grid-collapse terrain generator

use clap::Parser;
use wavegrid::io::cli::{Cli, GenerationRunner};

fn main() -> wavegrid::Result<()> {
    let cli = Cli::parse();
    let mut runner = GenerationRunner::new(cli);
    runner.process()
}
