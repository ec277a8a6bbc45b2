//! Command-line interface for generating and exporting terrain grids

use crate::algorithm::generator::{Generator, GeneratorConfig, StepOutcome};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SEED, TERRAIN_COLORS,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressDisplay;
use crate::spatial::tiles::{AdjacencyTable, TileSet};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "wavegrid")]
#[command(
    author,
    version,
    about = "Generate terrain grids by constrained collapse"
)]
/// Command-line arguments for the terrain generation tool
pub struct Cli {
    /// Output PNG file (run index is appended when generating several grids)
    #[arg(value_name = "OUTPUT", default_value = "terrain.png")]
    pub output: PathBuf,

    /// Grid width in cells
    #[arg(short, long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of grids to generate, from consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Edge length of one rendered cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Cap on restart attempts per grid (unbounded when omitted)
    #[arg(short, long)]
    pub attempt_limit: Option<usize>,

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

/// Orchestrates one or more generation runs with progress tracking
pub struct GenerationRunner {
    cli: Cli,
}

impl GenerationRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate and export every requested grid
    ///
    /// Run `n` uses seed `seed + n` so a batch is reproducible from its base
    /// seed alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is rejected, a configured
    /// attempt cap is exhausted, or a PNG cannot be written.
    pub fn process(&mut self) -> Result<()> {
        for run_index in 0..self.cli.count {
            self.process_run(run_index)?;
        }
        Ok(())
    }

    fn process_run(&self, run_index: usize) -> Result<()> {
        let config = GeneratorConfig {
            width: self.cli.width,
            height: self.cli.height,
            seed: self.cli.seed + run_index as u64,
            attempt_limit: self.cli.attempt_limit,
        };

        let mut generator =
            Generator::new(TileSet::terrain(), AdjacencyTable::terrain(), config)?;

        let total_cells = (self.cli.width * self.cli.height) as u64;
        let progress = self.cli.should_show_progress().then(|| {
            ProgressDisplay::new(&format!("seed {}", config.seed), total_cells)
        });

        loop {
            match generator.step()? {
                StepOutcome::Collapsed { .. } => {
                    if let Some(ref bar) = progress {
                        bar.update(generator.grid().collapsed_count());
                    }
                }
                StepOutcome::Restarted { attempt } => {
                    if let Some(ref bar) = progress {
                        bar.restart(attempt);
                    }
                }
                StepOutcome::Complete => break,
            }
        }

        let output_path = self.output_path(run_index);
        export_grid_as_png(
            generator.grid(),
            &TERRAIN_COLORS,
            self.cli.cell_size,
            &output_path,
        )?;

        if let Some(ref bar) = progress {
            bar.println(&format!(
                "Wrote {} ({} attempt{})",
                output_path.display(),
                generator.attempts(),
                if generator.attempts() == 1 { "" } else { "s" }
            ));
            bar.finish();
        }

        Ok(())
    }

    fn output_path(&self, run_index: usize) -> PathBuf {
        if self.cli.count <= 1 {
            return self.cli.output.clone();
        }
        Self::indexed_path(&self.cli.output, run_index)
    }

    fn indexed_path(base: &Path, run_index: usize) -> PathBuf {
        let stem = base.file_stem().unwrap_or_default();
        let extension = base.extension().unwrap_or_default();
        let name = format!(
            "{}_{run_index}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        );
        base.with_file_name(name)
    }
}
