//! Attempt orchestration: minimum-entropy collapse with restart on failure
//!
//! Repeatedly picks one of the lowest-entropy cells at random, collapses it,
//! and propagates. A contradiction discards the whole grid and starts a fresh
//! attempt; there is no partial backtracking. Each attempt either completes
//! or is thrown away, so the generator only ever reports success or a
//! configuration failure.

use crate::algorithm::propagation::{Frontier, propagate};
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::{AdjacencyTable, TileId, TileSet};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Generation parameters fixed for the lifetime of one generator
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Seed for the sequential random source
    pub seed: u64,
    /// Optional cap on restart attempts
    ///
    /// `None` preserves the unbounded Las Vegas behavior: attempts repeat
    /// until one succeeds.
    pub attempt_limit: Option<usize>,
}

impl GeneratorConfig {
    /// Create a config with the default seed and no attempt cap
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: DEFAULT_SEED,
            attempt_limit: None,
        }
    }
}

/// Phase of the generator state machine
///
/// `Collapsed` is the only terminal state; contradictions are absorbed by
/// restarting in `Attempting`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorState {
    /// An attempt is in flight; the grid may be partially collapsed
    Attempting,
    /// Every cell holds exactly one tile (terminal success)
    Collapsed,
}

/// Result of driving the generator one step forward
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One cell was collapsed and its constraints propagated cleanly
    Collapsed {
        /// Position of the collapsed cell
        position: [usize; 2],
        /// Tile the cell collapsed to
        tile: TileId,
    },
    /// Propagation hit a contradiction; the grid was discarded and rebuilt
    Restarted {
        /// Number of the attempt now starting
        attempt: usize,
    },
    /// The grid is fully collapsed
    Complete,
}

/// Drives grid collapse attempts to completion
///
/// Owns the grid, the adjacency configuration, and the single sequential
/// random source. Per collapse the source is consumed in a fixed order (one
/// tie-break draw, then one tile-choice draw), so a fixed seed reproduces an
/// identical run. Exactly one writer touches the grid during an attempt;
/// readers must wait for `Collapsed` or read only singleton cells.
pub struct Generator {
    tiles: TileSet,
    adjacency: AdjacencyTable,
    config: GeneratorConfig,
    grid: Grid,
    rng: StdRng,
    state: GeneratorState,
    attempts: usize,
}

impl Generator {
    /// Create a generator, validating all configuration up front
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidParameter` for unusable dimensions or
    /// an adjacency table that does not cover the alphabet,
    /// `GenerationError::EmptyTileSet` for an empty alphabet, and
    /// `GenerationError::EmptyAdjacencyRow` if any tile permits no neighbor.
    /// These are the only failures ever surfaced; contradictions during
    /// generation are handled internally.
    pub fn new(tiles: TileSet, adjacency: AdjacencyTable, config: GeneratorConfig) -> Result<Self> {
        adjacency.validate(tiles.len())?;
        let grid = Grid::new(config.width, config.height, tiles.len())?;

        Ok(Self {
            tiles,
            adjacency,
            config,
            grid,
            rng: StdRng::seed_from_u64(config.seed),
            state: GeneratorState::Attempting,
            attempts: 1,
        })
    }

    /// The tile alphabet this generator collapses over
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// The adjacency configuration in force
    pub const fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    /// The grid of the current attempt
    ///
    /// Safe to read between steps; only singleton cells are meaningful until
    /// the state is `Collapsed`.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current phase of the state machine
    pub const fn state(&self) -> GeneratorState {
        self.state
    }

    /// Number of attempts started so far, counting the one in flight
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Collapse one cell and propagate, restarting on contradiction
    ///
    /// Returns `Complete` once (and whenever) the grid is fully collapsed.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::AttemptLimitReached` only when an attempt
    /// cap was configured and a restart would exceed it.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.state == GeneratorState::Collapsed {
            return Ok(StepOutcome::Complete);
        }

        let candidates = self.grid.min_entropy_cells();
        if candidates.is_empty() {
            self.state = GeneratorState::Collapsed;
            return Ok(StepOutcome::Complete);
        }

        // Random tie-break rather than positional, to avoid directional bias.
        // The draw happens even for a single candidate so the stream stays in
        // lockstep across runs.
        let index = self.rng.random_range(0..candidates.len());
        let position = candidates.get(index).copied().unwrap_or([0, 0]);

        let Some(tile) = self.grid.collapse(position, &mut self.rng) else {
            // Unreachable while attempt invariants hold; treat as a
            // contradiction rather than trusting a corrupt domain.
            return self.restart();
        };

        let mut frontier = Frontier::seeded_with_neighbors(&self.grid, position);
        match propagate(&mut self.grid, &self.adjacency, &mut frontier) {
            Ok(()) => Ok(StepOutcome::Collapsed { position, tile }),
            Err(_) => self.restart(),
        }
    }

    /// Discard the in-flight attempt and start a fresh one
    ///
    /// Every cell's domain returns to the full alphabet. Callers may also use
    /// this to abandon a generation between steps.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::AttemptLimitReached` when a configured
    /// attempt cap would be exceeded.
    pub fn restart(&mut self) -> Result<StepOutcome> {
        if let Some(limit) = self.config.attempt_limit
            && self.attempts >= limit
        {
            return Err(GenerationError::AttemptLimitReached { limit });
        }
        self.attempts += 1;
        self.grid.reset();
        self.state = GeneratorState::Attempting;
        Ok(StepOutcome::Restarted {
            attempt: self.attempts,
        })
    }

    /// Step until the grid is fully collapsed
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::AttemptLimitReached` only when an attempt
    /// cap was configured; with the default unbounded configuration this
    /// loops until success.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if matches!(self.step()?, StepOutcome::Complete) {
                return Ok(());
            }
        }
    }

    /// Consume the generator and take its grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Generate a fully collapsed grid in one call
///
/// The sole entry point for callers that do not need stepwise control.
/// Retries internally until an attempt succeeds.
///
/// # Errors
///
/// Fails only on configuration problems: unusable dimensions, an empty tile
/// set, or an adjacency row mapping to the empty set.
pub fn generate(
    width: usize,
    height: usize,
    tiles: TileSet,
    adjacency: AdjacencyTable,
    seed: u64,
) -> Result<Grid> {
    let config = GeneratorConfig {
        width,
        height,
        seed,
        attempt_limit: None,
    };
    let mut generator = Generator::new(tiles, adjacency, config)?;
    generator.run()?;
    Ok(generator.into_grid())
}
