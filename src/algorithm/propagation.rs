//! Constraint propagation over the 4-connected cell graph
//!
//! After a collapse, neighboring domains are re-derived until a fixed point
//! or a contradiction. Each re-derivation intersects a cell's domain with the
//! permitted-neighbor sets of its already-singleton neighbors; a strict
//! shrink re-enqueues the cell's own neighbors so the narrowing cascades.

use crate::spatial::grid::Grid;
use crate::spatial::tiles::AdjacencyTable;
use std::fmt;

/// A cell's domain became empty during propagation
///
/// The in-flight grid is invalid and must be discarded wholesale; partial
/// repair is never attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contradiction {
    /// Position whose domain emptied
    pub position: [usize; 2],
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "contradiction at [{}, {}]: no tile satisfies the neighbors",
            self.position[0], self.position[1]
        )
    }
}

/// Worklist of positions awaiting constraint re-evaluation
///
/// Owned by a single `propagate` invocation; empty at the start and at every
/// successful end. Processing order only affects which of several equal-size
/// fixed points is reached, never correctness.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    stack: Vec<[usize; 2]>,
}

impl Frontier {
    /// Create an empty frontier
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Create a frontier seeded with the in-bounds neighbors of `pos`
    ///
    /// This is the collapse step's obligation: the collapsed cell itself
    /// needs no re-derivation since its domain is now fixed, but its
    /// neighbors must be re-checked against the chosen tile.
    pub fn seeded_with_neighbors(grid: &Grid, pos: [usize; 2]) -> Self {
        Self {
            stack: grid.neighbors(pos).collect(),
        }
    }

    /// Enqueue a position for re-evaluation
    pub fn push(&mut self, pos: [usize; 2]) {
        self.stack.push(pos);
    }

    /// Remove and return the most recently enqueued position
    pub fn pop(&mut self) -> Option<[usize; 2]> {
        self.stack.pop()
    }

    /// Test if no positions remain
    pub const fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of pending positions
    pub const fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Shrink domains from the frontier until a fixed point or a contradiction
///
/// For each popped non-singleton position, the candidate domain is the
/// intersection of its previous domain with `allowed(tile)` for every
/// already-singleton neighbor. Singletons are skipped outright: the collapse
/// that fixed them already seeded their neighbors. Terminates in at most
/// (cells × tiles) shrinks since every committed update is a strict shrink
/// and domain sizes are bounded below by one.
///
/// # Errors
///
/// Returns `Contradiction` the moment any candidate domain is empty; the
/// grid must then be discarded by the caller.
pub fn propagate(
    grid: &mut Grid,
    adjacency: &AdjacencyTable,
    frontier: &mut Frontier,
) -> Result<(), Contradiction> {
    while let Some(pos) = frontier.pop() {
        let Some(current) = grid.domain(pos) else {
            continue;
        };
        if current.is_singleton() {
            continue;
        }

        let previous_entropy = current.len();
        let mut narrowed = current.clone();
        for neighbor in grid.neighbors(pos) {
            let Some(tile) = grid.tile(neighbor) else {
                continue;
            };
            let Some(allowed) = adjacency.allowed(tile) else {
                continue;
            };
            narrowed.intersect_with(allowed);
        }

        if narrowed.is_empty() {
            return Err(Contradiction { position: pos });
        }

        if narrowed.len() < previous_entropy {
            grid.set_domain(pos, narrowed);
            for neighbor in grid.neighbors(pos) {
                frontier.push(neighbor);
            }
        }
    }

    Ok(())
}
