//! Transition engine
//!
//! Maps one grid snapshot to the next. Every read goes to the old grid and every
//! write lands in a separate output buffer, so the processing order of cells has no
//! effect on the result.
//!
//! # Rule
//!
//! ```text
//! Burning -> Empty                                   (no draw)
//! Tree    -> Burning  if burning neighbor || u < p_ignite
//! Empty   -> Tree     if u < p_grow
//! ```
//!
//! A tree consumes its lightning draw even when a neighbor is already burning, so
//! every `Tree` and `Empty` cell takes exactly one draw per step.

use crate::cell::CellState;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::params::SimulationParams;
use crate::random::{RandomSource, RngSource};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// How the engine walks the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Row-major on the calling thread, drawing from the injected source
    #[default]
    Sequential,
    /// Rows split across rayon workers, each drawing from its thread-local generator
    Parallel,
}

/// Pure per-cell rule
///
/// `burning_neighbor` is whether any Moore neighbor in the old grid is burning and
/// `draw` is a uniform sample in `[0, 1)`. The draw is ignored for burning cells.
#[inline]
pub fn next_state(
    current: CellState,
    burning_neighbor: bool,
    draw: f64,
    params: &SimulationParams,
) -> CellState {
    match current {
        CellState::Burning => CellState::Empty,
        CellState::Tree => {
            if burning_neighbor || draw < params.p_ignite {
                CellState::Burning
            } else {
                CellState::Tree
            }
        }
        CellState::Empty => {
            if draw < params.p_grow {
                CellState::Tree
            } else {
                CellState::Empty
            }
        }
    }
}

/// Evolve one cell of `old`, taking a draw only for trees and empty ground
#[inline]
fn evolve_cell(
    old: &Grid,
    row: usize,
    col: usize,
    params: &SimulationParams,
    rng: &mut dyn RandomSource,
) -> CellState {
    match old.get(row, col) {
        CellState::Burning => CellState::Empty,
        CellState::Tree => {
            let burning_neighbor = old.neighbors_in_state(row, col, CellState::Burning);
            next_state(CellState::Tree, burning_neighbor, rng.next_unit(), params)
        }
        CellState::Empty => next_state(CellState::Empty, false, rng.next_unit(), params),
    }
}

/// Fill `out` with the next states of row `row` of `old`
fn evolve_row(
    old: &Grid,
    row: usize,
    out: &mut [CellState],
    params: &SimulationParams,
    rng: &mut dyn RandomSource,
) {
    debug_assert_eq!(out.len(), old.width());
    for (col, cell) in out.iter_mut().enumerate() {
        *cell = evolve_cell(old, row, col, params, rng);
    }
}

/// Advance `grid` by one step on the calling thread
///
/// Cells are visited row by row, so with a deterministic source the output is fully
/// reproducible. The input grid is never modified.
pub fn step(grid: &Grid, params: &SimulationParams, rng: &mut dyn RandomSource) -> Grid {
    let (width, height) = grid.dimensions();
    let mut next = vec![CellState::Empty; width * height];

    if width > 0 {
        for (row, out) in next.chunks_mut(width).enumerate() {
            evolve_row(grid, row, out, params, rng);
        }
    }

    Grid::from_parts(width, height, next)
}

/// Advance `grid` by one step with rows evaluated in parallel
///
/// Workers only read `grid` and only write their own output row.
pub fn step_parallel(grid: &Grid, params: &SimulationParams) -> Grid {
    let (width, height) = grid.dimensions();
    let mut next = vec![CellState::Empty; width * height];

    if width > 0 {
        next.par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| {
                let mut rng = RngSource::thread();
                evolve_row(grid, row, out, params, &mut rng);
            });
    }

    Grid::from_parts(width, height, next)
}

/// Validated parameters bundled with an execution mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionEngine {
    params: SimulationParams,
    mode: ExecutionMode,
}

impl TransitionEngine {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `params` fail validation.
    pub fn new(params: SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            params,
            mode: ExecutionMode::default(),
        })
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Produce the grid that follows `grid`
    ///
    /// In [`ExecutionMode::Parallel`] the injected source is not consulted; each
    /// worker draws from its own thread-local generator.
    pub fn advance(&self, grid: &Grid, rng: &mut dyn RandomSource) -> Grid {
        match self.mode {
            ExecutionMode::Sequential => step(grid, &self.params, rng),
            ExecutionMode::Parallel => step_parallel(grid, &self.params),
        }
    }
}
