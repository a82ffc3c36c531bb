//! Simulation owner
//!
//! `ForestFire` holds the sole reference to the current grid. Each step asks the
//! transition engine for a fresh grid and swaps it in only after the engine returns,
//! so nothing ever observes a half-built step.

use crate::engine::{ExecutionMode, TransitionEngine};
use crate::error::ConfigError;
use crate::grid::{Census, Grid};
use crate::params::SimulationParams;
use crate::random::{RandomSource, RngSource};
use crate::render::{Flow, FrameSink};
use tracing::{debug, info};

/// Forest fire run: current grid, parameters and random source
pub struct ForestFire {
    engine: TransitionEngine,
    grid: Grid,
    rng: Box<dyn RandomSource>,
    step_count: u64,
}

impl ForestFire {
    /// Create a run with a randomized initial grid
    ///
    /// Each cell starts as a tree with probability `params.initial_tree_density`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `params` fail validation.
    pub fn new(params: SimulationParams) -> Result<Self, ConfigError> {
        let engine = TransitionEngine::new(params)?;
        let mut rng: Box<dyn RandomSource> = Box::new(RngSource::thread());
        let grid = Grid::randomize(
            params.grid_size,
            params.grid_size,
            params.initial_tree_density,
            &mut rng,
        );

        let census = grid.census();
        info!(
            "Created forest fire simulation: {}x{} grid, p_grow={}, p_ignite={}, trees={}",
            params.grid_size, params.grid_size, params.p_grow, params.p_ignite, census.tree
        );

        Ok(Self {
            engine,
            grid,
            rng,
            step_count: 0,
        })
    }

    /// Create a run from an explicit initial grid and random source
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `params` fail validation or the grid is not
    /// `grid_size` x `grid_size`.
    pub fn with_grid(
        params: SimulationParams,
        grid: Grid,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        let engine = TransitionEngine::new(params)?;
        let (width, height) = grid.dimensions();
        if width != params.grid_size || height != params.grid_size {
            return Err(ConfigError::DimensionMismatch {
                size: params.grid_size,
                width,
                height,
            });
        }

        Ok(Self {
            engine,
            grid,
            rng,
            step_count: 0,
        })
    }

    /// Switch between sequential and row-parallel stepping
    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.engine = self.engine.with_mode(mode);
        self
    }

    /// Advance one step and return the new current grid
    pub fn advance(&mut self) -> &Grid {
        let next = self.engine.advance(&self.grid, &mut self.rng);
        self.grid = next;
        self.step_count += 1;

        let census = self.grid.census();
        debug!(
            "Step {}: empty={}, tree={}, burning={}",
            self.step_count, census.empty, census.tree, census.burning
        );

        &self.grid
    }

    /// Advance up to `steps` times, presenting each new grid to `sink`
    ///
    /// Stops early when the sink returns [`Flow::Stop`]. Returns the number of steps
    /// actually taken.
    pub fn run(&mut self, steps: u64, sink: &mut dyn FrameSink) -> u64 {
        let mut taken = 0;
        while taken < steps {
            self.advance();
            taken += 1;
            if sink.present(self.step_count, &self.grid) == Flow::Stop {
                info!("Run stopped by frame sink after {} steps", taken);
                break;
            }
        }
        taken
    }

    /// Current grid snapshot
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn params(&self) -> &SimulationParams {
        self.engine.params()
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.engine.mode()
    }

    /// Number of steps taken so far
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn census(&self) -> Census {
        self.grid.census()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;
    use crate::random::ConstantSource;

    #[test]
    fn test_new_builds_square_grid() {
        let params = SimulationParams::new(12, 0.05, 0.001).unwrap();
        let sim = ForestFire::new(params).unwrap();
        assert_eq!(sim.grid().dimensions(), (12, 12));
        assert_eq!(sim.step_count(), 0);
        assert_eq!(sim.census().burning, 0);
    }

    #[test]
    fn test_new_rejects_bad_params() {
        let params = SimulationParams {
            grid_size: 0,
            ..SimulationParams::default()
        };
        assert!(ForestFire::new(params).is_err());
    }

    #[test]
    fn test_with_grid_checks_dimensions() {
        let params = SimulationParams::new(4, 0.0, 0.0).unwrap();
        let result = ForestFire::with_grid(
            params,
            Grid::new(4, 3, CellState::Empty),
            Box::new(ConstantSource::new(0.0)),
        );
        assert!(matches!(
            result,
            Err(ConfigError::DimensionMismatch {
                size: 4,
                width: 4,
                height: 3
            })
        ));
    }

    #[test]
    fn test_advance_replaces_grid() {
        let params = SimulationParams::new(3, 1.0, 0.0).unwrap();
        let mut sim = ForestFire::with_grid(
            params,
            Grid::square(3, CellState::Empty),
            Box::new(ConstantSource::new(0.0)),
        )
        .unwrap();

        let after = sim.advance().census();
        assert_eq!(after.tree, 9);
        assert_eq!(sim.step_count(), 1);
    }

    #[test]
    fn test_run_stops_when_sink_asks() {
        let params = SimulationParams::new(3, 0.0, 0.0).unwrap();
        let mut sim = ForestFire::with_grid(
            params,
            Grid::square(3, CellState::Empty),
            Box::new(ConstantSource::new(0.0)),
        )
        .unwrap()
        .with_execution_mode(ExecutionMode::Parallel);
        assert_eq!(sim.execution_mode(), ExecutionMode::Parallel);

        let mut frames = Vec::new();
        let mut sink = |step: u64, _grid: &Grid| {
            frames.push(step);
            if step == 3 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        };
        let taken = sim.run(10, &mut sink);
        assert_eq!(taken, 3);
        assert_eq!(frames, vec![1, 2, 3]);
        assert_eq!(sim.step_count(), 3);
    }
}
