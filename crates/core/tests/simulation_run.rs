//! End-to-end runs of the simulation owner with free-running randomness

use ctor::ctor;
use forest_fire_core::{
    CellState, ConstantSource, ExecutionMode, Flow, ForestFire, Grid, SimulationParams,
};

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Check every cell transition between two consecutive frames
fn assert_legal_transition(old: &Grid, new: &Grid) {
    assert_eq!(old.dimensions(), new.dimensions());
    let (width, height) = old.dimensions();
    for row in 0..height {
        for col in 0..width {
            let before = old.get(row, col);
            let after = new.get(row, col);
            match before {
                CellState::Burning => assert_eq!(after, CellState::Empty),
                CellState::Tree => {
                    assert_ne!(after, CellState::Empty);
                    if old.neighbors_in_state(row, col, CellState::Burning) {
                        assert_eq!(after, CellState::Burning);
                    }
                }
                CellState::Empty => assert_ne!(after, CellState::Burning),
            }
        }
    }
}

fn run_reference(mode: ExecutionMode) {
    let mut sim = ForestFire::new(SimulationParams::default())
        .unwrap()
        .with_execution_mode(mode);
    let mut previous = sim.grid().clone();
    let mut frames = 0_u64;

    let taken = sim.run(100, &mut |step: u64, grid: &Grid| {
        frames += 1;
        assert_eq!(step, frames);
        assert_eq!(grid.dimensions(), (50, 50));
        assert_legal_transition(&previous, grid);
        previous = grid.clone();
        Flow::Continue
    });

    assert_eq!(taken, 100);
    assert_eq!(frames, 100);
    assert_eq!(sim.step_count(), 100);
    assert_eq!(sim.census().total(), 2500);
}

#[test]
fn test_reference_run_sequential() {
    run_reference(ExecutionMode::Sequential);
}

#[test]
fn test_reference_run_parallel() {
    run_reference(ExecutionMode::Parallel);
}

#[test]
fn test_fire_burns_out_without_regrowth() {
    // No growth and no lightning: a single fire front sweeps the forest and dies out
    let params = SimulationParams::new(9, 0.0, 0.0).unwrap();
    let mut grid = Grid::square(9, CellState::Tree);
    grid.set(4, 4, CellState::Burning);
    let mut sim =
        ForestFire::with_grid(params, grid, Box::new(ConstantSource::never())).unwrap();

    // Front reaches the corners after 4 steps and is extinguished after 5
    for _ in 0..5 {
        sim.advance();
    }
    let census = sim.census();
    assert_eq!(census.burning, 0);
    assert_eq!(census.tree, 0);
    assert_eq!(census.empty, 81);

    sim.advance();
    assert_eq!(sim.census().empty, 81);
}

#[test]
fn test_front_expands_one_ring_per_step() {
    let params = SimulationParams::new(9, 0.0, 0.0).unwrap();
    let mut grid = Grid::square(9, CellState::Tree);
    grid.set(4, 4, CellState::Burning);
    let mut sim =
        ForestFire::with_grid(params, grid, Box::new(ConstantSource::never())).unwrap();

    // Ring k of the Chebyshev distance has 8k cells
    for ring in 1..=4_usize {
        let census = sim.advance().census();
        assert_eq!(census.burning, 8 * ring, "step {ring}");
    }
}
