//! Forest Fire Core Library
//!
//! A cellular automaton model of wildfire spread on a discrete grid. Every cell is
//! empty, tree-covered or burning, and each step computes a brand new grid from the
//! previous one using only local Moore-neighborhood state plus two stochastic events:
//! tree growth on empty ground and lightning ignition of standing trees.
//!
//! ## Layout
//!
//! - [`grid`]: the cell-state buffer with bounds-checked neighbor queries
//! - [`engine`]: the transition rule, sequential and row-parallel
//! - [`random`]: injectable uniform random sources
//! - [`simulation`]: owner of the current grid that performs step replacement
//! - [`render`]: boundary contract for rendering collaborators

pub mod cell;
pub mod engine;
pub mod error;
pub mod grid;
pub mod params;
pub mod random;
pub mod render;
pub mod simulation;

pub use cell::CellState;
pub use engine::{next_state, step, step_parallel, ExecutionMode, TransitionEngine};
pub use error::ConfigError;
pub use grid::{Census, Grid, MOORE_OFFSETS};
pub use params::SimulationParams;
pub use random::{ConstantSource, RandomSource, RngSource, SequenceSource};
pub use render::{Flow, FrameSink, Glyphs};
pub use simulation::ForestFire;
