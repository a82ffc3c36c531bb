//! Simulation parameters
//!
//! Fixed for the lifetime of a run. Defaults reproduce the reference configuration:
//! a 50x50 grid, 5% growth, 0.1% lightning and 60% initial tree cover.

use crate::error::{check_probability, ConfigError};
use serde::{Deserialize, Serialize};

/// Parameters of a forest fire run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Side length of the square grid (cells)
    pub grid_size: usize,
    /// Chance an empty cell sprouts a tree each step
    pub p_grow: f64,
    /// Chance a tree ignites each step without a burning neighbor
    pub p_ignite: f64,
    /// Chance each cell starts as a tree
    pub initial_tree_density: f64,
}

impl SimulationParams {
    pub const DEFAULT_GRID_SIZE: usize = 50;
    pub const DEFAULT_P_GROW: f64 = 0.05;
    pub const DEFAULT_P_IGNITE: f64 = 0.001;
    pub const DEFAULT_TREE_DENSITY: f64 = 0.6;

    /// Create validated parameters with the reference initial tree density
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `grid_size` is zero or a probability is outside [0, 1].
    pub fn new(grid_size: usize, p_grow: f64, p_ignite: f64) -> Result<Self, ConfigError> {
        let params = Self {
            grid_size,
            p_grow,
            p_ignite,
            initial_tree_density: Self::DEFAULT_TREE_DENSITY,
        };
        params.validate()?;
        Ok(params)
    }

    /// Replace the initial tree density
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ProbabilityOutOfRange`] if `density` is outside [0, 1].
    pub fn with_initial_tree_density(mut self, density: f64) -> Result<Self, ConfigError> {
        self.initial_tree_density = check_probability("initial_tree_density", density)?;
        Ok(self)
    }

    /// Reject out-of-range values without clamping
    ///
    /// Needed for values that bypassed [`SimulationParams::new`], such as a
    /// deserialized config file.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::NonPositiveGridSize(self.grid_size));
        }
        check_probability("p_grow", self.p_grow)?;
        check_probability("p_ignite", self.p_ignite)?;
        check_probability("initial_tree_density", self.initial_tree_density)?;
        Ok(())
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            p_grow: Self::DEFAULT_P_GROW,
            p_ignite: Self::DEFAULT_P_IGNITE,
            initial_tree_density: Self::DEFAULT_TREE_DENSITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_configuration() {
        let params = SimulationParams::default();
        assert_eq!(params.grid_size, 50);
        assert_eq!(params.p_grow, 0.05);
        assert_eq!(params.p_ignite, 0.001);
        assert_eq!(params.initial_tree_density, 0.6);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_grid_size() {
        assert_eq!(
            SimulationParams::new(0, 0.1, 0.1),
            Err(ConfigError::NonPositiveGridSize(0))
        );
    }

    #[test]
    fn test_rejects_out_of_range_probabilities() {
        assert!(matches!(
            SimulationParams::new(10, 1.5, 0.1),
            Err(ConfigError::ProbabilityOutOfRange { name: "p_grow", .. })
        ));
        assert!(matches!(
            SimulationParams::new(10, 0.1, -0.2),
            Err(ConfigError::ProbabilityOutOfRange { name: "p_ignite", .. })
        ));
        assert!(matches!(
            SimulationParams::new(10, f64::NAN, 0.1),
            Err(ConfigError::ProbabilityOutOfRange { name: "p_grow", .. })
        ));
    }

    #[test]
    fn test_initial_density() {
        let params = SimulationParams::new(10, 0.0, 0.0)
            .unwrap()
            .with_initial_tree_density(0.25)
            .unwrap();
        assert_eq!(params.initial_tree_density, 0.25);

        assert!(SimulationParams::default()
            .with_initial_tree_density(2.0)
            .is_err());
    }

    #[test]
    fn test_validate_catches_direct_construction() {
        let params = SimulationParams {
            p_ignite: 3.0,
            ..SimulationParams::default()
        };
        assert!(params.validate().is_err());
    }
}
