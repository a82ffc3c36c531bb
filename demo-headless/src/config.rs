//! Driver configuration
//!
//! Precedence is reference defaults, then the TOML file, then CLI flags.

use anyhow::{Context, Result};
use forest_fire_core::{ExecutionMode, SimulationParams};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Everything the driver needs for one run
///
/// ```toml
/// steps = 100
/// frame_interval_ms = 200
/// mode = "parallel"
/// render = true
///
/// [simulation]
/// grid_size = 50
/// p_grow = 0.05
/// p_ignite = 0.001
/// initial_tree_density = 0.6
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    pub simulation: SimulationParams,
    /// Number of steps to run
    pub steps: u64,
    /// Delay between rendered frames
    pub frame_interval_ms: u64,
    pub mode: ExecutionMode,
    /// Draw frames to the terminal; when false only per-step statistics are logged
    pub render: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationParams::default(),
            steps: 100,
            frame_interval_ms: 200,
            mode: ExecutionMode::Sequential,
            render: true,
        }
    }
}

impl DriverConfig {
    /// Load a config file, filling missing keys from the defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(DriverConfig::parse("").unwrap(), DriverConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = DriverConfig::parse(
            r#"
            steps = 10
            mode = "parallel"

            [simulation]
            p_grow = 0.2
            "#,
        )
        .unwrap();

        assert_eq!(config.steps, 10);
        assert_eq!(config.mode, ExecutionMode::Parallel);
        assert_eq!(config.simulation.p_grow, 0.2);
        assert_eq!(config.simulation.grid_size, 50);
        assert_eq!(config.frame_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(DriverConfig::parse("stepz = 3").is_err());
    }
}
