use anyhow::Result;
use clap::Parser;
use forest_fire_core::{ExecutionMode, Flow, ForestFire, FrameSink};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod renderer;

use config::DriverConfig;
use renderer::{CensusLog, TerminalRenderer};

/// Forest fire cellular automaton in the terminal
#[derive(Parser, Debug)]
#[command(name = "forest-fire")]
#[command(about = "Forest fire cellular automaton demo", long_about = None)]
struct Args {
    /// TOML config file; flags given on the command line override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Side length of the square grid in cells
    #[arg(short, long)]
    grid_size: Option<usize>,

    /// Probability an empty cell grows a tree each step
    #[arg(long)]
    p_grow: Option<f64>,

    /// Probability a tree is struck by lightning each step
    #[arg(long)]
    p_ignite: Option<f64>,

    /// Probability each cell starts as a tree
    #[arg(long)]
    tree_density: Option<f64>,

    /// Number of steps to run
    #[arg(short, long)]
    steps: Option<u64>,

    /// Delay between frames in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Evaluate grid rows in parallel
    #[arg(long)]
    parallel: bool,

    /// Log statistics only, without drawing frames
    #[arg(long)]
    no_render: bool,
}

impl Args {
    fn resolve(&self) -> Result<DriverConfig> {
        let mut config = match &self.config {
            Some(path) => DriverConfig::load(path)?,
            None => DriverConfig::default(),
        };

        if let Some(size) = self.grid_size {
            config.simulation.grid_size = size;
        }
        if let Some(p) = self.p_grow {
            config.simulation.p_grow = p;
        }
        if let Some(p) = self.p_ignite {
            config.simulation.p_ignite = p;
        }
        if let Some(p) = self.tree_density {
            config.simulation.initial_tree_density = p;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(ms) = self.interval_ms {
            config.frame_interval_ms = ms;
        }
        if self.parallel {
            config.mode = ExecutionMode::Parallel;
        }
        if self.no_render {
            config.render = false;
        }

        config.simulation.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().resolve()?;
    info!(
        "Running {} steps ({:?}, {} ms/frame)",
        config.steps, config.mode, config.frame_interval_ms
    );

    let mut sim = ForestFire::new(config.simulation)?.with_execution_mode(config.mode);

    let mut sink: Box<dyn FrameSink> = if config.render {
        Box::new(TerminalRenderer::stdout(config.frame_interval()))
    } else {
        Box::new(CensusLog)
    };

    let taken = match sink.present(sim.step_count(), sim.grid()) {
        Flow::Continue => sim.run(config.steps, sink.as_mut()),
        Flow::Stop => 0,
    };

    let census = sim.census();
    info!(
        "Finished after {} steps: trees={}, burning={}, empty={}",
        taken, census.tree, census.burning, census.empty
    );
    Ok(())
}
