//! Frame sinks for the terminal

use forest_fire_core::{Flow, FrameSink, Glyphs, Grid};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

/// Redraws the whole grid in place at a fixed cadence
pub struct TerminalRenderer<W: Write> {
    out: W,
    glyphs: Glyphs,
    interval: Duration,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(interval: Duration) -> Self {
        Self::new(io::stdout(), interval)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, interval: Duration) -> Self {
        Self {
            out,
            glyphs: Glyphs::ASCII,
            interval,
        }
    }

    fn draw(&mut self, step: u64, grid: &Grid) -> io::Result<()> {
        let census = grid.census();
        // Clear screen and home the cursor
        write!(self.out, "\x1b[2J\x1b[H")?;
        writeln!(self.out, "{}", self.glyphs.render_text(grid))?;
        writeln!(
            self.out,
            "step {step:>4}  trees {:>5}  burning {:>5}  empty {:>5}",
            census.tree, census.burning, census.empty
        )?;
        self.out.flush()
    }
}

impl<W: Write> FrameSink for TerminalRenderer<W> {
    fn present(&mut self, step: u64, grid: &Grid) -> Flow {
        if let Err(e) = self.draw(step, grid) {
            // Closed pipe or terminal: nothing left to render to
            warn!("Stopping run, failed to write frame {}: {}", step, e);
            return Flow::Stop;
        }
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        Flow::Continue
    }
}

/// Logs per-step statistics instead of drawing
#[derive(Debug, Default)]
pub struct CensusLog;

impl FrameSink for CensusLog {
    fn present(&mut self, step: u64, grid: &Grid) -> Flow {
        let census = grid.census();
        info!(
            "Step {}: trees={}, burning={}, empty={}",
            step, census.tree, census.burning, census.empty
        );
        Flow::Continue
    }
}
