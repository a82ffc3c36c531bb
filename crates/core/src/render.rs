//! Boundary contract for rendering collaborators
//!
//! Renderers receive a read-only snapshot after every step together with the
//! categorical scale from [`CellState::category`]. They never see a grid that is
//! still being written.

use crate::cell::CellState;
use crate::grid::Grid;

/// Whether the driver should keep stepping after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Receiver of grid snapshots
pub trait FrameSink {
    /// Present the grid produced by step `step` (step 0 is the initial grid)
    fn present(&mut self, step: u64, grid: &Grid) -> Flow;
}

impl<F> FrameSink for F
where
    F: FnMut(u64, &Grid) -> Flow,
{
    fn present(&mut self, step: u64, grid: &Grid) -> Flow {
        self(step, grid)
    }
}

/// Character used for each cell state in text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: char,
    pub tree: char,
    pub burning: char,
}

impl Glyphs {
    /// Plain ASCII glyphs
    pub const ASCII: Glyphs = Glyphs {
        empty: '.',
        tree: 'T',
        burning: '*',
    };

    pub fn glyph(&self, state: CellState) -> char {
        match state {
            CellState::Empty => self.empty,
            CellState::Tree => self.tree,
            CellState::Burning => self.burning,
        }
    }

    /// One line per grid row, rows separated by `\n`
    pub fn render_text(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity(grid.len() + grid.height());
        for (i, row) in grid.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|&state| self.glyph(state)));
        }
        out
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::ASCII
    }
}
