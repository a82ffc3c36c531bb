//! Two-dimensional cell-state grid
//!
//! Owns the cell buffer and its dimensions and answers bounds-safe Moore-neighborhood
//! queries. Cells are stored in row-major order: `row * width + col`.

use crate::cell::CellState;
use crate::error::ConfigError;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// Relative `(row, col)` offsets of the 8 Moore neighbors, `(0, 0)` excluded
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Apply `delta` to `index` and return the result if it lands in `[0, len)`
///
/// Off-grid neighbors are simply absent: there is no wraparound and no reflection.
#[inline]
pub fn offset_within_bounds(index: usize, delta: isize, len: usize) -> Option<usize> {
    index.checked_add_signed(delta).filter(|&i| i < len)
}

/// Number of cells in each state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub empty: usize,
    pub tree: usize,
    pub burning: usize,
}

impl Census {
    /// Total number of cells counted
    pub fn total(&self) -> usize {
        self.empty + self.tree + self.burning
    }

    /// Count for a single state
    pub fn of(&self, state: CellState) -> usize {
        match state {
            CellState::Empty => self.empty,
            CellState::Tree => self.tree,
            CellState::Burning => self.burning,
        }
    }

    fn record(&mut self, state: CellState) {
        match state {
            CellState::Empty => self.empty += 1,
            CellState::Tree => self.tree += 1,
            CellState::Burning => self.burning += 1,
        }
    }
}

/// Fixed-size grid of cell states
///
/// Dimensions never change after construction. The transition engine treats a grid
/// as an immutable snapshot and always produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a `width` x `height` grid with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: CellState) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Create a square `size` x `size` grid with every cell set to `fill`
    pub fn square(size: usize, fill: CellState) -> Self {
        Self::new(size, size, fill)
    }

    /// Build a grid from nested rows
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyGrid`] when there are no rows or the rows are empty,
    /// and [`ConfigError::RaggedRows`] when the rows differ in length.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, ConfigError>
    where
        R: AsRef<[CellState]>,
    {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(ConfigError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Fresh grid where each cell is independently `Tree` with probability `p_tree`
    ///
    /// One draw is consumed per cell, in row-major order. There is no spatial
    /// correlation between cells.
    pub fn randomize(
        width: usize,
        height: usize,
        p_tree: f64,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let cells = (0..width * height)
            .map(|_| {
                if rng.next_unit() < p_tree {
                    CellState::Tree
                } else {
                    CellState::Empty
                }
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` in cells
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// State at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range. Internal traversal is clamped to the
    /// grid edges, so reaching this panic is a defect in the caller.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> CellState {
        assert!(
            self.contains(row, col),
            "Coordinates out of bounds: ({row}, {col}) on {}x{} grid",
            self.width,
            self.height
        );
        self.cells[self.index(row, col)]
    }

    /// State at `(row, col)`, or `None` when outside the grid
    pub fn try_get(&self, row: usize, col: usize) -> Option<CellState> {
        self.contains(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    /// Overwrite the state at `(row, col)`
    ///
    /// Only used while building a grid; a stepped grid is never mutated.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        assert!(
            self.contains(row, col),
            "Coordinates out of bounds: ({row}, {col}) on {}x{} grid",
            self.width,
            self.height
        );
        let idx = self.index(row, col);
        self.cells[idx] = state;
    }

    /// In-bounds Moore neighbors of `(row, col)` as `(row, col)` pairs
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        MOORE_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = offset_within_bounds(row, dr, self.height)?;
            let c = offset_within_bounds(col, dc, self.width)?;
            Some((r, c))
        })
    }

    /// Number of neighbors that exist: 3 at corners, 5 on edges, 8 inside
    pub fn neighbor_count(&self, row: usize, col: usize) -> usize {
        self.neighbors(row, col).count()
    }

    /// Whether at least one Moore neighbor of `(row, col)` is in `state`
    pub fn neighbors_in_state(&self, row: usize, col: usize, state: CellState) -> bool {
        self.neighbors(row, col)
            .any(|(r, c)| self.cells[self.index(r, c)] == state)
    }

    /// Cells in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterator over rows
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Count cells per state
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for &state in &self.cells {
            census.record(state);
        }
        census
    }

    /// Assemble a grid from a buffer produced by the transition engine
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }
}
