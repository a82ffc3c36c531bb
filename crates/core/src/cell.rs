//! Cell state of a single grid position

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// State of a single grid cell
///
/// There are no hidden sub-states: a burning cell is always extinguished after
/// exactly one step, with no fuel or intensity bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Bare ground, may sprout a tree
    #[default]
    Empty = 0,
    /// Standing tree, may ignite
    Tree = 1,
    /// Burning tree, becomes empty next step
    Burning = 2,
}

impl CellState {
    /// All states in categorical order
    pub const ALL: [CellState; 3] = [CellState::Empty, CellState::Tree, CellState::Burning];

    /// Categorical index used for color mapping (`Empty`=0, `Tree`=1, `Burning`=2)
    #[inline]
    pub const fn category(self) -> u8 {
        self as u8
    }

    /// Build a state from its categorical index
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCellIndex`] for any index other than 0, 1 or 2.
    pub fn from_category(index: u8) -> Result<Self, ConfigError> {
        match index {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::Tree),
            2 => Ok(CellState::Burning),
            other => Err(ConfigError::InvalidCellIndex(other)),
        }
    }

    #[inline]
    pub const fn is_burning(self) -> bool {
        matches!(self, CellState::Burning)
    }
}

impl TryFrom<u8> for CellState {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_category(value)
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state.category()
    }
}
