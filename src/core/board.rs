//! The 3x3 board: cells, indices, and winning-line geometry.
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::error::MoveError;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Three cell indices that win the game when uniformly marked.
pub type Line = [usize; 3];

/// The eight winning lines: three rows, three columns, two diagonals.
///
/// Win evaluation reports the first matching line in this order, so the
/// result is deterministic even if several lines complete at once.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One board position's occupancy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Symbol),
}

impl Cell {
    /// Check whether the cell is unoccupied.
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check whether the cell holds the given symbol.
    #[must_use]
    pub fn is_marked_by(self, symbol: Symbol) -> bool {
        self == Cell::Marked(symbol)
    }

    /// The occupying symbol, if any.
    #[must_use]
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }
}

/// A validated cell index in `0..9`.
///
/// Display adapters deal in raw integers (possibly negative); construction
/// is fallible so out-of-range input surfaces as
/// [`MoveError::InvalidCell`] instead of a panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct CellIndex(u8);

impl CellIndex {
    /// Create a cell index, rejecting values outside `0..9`.
    pub fn new(index: usize) -> Result<Self, MoveError> {
        if index < BOARD_CELLS {
            Ok(Self(index as u8))
        } else {
            Err(MoveError::InvalidCell)
        }
    }

    /// The raw index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this cell (0-2).
    #[must_use]
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this cell (0-2).
    #[must_use]
    pub fn col(self) -> usize {
        self.index() % 3
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl TryFrom<i64> for CellIndex {
    type Error = MoveError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .map_err(|_| MoveError::InvalidCell)
            .and_then(Self::new)
    }
}

impl From<CellIndex> for usize {
    fn from(index: CellIndex) -> usize {
        index.index()
    }
}

/// The nine cells, row-major.
///
/// Occupied cells never revert to `Empty`; the engine replaces the whole
/// board on reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A fresh board of nine empty cells.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Read one cell.
    #[must_use]
    pub fn cell(&self, index: CellIndex) -> Cell {
        self.cells[index.index()]
    }

    /// Read one cell by raw index. Out-of-range reads as `Empty`.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Cell {
        self.cells.get(index).copied().unwrap_or(Cell::Empty)
    }

    /// Iterate over all cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Mark a cell. The engine validates occupancy before calling this.
    pub(crate) fn mark(&mut self, index: CellIndex, symbol: Symbol) {
        self.cells[index.index()] = Cell::Marked(symbol);
    }
}
