//! Core board types for tic-tac-toe.

use crate::error::IllegalMove;
use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// The X mark (moves first by convention).
    #[display("X")]
    X,
    /// The O mark.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark has been placed here.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are indexed 0-8 in row-major order (row = index / 3,
/// column = index % 3). A cell, once marked, is never cleared except
/// by replacing the whole board on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfRange`] if `index` is not 0-8, or
    /// [`IllegalMove::CellOccupied`] if the cell already holds a mark.
    /// The board is unchanged on error. Terminal-state rejection is the
    /// session's responsibility, not the board's.
    pub fn set(&mut self, index: usize, mark: Mark) -> Result<(), IllegalMove> {
        match self.cells.get(index) {
            None => Err(IllegalMove::OutOfRange(index)),
            Some(Cell::Occupied(_)) => Err(IllegalMove::CellOccupied(index)),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Checks whether the cell at `index` is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Iterates over the indices of empty cells in ascending order.
    ///
    /// The ordering is the tie-break for AI move selection, so it must
    /// stay deterministic. Each call returns a fresh iterator.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    ///
    /// This is the hypothetical-move primitive used by the AI: search
    /// explores value copies instead of mutating the live board. The
    /// index must come from [`Board::empty_indices`].
    pub fn child(&self, index: usize, mark: Mark) -> Self {
        let mut next = self.clone();
        next.cells[index] = Cell::Occupied(mark);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                f.write_fmt(format_args!("{symbol}"))?;
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
