//! Game rules for tic-tac-toe.
//!
//! Pure functions for classifying a board. Rules are separated from
//! board storage so the live session and the AI search share one
//! evaluator; `evaluate` runs thousands of times per minimax move.

use crate::board::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// A winning line: three cell indices.
pub type Line = [usize; 3];

/// The eight winning lines, in fixed scan order: rows, columns,
/// diagonals. The order matters for determinism when evaluating
/// hand-constructed boards.
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

/// Terminal/non-terminal classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still live.
    InProgress,
    /// One mark completed a line.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line, for UI highlighting.
        line: Line,
    },
    /// Full board, no completed line.
    Draw,
}

impl Outcome {
    /// Checks whether this outcome ends the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Classifies a board as won, drawn, or still in progress.
///
/// Scans [`LINES`] in order and returns the first uniformly-marked
/// line as a win. Under valid alternating play at most one line can be
/// complete, but the scan does not assume it. Pure: identical boards
/// give identical results.
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        if let Cell::Occupied(mark) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Outcome::Win { mark, line };
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
