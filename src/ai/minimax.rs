//! Exhaustive minimax search for the Unbeatable tier.
//!
//! The 3x3 game tree tops out under 9! leaf evaluations, so brute
//! force terminates quickly without pruning or caching. Search runs
//! over board value copies rather than mutate-then-undo on the live
//! board.

use crate::board::{Board, Mark};
use crate::rules::{self, Outcome};
use tracing::instrument;

/// Leaf score for an AI win.
const WIN: i32 = 10;
/// Leaf score for an opponent win.
const LOSS: i32 = -10;
/// Leaf score for a draw.
const DRAW: i32 = 0;

/// Finds the game-theoretic best move for `ai` on `board`.
///
/// Tries every empty index in ascending order and keeps the strict
/// maximum, so the first index reaching the best score wins ties. No
/// depth discount is applied: wins at any depth score alike, which
/// means the chosen line is a win but not necessarily the fastest one.
/// Returns `None` only on a full board.
#[instrument(skip(board))]
pub fn best_move(board: &Board, ai: Mark, opponent: Mark) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for idx in board.empty_indices() {
        let score = score(&board.child(idx, ai), ai, opponent, false);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Scores a position for `ai`, with `maximizing` naming the side to
/// move: the AI's plies maximize, the opponent's minimize.
fn score(board: &Board, ai: Mark, opponent: Mark, maximizing: bool) -> i32 {
    match rules::evaluate(board) {
        Outcome::Win { mark, .. } => {
            if mark == ai {
                WIN
            } else {
                LOSS
            }
        }
        Outcome::Draw => DRAW,
        Outcome::InProgress => {
            let (mover, worst) = if maximizing { (ai, LOSS) } else { (opponent, WIN) };
            board
                .empty_indices()
                .map(|idx| score(&board.child(idx, mover), ai, opponent, !maximizing))
                .fold(worst, |acc, s| {
                    if maximizing { acc.max(s) } else { acc.min(s) }
                })
        }
    }
}
