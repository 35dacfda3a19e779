//! Win/block/center heuristic used by the Medium and Hard tiers.

use crate::board::{Board, Mark};
use crate::rules::{self, Outcome};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::instrument;

/// Picks a move by fixed priority: complete an own line, block the
/// opponent's, take the center, otherwise move at random.
///
/// The win and block scans walk empty indices in ascending order and
/// take the first hit, so the choice is deterministic whenever the
/// random fallback is not reached. Returns `None` only on a full board.
#[instrument(skip(board, rng))]
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Option<usize> {
    if let Some(idx) = winning_index(board, ai) {
        return Some(idx);
    }
    if let Some(idx) = winning_index(board, opponent) {
        return Some(idx);
    }
    if board.is_empty(4) {
        return Some(4);
    }
    let empty: Vec<usize> = board.empty_indices().collect();
    empty.choose(rng).copied()
}

/// First empty index that would complete a line for `mark`, if any.
fn winning_index(board: &Board, mark: Mark) -> Option<usize> {
    board.empty_indices().find(|&idx| {
        matches!(
            rules::evaluate(&board.child(idx, mark)),
            Outcome::Win { mark: winner, .. } if winner == mark
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_from(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(i, m) in marks {
            board.set(i, m).unwrap();
        }
        board
    }

    #[test]
    fn test_takes_own_win_over_block() {
        // O can win at 8; X threatens at 2. Winning beats blocking.
        let board = board_from(&[
            (0, Mark::X),
            (6, Mark::O),
            (1, Mark::X),
            (7, Mark::O),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(heuristic_move(&board, Mark::O, Mark::X, &mut rng), Some(8));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        let board = board_from(&[(0, Mark::X), (4, Mark::O), (1, Mark::X)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(heuristic_move(&board, Mark::O, Mark::X, &mut rng), Some(2));
    }

    #[test]
    fn test_completes_own_top_row() {
        // AI plays X with X at 0 and 1: index 2 completes the row.
        let board = board_from(&[(0, Mark::X), (1, Mark::X)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(heuristic_move(&board, Mark::X, Mark::O, &mut rng), Some(2));
    }

    #[test]
    fn test_prefers_center_without_threats() {
        let board = board_from(&[(0, Mark::X)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(heuristic_move(&board, Mark::O, Mark::X, &mut rng), Some(4));
    }

    #[test]
    fn test_random_fallback_stays_legal() {
        // Center taken, no threats on either side.
        let board = board_from(&[(4, Mark::X), (0, Mark::O)]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let idx = heuristic_move(&board, Mark::O, Mark::X, &mut rng)
                .expect("board has empty cells");
            assert!(board.is_empty(idx));
        }
    }
}
