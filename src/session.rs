//! Game session management.
//!
//! A [`Session`] owns one board, two players, the turn indicator, and
//! the advisory move clock. It is the sole mutator of its board and
//! assumes single-threaded, turn-based access. Player scores persist
//! across rounds; the board is reset in place.

use crate::ai::{self, Difficulty};
use crate::board::{Board, Mark};
use crate::clock::{DEFAULT_MOVE_LIMIT, MoveClock};
use crate::error::{IllegalMove, SaveError};
use crate::rules::{self, Outcome};
use crate::save::SaveGame;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Kind of opponent in a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two human players.
    #[display("pvp")]
    Pvp,
    /// Human against the computer; the second player is the AI.
    #[display("ai")]
    #[serde(rename = "ai")]
    VsAi,
}

/// A player in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Player's display name.
    pub name: String,
    /// Which mark this player places (fixed for the session).
    pub mark: Mark,
    /// Rounds won so far in this session.
    pub score: u32,
    /// Display color (hex string). Carried for the UI, never consulted
    /// by game logic.
    pub color: String,
}

/// Receives a notification when a round concludes.
///
/// Statistics aggregation lives behind this seam; the session itself
/// never persists anything.
pub trait GameObserver {
    /// Called exactly once per concluded round, with the winner's name
    /// or `None` for a draw.
    fn on_game_concluded(&mut self, mode: GameMode, winner: Option<&str>);
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveEffect {
    /// The board after the move.
    pub board: Board,
    /// The outcome after the move.
    pub outcome: Outcome,
    /// Whether the AI should now be asked for a move
    /// (AI mode, game still live, AI's turn).
    pub ai_turn: bool,
}

/// One game session: board, players, turn state, and clock.
pub struct Session {
    mode: GameMode,
    difficulty: Difficulty,
    board: Board,
    players: [Player; 2],
    current: usize,
    starting: usize,
    outcome: Outcome,
    clock: MoveClock,
    rng: StdRng,
    observer: Option<Box<dyn GameObserver + Send>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("mode", &self.mode)
            .field("difficulty", &self.difficulty)
            .field("board", &self.board)
            .field("players", &self.players)
            .field("current", &self.current)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

/// Default display color for the first player's mark.
const PLAYER_ONE_COLOR: &str = "#e74c3c";
/// Default display color for the second player's mark.
const PLAYER_TWO_COLOR: &str = "#2ecc71";

impl Session {
    /// Creates a new session with default players: "Player 1" as X and
    /// "Player 2" (or "AI" in AI mode) as O. Player 1 moves first.
    #[instrument(skip(now))]
    pub fn new(mode: GameMode, difficulty: Difficulty, now: Instant) -> Self {
        info!(%mode, %difficulty, "Creating new game session");
        let second = match mode {
            GameMode::Pvp => "Player 2",
            GameMode::VsAi => "AI",
        };
        Self {
            mode,
            difficulty,
            board: Board::new(),
            players: [
                Player {
                    name: "Player 1".to_string(),
                    mark: Mark::X,
                    score: 0,
                    color: PLAYER_ONE_COLOR.to_string(),
                },
                Player {
                    name: second.to_string(),
                    mark: Mark::O,
                    score: 0,
                    color: PLAYER_TWO_COLOR.to_string(),
                },
            ],
            current: 0,
            starting: 0,
            outcome: Outcome::InProgress,
            clock: MoveClock::new(DEFAULT_MOVE_LIMIT, now),
            rng: StdRng::from_os_rng(),
            observer: None,
        }
    }

    /// The session's game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The AI difficulty (meaningful only in AI mode).
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Both players, first mover first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Index (0 or 1) of the player whose turn it is.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Reseeds the session RNG, making Easy/Medium play reproducible.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Installs the observer notified when rounds conclude.
    pub fn set_observer(&mut self, observer: Box<dyn GameObserver + Send>) {
        self.observer = Some(observer);
    }

    /// Attempts to place the current player's mark at `index`.
    ///
    /// On success the outcome is re-evaluated: a win credits the
    /// current player's score and concludes the round, a draw
    /// concludes it without a winner, and otherwise the turn passes
    /// and the move clock restarts at `now`. Concluded rounds notify
    /// the observer exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the game is already over, the index
    /// is out of range, or the cell is occupied. Rejected moves leave
    /// every part of the session untouched.
    #[instrument(skip(self, now), fields(mode = %self.mode, index))]
    pub fn attempt_move(&mut self, index: usize, now: Instant) -> Result<MoveEffect, IllegalMove> {
        if self.outcome.is_terminal() {
            debug!("Move rejected: game already over");
            return Err(IllegalMove::GameOver);
        }
        let mark = self.players[self.current].mark;
        self.board.set(index, mark)?;
        self.outcome = rules::evaluate(&self.board);

        match self.outcome {
            Outcome::Win { mark, .. } => {
                self.players[self.current].score += 1;
                info!(winner = %self.players[self.current].name, %mark, "Round won");
                let winner = self.players[self.current].name.clone();
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_game_concluded(self.mode, Some(&winner));
                }
            }
            Outcome::Draw => {
                info!("Round drawn");
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_game_concluded(self.mode, None);
                }
            }
            Outcome::InProgress => {
                self.current = 1 - self.current;
                self.clock.restart(now);
            }
        }

        Ok(MoveEffect {
            board: self.board.clone(),
            outcome: self.outcome,
            ai_turn: self.ai_to_move(),
        })
    }

    /// Whether the session is waiting on the AI for a move.
    pub fn ai_to_move(&self) -> bool {
        self.mode == GameMode::VsAi && self.current == 1 && !self.outcome.is_terminal()
    }

    /// Asks the configured AI policy for a move.
    ///
    /// Returns `None` unless [`Session::ai_to_move`] holds: mode is
    /// AI, the game is live, and it is actually the AI's turn — a
    /// move computed for the AI's mark would otherwise be placed as
    /// the human's. The returned index feeds back into
    /// [`Session::attempt_move`].
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn compute_ai_move(&mut self) -> Option<usize> {
        if !self.ai_to_move() {
            return None;
        }
        let ai = self.players[1].mark;
        let opponent = self.players[0].mark;
        ai::choose_move(&self.board, ai, opponent, self.difficulty, &mut self.rng)
    }

    /// Forfeits the current player's move on timeout: the turn passes
    /// without a mark being placed and without recording a loss, and
    /// the clock restarts at `now`. No-op on a concluded game.
    #[instrument(skip(self, now))]
    pub fn forfeit_turn(&mut self, now: Instant) {
        if self.outcome.is_terminal() {
            return;
        }
        warn!(player = %self.players[self.current].name, "Move forfeited on timeout");
        self.current = 1 - self.current;
        self.clock.restart(now);
    }

    /// Resets the session for a new round: empty board, outcome back
    /// to in-progress, turn restored to the configured starting
    /// player, clock restarted. Scores persist.
    #[instrument(skip(self, now))]
    pub fn reset(&mut self, now: Instant) {
        debug!("Resetting session for a new round");
        self.board = Board::new();
        self.outcome = Outcome::InProgress;
        self.current = self.starting;
        self.clock.restart(now);
    }

    /// Time left on the current move as of `now`.
    pub fn remaining_time(&self, now: Instant) -> Duration {
        self.clock.remaining(now)
    }

    /// Whether the current move has run out of time as of `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.clock.is_expired(now)
    }

    /// Captures the session as a persistable record, including elapsed
    /// time on the current move as of `now`.
    pub fn snapshot(&self, now: Instant) -> SaveGame {
        SaveGame {
            mode: self.mode,
            board: self.board.clone(),
            current: self.current,
            players: self.players.clone(),
            outcome: self.outcome,
            difficulty: self.difficulty,
            elapsed_secs: self.clock.elapsed(now).as_secs_f64(),
        }
    }

    /// Rebuilds a session from a persisted record.
    ///
    /// The record is re-validated rather than trusted: the stored
    /// outcome must match what [`rules::evaluate`] derives from the
    /// stored board, the turn index must name a player, and the two
    /// players must carry distinct marks.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] on any inconsistency; no session is built.
    #[instrument(skip(save, now))]
    pub fn restore(save: SaveGame, now: Instant) -> Result<Self, SaveError> {
        if save.current > 1 {
            warn!(current = save.current, "Rejecting save: bad turn index");
            return Err(SaveError::InvalidTurn(save.current));
        }
        if save.players[0].mark == save.players[1].mark {
            warn!("Rejecting save: duplicate marks");
            return Err(SaveError::DuplicateMarks);
        }
        if rules::evaluate(&save.board) != save.outcome {
            warn!("Rejecting save: stored outcome disagrees with board");
            return Err(SaveError::OutcomeMismatch);
        }
        let elapsed = Duration::try_from_secs_f64(save.elapsed_secs).unwrap_or(Duration::ZERO);
        let mut clock = MoveClock::new(DEFAULT_MOVE_LIMIT, now);
        clock.restart_with_elapsed(now, elapsed);
        info!(mode = %save.mode, "Session restored from save");
        Ok(Self {
            mode: save.mode,
            difficulty: save.difficulty,
            board: save.board,
            players: save.players,
            current: save.current,
            starting: 0,
            outcome: save.outcome,
            clock,
            rng: StdRng::from_os_rng(),
            observer: None,
        })
    }
}
