//! Tic-tac-toe game engine: rules, AI policies, and session state.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and its query/mutate operations
//! - **Rules**: pure win/draw classification shared by gameplay and search
//! - **AI**: four difficulty tiers, from uniform-random to exhaustive minimax
//! - **Session**: turn sequence, scores, the advisory move clock, save/load
//!
//! Presentation (windows, widgets, sound, timer rendering) lives outside
//! this crate: it calls [`Session::attempt_move`] and renders the returned
//! [`MoveEffect`], polls [`Session::is_expired`] to trigger turn forfeits,
//! and wires a [`GameObserver`] (such as [`Stats`]) for bookkeeping.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use tictactoe_engine::{Difficulty, GameMode, Session};
//!
//! let now = Instant::now();
//! let mut session = Session::new(GameMode::VsAi, Difficulty::Unbeatable, now);
//! let effect = session.attempt_move(4, now)?;
//! if effect.ai_turn {
//!     let reply = session.compute_ai_move().expect("game is live");
//!     session.attempt_move(reply, now)?;
//! }
//! # Ok::<(), tictactoe_engine::IllegalMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod clock;
mod error;
mod rules;
mod save;
mod session;
mod stats;

pub use ai::{Difficulty, best_move, choose_move, heuristic_move};
pub use board::{Board, Cell, Mark};
pub use clock::{DEFAULT_MOVE_LIMIT, MoveClock};
pub use error::{IllegalMove, SaveError};
pub use rules::{LINES, Line, Outcome, evaluate};
pub use save::SaveGame;
pub use session::{GameMode, GameObserver, MoveEffect, Player, Session};
pub use stats::Stats;
