//! Cumulative game statistics.
//!
//! [`Stats`] is a collaborator, not part of the session: wire it in
//! with [`crate::Session::set_observer`] and it tallies concluded
//! rounds per mode. Persistence is plain JSON.

use crate::error::SaveError;
use crate::session::{GameMode, GameObserver};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::instrument;

/// Win, draw, and total-game tallies, split by game mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    /// Wins per player name in player-vs-player games.
    pub pvp_wins: BTreeMap<String, u32>,
    /// Draw count in player-vs-player games.
    pub pvp_draws: u32,
    /// Wins per name (human or "AI") in AI games.
    pub ai_wins: BTreeMap<String, u32>,
    /// Draw count in AI games.
    pub ai_draws: u32,
    /// Total rounds concluded across both modes.
    pub total_games: u32,
}

impl Stats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one concluded round: `winner` is the winning player's
    /// name, or `None` for a draw.
    pub fn record(&mut self, mode: GameMode, winner: Option<&str>) {
        self.total_games += 1;
        let (wins, draws) = match mode {
            GameMode::Pvp => (&mut self.pvp_wins, &mut self.pvp_draws),
            GameMode::VsAi => (&mut self.ai_wins, &mut self.ai_draws),
        };
        match winner {
            Some(name) => *wins.entry(name.to_string()).or_insert(0) += 1,
            None => *draws += 1,
        }
    }

    /// Wins recorded for `name` in the given mode.
    pub fn wins(&self, mode: GameMode, name: &str) -> u32 {
        let wins = match mode {
            GameMode::Pvp => &self.pvp_wins,
            GameMode::VsAi => &self.ai_wins,
        };
        wins.get(name).copied().unwrap_or(0)
    }

    /// Draws recorded in the given mode.
    pub fn draws(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Pvp => self.pvp_draws,
            GameMode::VsAi => self.ai_draws,
        }
    }

    /// Writes the statistics to a JSON file.
    #[instrument(skip(self))]
    pub fn write(&self, path: &Path) -> Result<(), SaveError> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Reads statistics from a JSON file.
    #[instrument]
    pub fn read(path: &Path) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }
}

impl GameObserver for Stats {
    fn on_game_concluded(&mut self, mode: GameMode, winner: Option<&str>) {
        self.record(mode, winner);
    }
}
