//! Persisted game records.
//!
//! A [`SaveGame`] is a flat, structured snapshot of a session. It is
//! written and read as JSON; [`crate::Session::restore`] re-validates
//! the contents instead of trusting them.

use crate::ai::Difficulty;
use crate::board::Board;
use crate::error::SaveError;
use crate::rules::Outcome;
use crate::session::{GameMode, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

/// A persisted session snapshot.
///
/// The winning line, when present, travels inside the stored
/// [`Outcome`]. `difficulty` defaults to Medium and `elapsed_secs` to
/// zero when absent from older records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveGame {
    /// Game mode of the saved session.
    pub mode: GameMode,
    /// Board contents at save time.
    pub board: Board,
    /// Index (0 or 1) of the player to move.
    pub current: usize,
    /// Both players: names, marks, scores, colors.
    pub players: [Player; 2],
    /// Outcome at save time, re-derived on restore.
    pub outcome: Outcome,
    /// AI difficulty of the saved session.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Seconds already spent on the current move.
    #[serde(default)]
    pub elapsed_secs: f64,
}

impl SaveGame {
    /// Serializes the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a record from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Malformed`] when the text is not valid
    /// JSON or required fields are missing.
    pub fn from_json(text: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Writes the record to a JSON file.
    #[instrument(skip(self))]
    pub fn write(&self, path: &Path) -> Result<(), SaveError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Reads a record from a JSON file.
    #[instrument]
    pub fn read(path: &Path) -> Result<Self, SaveError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    fn sample() -> SaveGame {
        let mut board = Board::new();
        board.set(0, Mark::X).unwrap();
        board.set(4, Mark::O).unwrap();
        SaveGame {
            mode: GameMode::VsAi,
            board,
            current: 0,
            players: [
                Player {
                    name: "Player 1".to_string(),
                    mark: Mark::X,
                    score: 1,
                    color: "#e74c3c".to_string(),
                },
                Player {
                    name: "AI".to_string(),
                    mark: Mark::O,
                    score: 0,
                    color: "#2ecc71".to_string(),
                },
            ],
            outcome: Outcome::InProgress,
            difficulty: Difficulty::Unbeatable,
            elapsed_secs: 7.5,
        }
    }

    #[test]
    fn test_json_round_trip() {
        let save = sample();
        let text = save.to_json().unwrap();
        let parsed = SaveGame::from_json(&text).unwrap();
        assert_eq!(parsed, save);
    }

    #[test]
    fn test_missing_difficulty_defaults_to_medium() {
        let mut value: serde_json::Value =
            serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("difficulty");
        value.as_object_mut().unwrap().remove("elapsed_secs");
        let parsed = SaveGame::from_json(&value.to_string()).unwrap();
        assert_eq!(parsed.difficulty, Difficulty::Medium);
        assert_eq!(parsed.elapsed_secs, 0.0);
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let mut value: serde_json::Value =
            serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("board");
        let err = SaveGame::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, SaveError::Malformed(_)));
    }

    #[test]
    fn test_garbage_text_is_malformed() {
        assert!(matches!(
            SaveGame::from_json("not json at all"),
            Err(SaveError::Malformed(_))
        ));
    }
}
