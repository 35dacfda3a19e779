//! Error types for the game engine.

/// Error returned when a move cannot be applied.
///
/// Rejected moves never mutate state; the caller's game loop simply
/// reports the rejection and waits for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The index is outside 0-8.
    #[display("Cell index {_0} is out of range (0-8)")]
    OutOfRange(usize),

    /// The cell at this index is already occupied.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(usize),

    /// The game has already concluded; reset the session to play again.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for IllegalMove {}

/// Error returned when a persisted game record cannot be restored.
///
/// A failed restore leaves no half-built session; the caller's live
/// state is untouched.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum SaveError {
    /// The save file could not be read or written.
    #[display("Save file I/O failed: {_0}")]
    #[from]
    Io(std::io::Error),

    /// The record is not valid JSON or is missing required fields.
    #[display("Malformed save data: {_0}")]
    #[from]
    Malformed(serde_json::Error),

    /// The stored turn index names neither player.
    #[display("Turn index {_0} does not name a player")]
    InvalidTurn(usize),

    /// Both stored players claim the same mark.
    #[display("Players carry duplicate marks")]
    DuplicateMarks,

    /// The stored outcome disagrees with what the stored board shows.
    #[display("Stored outcome is inconsistent with the board")]
    OutcomeMismatch,
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            SaveError::Malformed(e) => Some(e),
            _ => None,
        }
    }
}
