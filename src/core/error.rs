//! Engine error taxonomy.
//!
//! Every precondition violation is a synchronous, recoverable error: the
//! rejected operation is a no-op on state and the game remains usable.
//! Messages are written to be user-displayable as-is, since hosts surface
//! them directly (e.g. as an alert).

use thiserror::Error;

use crate::types::TurnState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The operation is not valid in the turn's current state.
    #[error("cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: TurnState,
    },

    /// The question was already played earlier in the game.
    #[error("that question has already been asked")]
    AlreadyAsked,

    /// The player answered incorrectly this turn and may not buzz again.
    #[error("{player} is locked out of this question")]
    LockedOut { player: String },

    /// No player with this id exists in the game.
    #[error("unknown player: {id}")]
    UnknownPlayer { id: String },

    /// Category or row index outside the board.
    #[error("no question at category {category}, row {row}")]
    NoSuchQuestion { category: usize, row: usize },

    /// Every question on the board has been played; no turn is running.
    #[error("the board is exhausted and the game is over")]
    GameFinished,

    /// Rejected game construction (empty roster, duplicate player ids).
    #[error("invalid game setup: {0}")]
    InvalidSetup(String),
}
