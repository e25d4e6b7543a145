//! Errors raised by the rules engine.

use thiserror::Error;

use crate::core::{PieceId, PlayerId};

/// A rejected move. The board is left untouched whenever one is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Raw piece id outside `0..=9`.
    #[error("invalid piece id {0} (must be 0-9)")]
    InvalidMoveId(i32),

    /// The piece belongs to the player who is not on move.
    #[error("piece {piece} does not belong to {player}, who is on move")]
    WrongPlayerMove { piece: PieceId, player: PlayerId },

    /// The piece already completed its lap.
    #[error("piece {0} has already finished")]
    FinishedPieceMove(PieceId),
}

/// Result type alias for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
