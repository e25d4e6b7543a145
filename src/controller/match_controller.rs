//! Live game state for one engine-controlled side.
//!
//! Collaborators number players 1 and 2 and pawns 1 through 5 within a
//! player. The controller translates that numbering to piece ids, keeps the
//! single live board, and asks the searcher for a move on its own turn.

use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Board, PieceId, PlayerId, PIECES_PER_PLAYER};
use crate::rules::{MoveOutcome, RulesError};
use crate::search::{SearchConfig, SearchError, Searcher};

/// Default thinking time per move.
pub const DEFAULT_MOVE_TIME: Duration = Duration::from_secs(10);

/// Errors raised while driving a match.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("invalid player number {0}, expected 1 or 2")]
    InvalidPlayerNumber(i32),

    #[error("invalid pawn number {0}, expected 1 to 5")]
    InvalidPawnNumber(i32),

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// A move in collaborator numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalMove {
    /// 1 or 2.
    pub player: u8,
    /// 1 through 5.
    pub pawn: u8,
}

impl ExternalMove {
    /// Validate collaborator numbering.
    pub fn new(player_number: i32, pawn_number: i32) -> Result<Self, ControllerError> {
        let player = u8::try_from(player_number)
            .ok()
            .filter(|n| (1..=2).contains(n))
            .ok_or(ControllerError::InvalidPlayerNumber(player_number))?;
        let pawn = u8::try_from(pawn_number)
            .ok()
            .filter(|n| (1..=PIECES_PER_PLAYER as u8).contains(n))
            .ok_or(ControllerError::InvalidPawnNumber(pawn_number))?;
        Ok(Self { player, pawn })
    }

    /// The collaborator's name for `piece`.
    #[must_use]
    pub fn from_piece(piece: PieceId) -> Self {
        Self {
            player: piece.owner().index() as u8 + 1,
            pawn: piece.lane() as u8 + 1,
        }
    }

    /// Internal id: `(pawn - 1) + (player - 1) * 5`.
    pub fn piece(&self) -> Result<PieceId, ControllerError> {
        let Self { player, pawn } = Self::new(i32::from(self.player), i32::from(self.pawn))?;
        let raw = (pawn - 1) + (player - 1) * PIECES_PER_PLAYER as u8;
        PieceId::new(raw).ok_or(ControllerError::InvalidPawnNumber(i32::from(pawn)))
    }
}

/// Result of forwarding an opponent move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpponentMove {
    /// It was the engine's own turn; the board is unchanged.
    Ignored,
    /// The move was played.
    Applied(MoveOutcome),
}

/// Owns the live board for a match where the engine plays one side.
#[derive(Debug)]
pub struct MatchController {
    board: Board,
    engine_player: PlayerId,
    searcher: Searcher,
    move_time: Duration,
}

impl MatchController {
    /// Controller for `engine_player` from the starting position.
    pub fn new(engine_player: PlayerId, config: SearchConfig) -> Result<Self, ControllerError> {
        info!("engine playing as {engine_player}");
        Ok(Self {
            board: Board::new(),
            engine_player,
            searcher: Searcher::new(config)?,
            move_time: DEFAULT_MOVE_TIME,
        })
    }

    /// Controller for the collaborator's player number (1 or 2).
    pub fn for_player_number(player_number: i32, config: SearchConfig) -> Result<Self, ControllerError> {
        let player = player_number
            .checked_sub(1)
            .and_then(|index| u8::try_from(index).ok())
            .and_then(PlayerId::new)
            .ok_or(ControllerError::InvalidPlayerNumber(player_number))?;
        Self::new(player, config)
    }

    /// Set the thinking time per move.
    pub fn with_move_time(mut self, move_time: Duration) -> Self {
        self.move_time = move_time;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn engine_player(&self) -> PlayerId {
        self.engine_player
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.board.winner()
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Whether the engine is on move in an unfinished game.
    pub fn is_my_turn(&self) -> bool {
        !self.board.is_game_over() && self.board.current_player() == self.engine_player
    }

    /// Play a move received from the opponent.
    ///
    /// Messages arriving on the engine's own turn are dropped without
    /// validation.
    pub fn apply_opponent_move(
        &mut self,
        player_number: i32,
        pawn_number: i32,
    ) -> Result<OpponentMove, ControllerError> {
        if self.board.current_player() == self.engine_player {
            debug!("ignoring move for pawn {pawn_number}: not the opponent's turn");
            return Ok(OpponentMove::Ignored);
        }

        let piece = ExternalMove::new(player_number, pawn_number)?.piece()?;
        info!("opponent plays pawn {pawn_number} ({piece})");
        let outcome = self.board.apply_move(piece)?;
        Ok(OpponentMove::Applied(outcome))
    }

    /// Search for the engine's next move without playing it.
    ///
    /// `None` when it is not the engine's turn, the game is over, or no move
    /// exists.
    pub fn choose_move(&mut self) -> Result<Option<ExternalMove>, ControllerError> {
        if !self.is_my_turn() {
            return Ok(None);
        }
        let snapshot = self.board.clone();
        let best = self.searcher.find_best_move(&snapshot, self.move_time)?;
        Ok(best.map(ExternalMove::from_piece))
    }

    /// Play the engine's move once the other side has accepted it.
    pub fn commit_own_move(&mut self, external: ExternalMove) -> Result<MoveOutcome, ControllerError> {
        let piece = external.piece()?;
        let outcome = self.board.apply_move(piece)?;
        info!("engine played pawn {} ({piece})", external.pawn);
        Ok(outcome)
    }
}
