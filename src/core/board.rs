//! Board snapshot: the ten pieces plus whose turn it is.
//!
//! A `Board` is a plain value. Cloning it yields a fully independent
//! snapshot, which is what the search does at every branch point. The rules
//! that mutate a board live in [`crate::rules`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::piece::{Piece, PieceId, PIECE_COUNT, TRACK_END};
use super::player::PlayerId;

/// Reasons a hand-built board is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 10 pieces, got {0}")]
    PieceCount(usize),

    #[error("piece at slot {slot} has id {id}")]
    MisplacedPiece { slot: usize, id: PieceId },

    #[error("piece {0} is assigned to the wrong player")]
    WrongOwner(PieceId),

    #[error("piece {id} has position {position} outside 0..=6")]
    PositionOutOfRange { id: PieceId, position: i8 },
}

/// Full game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    pieces: [Piece; PIECE_COUNT],
    current_player: PlayerId,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Starting position: every piece at 0, player 0 to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pieces: std::array::from_fn(|slot| Piece::at_start(PieceId::from_slot(slot))),
            current_player: PlayerId::ZERO,
        }
    }

    /// Build a board from explicit pieces.
    ///
    /// Pieces must be given in id order with owners matching the id layout
    /// and positions within the track.
    pub fn from_pieces(pieces: &[Piece], current_player: PlayerId) -> Result<Self, BoardError> {
        if pieces.len() != PIECE_COUNT {
            return Err(BoardError::PieceCount(pieces.len()));
        }

        let mut board = Self::new();
        board.current_player = current_player;

        for (slot, piece) in pieces.iter().enumerate() {
            if piece.id.index() != slot {
                return Err(BoardError::MisplacedPiece { slot, id: piece.id });
            }
            if piece.player != piece.id.owner() {
                return Err(BoardError::WrongOwner(piece.id));
            }
            if !(0..=TRACK_END).contains(&piece.position) {
                return Err(BoardError::PositionOutOfRange {
                    id: piece.id,
                    position: piece.position,
                });
            }
            board.pieces[slot] = *piece;
        }

        Ok(board)
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// All ten pieces, indexed by id.
    #[must_use]
    pub fn pieces(&self) -> &[Piece; PIECE_COUNT] {
        &self.pieces
    }

    /// Look up a single piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Pieces belonging to one player, in id order.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.player == player)
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    pub(crate) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} to move", self.current_player)?;
        for piece in &self.pieces {
            let leg = if piece.is_finished() {
                "done"
            } else if piece.has_turned_around {
                "back"
            } else {
                "out"
            };
            writeln!(f, "  {} (P{}) pos {} {}", piece.id, piece.player.index(), piece.position, leg)?;
        }
        Ok(())
    }
}

/// Serialized form; validated through [`Board::from_pieces`] on the way in.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawBoard {
    pieces: Vec<Piece>,
    current_player: PlayerId,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_pieces(&raw.pieces, raw.current_player)
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        RawBoard {
            pieces: board.pieces.to_vec(),
            current_player: board.current_player,
        }
    }
}
