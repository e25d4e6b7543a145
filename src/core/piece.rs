//! Pieces and piece identifiers.
//!
//! ## ID Layout
//!
//! Ten pieces exist for the whole game; none are ever created or removed.
//! - `0..5`: player 0 (horizontal lanes)
//! - `5..10`: player 1 (vertical lanes)
//!
//! A piece's *lane* is `id % 5`; its *track index* on the shared grid is
//! `lane + 1`, which is also the square at which the crossing lanes of the
//! other player meet it.
//!
//! ```
//! use squadro_ai::core::{PieceId, PlayerId};
//!
//! let piece = PieceId::new(7).unwrap();
//! assert_eq!(piece.owner(), PlayerId::ONE);
//! assert_eq!(piece.lane(), 2);
//! assert_eq!(piece.track(), 3);
//!
//! assert!(PieceId::new(10).is_none());
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Pieces each player owns.
pub const PIECES_PER_PLAYER: usize = 5;

/// Total number of pieces on the board.
pub const PIECE_COUNT: usize = 10;

/// The far end of every track. Positions live in `0..=TRACK_END`.
pub const TRACK_END: i8 = 6;

/// Identifier of one of the ten pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PieceId(u8);

impl PieceId {
    /// Create a piece ID, rejecting anything outside `0..10`.
    #[must_use]
    pub const fn new(raw: u8) -> Option<Self> {
        if (raw as usize) < PIECE_COUNT {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Board slots are always in `0..PIECE_COUNT`.
    pub(crate) const fn from_slot(slot: usize) -> Self {
        debug_assert!(slot < PIECE_COUNT);
        Self(slot as u8)
    }

    /// All piece IDs in ascending order.
    pub fn all() -> impl Iterator<Item = PieceId> {
        (0..PIECE_COUNT as u8).map(PieceId)
    }

    /// The five piece IDs owned by `player`, ascending.
    pub fn of_player(player: PlayerId) -> impl Iterator<Item = PieceId> {
        let start = (player.index() * PIECES_PER_PLAYER) as u8;
        (start..start + PIECES_PER_PLAYER as u8).map(PieceId)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Index into the board's piece array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player this piece belongs to.
    #[must_use]
    pub const fn owner(self) -> PlayerId {
        if (self.0 as usize) < PIECES_PER_PLAYER {
            PlayerId::ZERO
        } else {
            PlayerId::ONE
        }
    }

    /// Lane within the owner's five lanes (0-4).
    #[must_use]
    pub const fn lane(self) -> usize {
        self.0 as usize % PIECES_PER_PLAYER
    }

    /// Track index on the shared grid (1-5).
    #[must_use]
    pub const fn track(self) -> i8 {
        self.lane() as i8 + 1
    }
}

impl TryFrom<u8> for PieceId {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| format!("piece id {raw} out of range"))
    }
}

impl From<PieceId> for u8 {
    fn from(id: PieceId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single piece: where it is on its track and which leg it is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    /// Progress along the track (0 = start, 6 = far side).
    pub position: i8,
    /// Set once the piece reaches the far side and starts coming back.
    pub has_turned_around: bool,
    pub player: PlayerId,
}

impl Piece {
    /// A piece at its starting square, as at the beginning of a game.
    #[must_use]
    pub const fn at_start(id: PieceId) -> Self {
        Self {
            id,
            position: 0,
            has_turned_around: false,
            player: id.owner(),
        }
    }

    /// Back at the start after a full lap. Finished pieces can no longer move.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.position == 0 && self.has_turned_around
    }

    /// +1 on the way out, -1 on the way back.
    #[must_use]
    pub const fn direction(&self) -> i8 {
        if self.has_turned_around {
            -1
        } else {
            1
        }
    }

    /// Where a captured piece is sent: its origin, or the far end if it had
    /// already turned around.
    #[must_use]
    pub const fn reset_position(&self) -> i8 {
        if self.has_turned_around {
            TRACK_END
        } else {
            0
        }
    }
}
