//! Player identification.
//!
//! Squadro is strictly two-player: `PlayerId::ZERO` moves the horizontal
//! pieces (ids 0-4) and `PlayerId::ONE` the vertical pieces (ids 5-9).

use serde::{Deserialize, Serialize};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier, either 0 or 1.
///
/// Player indices are 0-based: the first player to move is `PlayerId::ZERO`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player owning pieces 0-4. Moves first.
    pub const ZERO: PlayerId = PlayerId(0);

    /// The player owning pieces 5-9.
    pub const ONE: PlayerId = PlayerId(1);

    /// Create a player ID from a raw index.
    ///
    /// Returns `None` for anything other than 0 or 1.
    ///
    /// ```
    /// use squadro_ai::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1), Some(PlayerId::ONE));
    /// assert_eq!(PlayerId::new(2), None);
    /// ```
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PLAYER_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Whether this player maximizes the player-0-relative evaluation.
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        self.0 == 0
    }

    /// Iterate over both players in index order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::ZERO, Self::ONE].into_iter()
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or_else(|| format!("player index {index} out of range"))
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
