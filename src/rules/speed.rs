//! Per-lane movement speeds.
//!
//! Each player's five lanes have a fixed base speed. Once a piece turns
//! around its speed inverts: 1 becomes 3 and 3 becomes 1, while 2 stays 2.

use crate::core::{Piece, PlayerId, PIECES_PER_PLAYER};

/// Base speeds of player 0's lanes (horizontal pieces).
pub const HORIZONTAL_SPEEDS: [i8; PIECES_PER_PLAYER] = [1, 3, 2, 3, 1];

/// Base speeds of player 1's lanes (vertical pieces).
pub const VERTICAL_SPEEDS: [i8; PIECES_PER_PLAYER] = [3, 1, 2, 1, 3];

/// Speed on the outbound leg.
#[must_use]
pub fn base_speed(piece: &Piece) -> i8 {
    let table = if piece.player == PlayerId::ZERO {
        &HORIZONTAL_SPEEDS
    } else {
        &VERTICAL_SPEEDS
    };
    table[piece.id.lane()]
}

/// Squares a piece advances this move, taking the return leg into account.
#[must_use]
pub fn effective_speed(piece: &Piece) -> i8 {
    let base = base_speed(piece);
    if piece.has_turned_around {
        4 - base
    } else {
        base
    }
}
