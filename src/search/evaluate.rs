//! Static evaluation, always from player 0's point of view.

use crate::core::{Board, PlayerId, TRACK_END};

/// Score of a decided game.
pub const WIN_SCORE: i32 = 1000;

/// Bonus per piece that has completed its lap.
pub const FINISHED_BONUS: i32 = 30;

/// Heuristic value of a position. Positive favours player 0.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    match board.winner() {
        Some(PlayerId::ZERO) => return WIN_SCORE,
        Some(_) => return -WIN_SCORE,
        None => {}
    }

    board
        .pieces()
        .iter()
        .map(|piece| {
            let progress = if piece.has_turned_around {
                i32::from(TRACK_END - piece.position) * 2 + 10
            } else {
                i32::from(piece.position)
            };
            let bonus = if piece.is_finished() { FINISHED_BONUS } else { 0 };
            let value = progress + bonus;
            if piece.player == PlayerId::ZERO {
                value
            } else {
                -value
            }
        })
        .sum()
}
