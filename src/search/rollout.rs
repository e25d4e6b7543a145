//! Random playouts as a statistical signal.
//!
//! A playout clones the position and plays uniformly random legal moves
//! until the game is decided. The margin of player-0 wins over player-1 wins
//! across all playouts is one input to the root move score; it never picks a
//! move on its own.

use crate::core::{Board, GameRng, PlayerId};
use crate::rules::RulesResult;

/// Play one random game to completion and report the winner.
///
/// Returns `None` if no legal move remains or `max_plies` (when non-zero)
/// is reached before anyone wins.
pub fn playout(board: &Board, rng: &mut GameRng, max_plies: u32) -> RulesResult<Option<PlayerId>> {
    let mut board = board.clone();
    let mut plies = 0;

    while !board.is_game_over() {
        if max_plies > 0 && plies >= max_plies {
            return Ok(None);
        }
        let moves = board.legal_moves();
        let Some(&piece) = rng.choose(&moves) else {
            return Ok(None);
        };
        board.apply_move(piece)?;
        plies += 1;
    }

    Ok(board.winner())
}

/// Run `simulations` playouts and return player-0 wins minus player-1 wins.
pub fn rollout(board: &Board, simulations: u32, rng: &mut GameRng, max_plies: u32) -> RulesResult<i32> {
    let mut margin = 0;
    for _ in 0..simulations {
        match playout(board, rng, max_plies)? {
            Some(PlayerId::ZERO) => margin += 1,
            Some(_) => margin -= 1,
            None => {}
        }
    }
    Ok(margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decided_for(player: PlayerId) -> Board {
        let mut pieces = *Board::new().pieces();
        let start = player.index() * 5;
        for piece in &mut pieces[start..start + 4] {
            piece.has_turned_around = true;
        }
        Board::from_pieces(&pieces, player.opponent()).unwrap()
    }

    #[test]
    fn test_decided_game_scores_every_simulation() {
        let mut rng = GameRng::new(1);
        assert_eq!(rollout(&decided_for(PlayerId::ZERO), 25, &mut rng, 0).unwrap(), 25);
        assert_eq!(rollout(&decided_for(PlayerId::ONE), 25, &mut rng, 0).unwrap(), -25);
    }

    #[test]
    fn test_same_seed_same_margin() {
        let board = Board::new();
        let a = rollout(&board, 40, &mut GameRng::new(99), 0).unwrap();
        let b = rollout(&board, 40, &mut GameRng::new(99), 0).unwrap();
        assert_eq!(a, b);
        assert!(a.abs() <= 40);
    }

    #[test]
    fn test_playout_reaches_a_winner() {
        let mut rng = GameRng::new(5);
        for _ in 0..10 {
            assert!(playout(&Board::new(), &mut rng, 0).unwrap().is_some());
        }
    }

    #[test]
    fn test_ply_cap_counts_as_draw() {
        let mut rng = GameRng::new(5);
        assert_eq!(playout(&Board::new(), &mut rng, 1).unwrap(), None);
        assert_eq!(rollout(&Board::new(), 10, &mut rng, 1).unwrap(), 0);
    }

    #[test]
    fn test_rollout_leaves_input_untouched() {
        let board = Board::new();
        let before = board.clone();
        rollout(&board, 10, &mut GameRng::new(3), 0).unwrap();
        assert_eq!(board, before);
    }
}
