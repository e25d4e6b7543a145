//! Depth-bounded alpha-beta search.
//!
//! Moves are tried in ascending id order and every child is a fresh clone.
//! There is no transposition table: transpositions are searched again.
//! Once the deadline passes, every node still to be visited returns its
//! static value, so an in-flight search winds down quickly instead of
//! failing.

use crate::core::Board;
use crate::rules::RulesResult;

use super::deadline::Deadline;
use super::evaluate::evaluate;

/// Alpha-beta search context: the shared deadline plus a node counter.
#[derive(Debug)]
pub struct AlphaBeta<'a> {
    deadline: &'a Deadline,
    nodes: u64,
}

impl<'a> AlphaBeta<'a> {
    #[must_use]
    pub fn new(deadline: &'a Deadline) -> Self {
        Self { deadline, nodes: 0 }
    }

    /// Nodes visited so far, leaves included.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Value of `board` searched `depth` plies deep within `(alpha, beta)`.
    ///
    /// `maximizing` is true when the side to move wants the highest
    /// player-0-relative score.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> RulesResult<i32> {
        self.nodes += 1;

        if self.deadline.has_passed() {
            return Ok(evaluate(board));
        }
        if depth == 0 || board.is_game_over() {
            return Ok(evaluate(board));
        }
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Ok(evaluate(board));
        }

        if maximizing {
            let mut best = i32::MIN;
            for piece in moves {
                let mut child = board.clone();
                child.apply_move(piece)?;
                let value = self.search(&child, depth - 1, false, alpha, beta)?;
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = i32::MAX;
            for piece in moves {
                let mut child = board.clone();
                child.apply_move(piece)?;
                let value = self.search(&child, depth - 1, true, alpha, beta)?;
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            Ok(best)
        }
    }

    /// Search with the widest possible window.
    pub fn search_full(&mut self, board: &Board, depth: u32, maximizing: bool) -> RulesResult<i32> {
        self.search(board, depth, maximizing, i32::MIN, i32::MAX)
    }
}

/// Exhaustive full-width minimax, the reference alpha-beta must agree with.
pub fn minimax(board: &Board, depth: u32, maximizing: bool) -> RulesResult<i32> {
    if depth == 0 || board.is_game_over() {
        return Ok(evaluate(board));
    }
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Ok(evaluate(board));
    }

    let mut values = Vec::with_capacity(moves.len());
    for piece in moves {
        let mut child = board.clone();
        child.apply_move(piece)?;
        values.push(minimax(&child, depth - 1, !maximizing)?);
    }

    let best = if maximizing {
        values.into_iter().max()
    } else {
        values.into_iter().min()
    };
    Ok(best.unwrap_or_else(|| evaluate(board)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PieceId, PlayerId};
    use crate::search::evaluate::WIN_SCORE;

    #[test]
    fn test_depth_zero_is_static_value() {
        let mut board = Board::new();
        board.apply_move(PieceId::new(1).unwrap()).unwrap();
        let deadline = Deadline::unbounded();
        let mut search = AlphaBeta::new(&deadline);

        assert_eq!(search.search_full(&board, 0, false).unwrap(), evaluate(&board));
        assert_eq!(search.nodes(), 1);
    }

    #[test]
    fn test_matches_minimax_from_start() {
        let board = Board::new();
        let deadline = Deadline::unbounded();
        for depth in 1..=5 {
            let mut search = AlphaBeta::new(&deadline);
            assert_eq!(
                search.search_full(&board, depth, true).unwrap(),
                minimax(&board, depth, true).unwrap(),
                "depth {depth}"
            );
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let board = Board::new();
        let deadline = Deadline::unbounded();
        let mut search = AlphaBeta::new(&deadline);
        search.search_full(&board, 4, true).unwrap();

        // Full width at depth 4 from the start: 1 + 5 + 25 + 125 + 625 nodes.
        assert!(search.nodes() < 781);
    }

    #[test]
    fn test_expired_deadline_returns_static_value() {
        let board = Board::new();
        let deadline = Deadline::starting_now(std::time::Duration::ZERO, 0.8);
        std::thread::sleep(std::time::Duration::from_millis(2));

        let mut search = AlphaBeta::new(&deadline);
        assert_eq!(search.search_full(&board, 8, true).unwrap(), evaluate(&board));
        assert_eq!(search.nodes(), 1);
    }

    #[test]
    fn test_decided_position_is_terminal() {
        let mut pieces = *Board::new().pieces();
        for piece in &mut pieces[5..9] {
            piece.has_turned_around = true;
        }
        let board = Board::from_pieces(&pieces, PlayerId::ZERO).unwrap();
        let deadline = Deadline::unbounded();
        let mut search = AlphaBeta::new(&deadline);

        assert_eq!(search.search_full(&board, 6, true).unwrap(), -WIN_SCORE);
    }
}
