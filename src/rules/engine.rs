//! State transitions on a [`Board`].
//!
//! ## Moving a piece
//!
//! A piece advances one square at a time, up to its effective speed. Before
//! each step the destination square is tested against every opposing piece;
//! an opponent *intersects* the mover when the opponent's progress equals the
//! mover's track index and the opponent's track index equals the destination.
//! The first intersection captures that opponent, ends the step sequence, and
//! puts the mover one square past it. From the landing square further
//! intersections are captured one after another (a chain), each advancing
//! the mover one more square. Finally the position is clamped to the track
//! and the turn passes.

use smallvec::SmallVec;

use crate::core::{Board, Piece, PieceId, PlayerId, PIECES_PER_PLAYER, TRACK_END};

use super::error::{RulesError, RulesResult};
use super::speed::effective_speed;

/// Finished pieces a player needs to win.
pub const PIECES_TO_WIN: usize = 4;

/// Legal moves for one position. Never more than five.
pub type MoveList = SmallVec<[PieceId; PIECES_PER_PLAYER]>;

/// What happened during a successful [`Board::apply_move`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Opponents sent back, in capture order.
    pub captured: SmallVec<[PieceId; PIECES_PER_PLAYER]>,
    /// The mover reached the far side on this move.
    pub turned_around: bool,
    /// The mover completed its lap on this move.
    pub finished: bool,
}

impl Board {
    /// Unfinished pieces of the player on move, ascending by id.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.pieces_of(self.current_player())
            .filter(|p| !p.is_finished())
            .map(|p| p.id)
            .collect()
    }

    /// Apply a move given as an untyped id, as received from outside.
    pub fn apply_move_raw(&mut self, raw: i32) -> RulesResult<MoveOutcome> {
        let id = u8::try_from(raw)
            .ok()
            .and_then(PieceId::new)
            .ok_or(RulesError::InvalidMoveId(raw))?;
        self.apply_move(id)
    }

    /// Move a piece of the player on move, resolving captures, then pass the
    /// turn.
    pub fn apply_move(&mut self, id: PieceId) -> RulesResult<MoveOutcome> {
        let mover = *self.piece(id);
        let player = self.current_player();

        if mover.player != player {
            return Err(RulesError::WrongPlayerMove { piece: id, player });
        }
        if mover.is_finished() {
            return Err(RulesError::FinishedPieceMove(id));
        }

        let direction = mover.direction();
        let mut position = mover.position;
        let mut outcome = MoveOutcome::default();

        for _ in 0..effective_speed(&mover) {
            position += direction;
            if let Some(victim) = self.intersecting_opponent(&mover, position) {
                self.capture(victim);
                outcome.captured.push(victim);
                position += direction;
                break;
            }
        }

        while let Some(victim) = self.intersecting_opponent(&mover, position) {
            self.capture(victim);
            outcome.captured.push(victim);
            position += direction;
        }

        let piece = self.piece_mut(id);
        piece.position = position;
        if !piece.has_turned_around && piece.position >= TRACK_END {
            piece.position = TRACK_END;
            piece.has_turned_around = true;
            outcome.turned_around = true;
        } else if piece.has_turned_around && piece.position <= 0 {
            piece.position = 0;
            outcome.finished = true;
        }

        self.switch_player();
        Ok(outcome)
    }

    /// Number of pieces `player` has brought home.
    #[must_use]
    pub fn finished_count(&self, player: PlayerId) -> usize {
        self.pieces_of(player).filter(|p| p.is_finished()).count()
    }

    /// The player with at least four finished pieces, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::both().find(|&player| self.finished_count(player) >= PIECES_TO_WIN)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Effective speed of a piece on this board.
    #[must_use]
    pub fn speed_of(&self, id: PieceId) -> i8 {
        effective_speed(self.piece(id))
    }

    /// First opponent (ascending id) whose square the mover would cross
    /// at `square`. Both players share one formula: the grid is symmetric.
    fn intersecting_opponent(&self, mover: &Piece, square: i8) -> Option<PieceId> {
        let mover_track = mover.id.track();
        self.pieces()
            .iter()
            .filter(|opponent| opponent.player != mover.player)
            .find(|opponent| opponent.position == mover_track && opponent.id.track() == square)
            .map(|opponent| opponent.id)
    }

    fn capture(&mut self, victim: PieceId) {
        let piece = self.piece_mut(victim);
        piece.position = piece.reset_position();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u8) -> PieceId {
        PieceId::new(raw).unwrap()
    }

    /// Board from `(id, position, turned)` overrides on top of the start.
    fn board_with(overrides: &[(u8, i8, bool)], to_move: PlayerId) -> Board {
        let mut pieces = *Board::new().pieces();
        for &(raw, position, turned) in overrides {
            pieces[raw as usize].position = position;
            pieces[raw as usize].has_turned_around = turned;
        }
        Board::from_pieces(&pieces, to_move).unwrap()
    }

    #[test]
    fn test_fresh_board_first_move() {
        let mut board = Board::new();
        let moves: Vec<u8> = board.legal_moves().iter().map(|m| m.raw()).collect();
        assert_eq!(moves, vec![0, 1, 2, 3, 4]);

        let outcome = board.apply_move(id(0)).unwrap();
        let piece = board.piece(id(0));
        assert_eq!(piece.position, 1);
        assert!(!piece.has_turned_around);
        assert_eq!(board.current_player(), PlayerId::ONE);
        assert!(outcome.captured.is_empty());
    }

    #[test]
    fn test_legal_moves_skip_finished_pieces() {
        let board = board_with(&[(6, 0, true), (8, 0, true), (9, 3, true)], PlayerId::ONE);
        let moves: Vec<u8> = board.legal_moves().iter().map(|m| m.raw()).collect();
        assert_eq!(moves, vec![5, 7, 9]);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            board.apply_move(id(5)),
            Err(RulesError::WrongPlayerMove {
                piece: id(5),
                player: PlayerId::ZERO
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_finished_piece_rejected() {
        let mut board = board_with(&[(2, 0, true)], PlayerId::ZERO);
        let before = board.clone();
        assert_eq!(board.apply_move(id(2)), Err(RulesError::FinishedPieceMove(id(2))));
        assert_eq!(board, before);
    }

    #[test]
    fn test_raw_ids_validated() {
        let mut board = Board::new();
        assert_eq!(board.apply_move_raw(-1), Err(RulesError::InvalidMoveId(-1)));
        assert_eq!(board.apply_move_raw(10), Err(RulesError::InvalidMoveId(10)));
        assert_eq!(board.apply_move_raw(300), Err(RulesError::InvalidMoveId(300)));
        assert!(board.apply_move_raw(3).is_ok());
    }

    #[test]
    fn test_capture_on_first_step() {
        // Piece 1 (track 2, speed 3) meets piece 5 (track 1) sitting at 2.
        let mut board = board_with(&[(5, 2, false)], PlayerId::ZERO);
        let outcome = board.apply_move(id(1)).unwrap();

        assert_eq!(outcome.captured.as_slice(), &[id(5)]);
        assert_eq!(board.piece(id(5)).position, 0);
        // Lands one past the capture square, not at the nominal 3.
        assert_eq!(board.piece(id(1)).position, 2);
    }

    #[test]
    fn test_capture_mid_move() {
        // Piece 1 (track 2, speed 3): squares 1 and 2 clear, 3 holds piece 7.
        let mut board = board_with(&[(7, 2, false)], PlayerId::ZERO);
        let outcome = board.apply_move(id(1)).unwrap();

        assert_eq!(outcome.captured.as_slice(), &[id(7)]);
        assert_eq!(board.piece(id(7)).position, 0);
        assert_eq!(board.piece(id(1)).position, 4);
    }

    #[test]
    fn test_turned_opponent_resets_to_far_end() {
        let mut board = board_with(&[(5, 1, true)], PlayerId::ZERO);
        board.apply_move(id(0)).unwrap();

        let victim = board.piece(id(5));
        assert_eq!(victim.position, TRACK_END);
        assert!(victim.has_turned_around);
        assert_eq!(board.piece(id(0)).position, 2);
    }

    #[test]
    fn test_chain_capture() {
        // Pieces 5, 6, 7 all sit on piece 0's track at squares 1, 2, 3.
        let mut board = board_with(&[(5, 1, false), (6, 1, false), (7, 1, false)], PlayerId::ZERO);
        let outcome = board.apply_move(id(0)).unwrap();

        assert_eq!(outcome.captured.as_slice(), &[id(5), id(6), id(7)]);
        for raw in [5, 6, 7] {
            assert_eq!(board.piece(id(raw)).position, 0);
        }
        assert_eq!(board.piece(id(0)).position, 4);
        assert_eq!(board.current_player(), PlayerId::ONE);
    }

    #[test]
    fn test_vertical_player_captures_too() {
        // Piece 5 (track 1, speed 3) crosses piece 0 (track 1) parked at 1.
        let mut board = board_with(&[(0, 1, false)], PlayerId::ONE);
        let outcome = board.apply_move(id(5)).unwrap();

        assert_eq!(outcome.captured.as_slice(), &[id(0)]);
        assert_eq!(board.piece(id(0)).position, 0);
        assert_eq!(board.piece(id(5)).position, 2);
    }

    #[test]
    fn test_turn_around_clamps_to_far_end() {
        let mut board = board_with(&[(1, 5, false)], PlayerId::ZERO);
        let outcome = board.apply_move(id(1)).unwrap();

        let piece = board.piece(id(1));
        assert_eq!(piece.position, TRACK_END);
        assert!(piece.has_turned_around);
        assert!(outcome.turned_around);
        assert_eq!(board.speed_of(id(1)), 1);
    }

    #[test]
    fn test_return_leg_finishes_lap() {
        // Piece 0 turned around: speed 1 becomes 3, from 2 it would reach -1.
        let mut board = board_with(&[(0, 2, true)], PlayerId::ZERO);
        let outcome = board.apply_move(id(0)).unwrap();

        let piece = board.piece(id(0));
        assert_eq!(piece.position, 0);
        assert!(piece.is_finished());
        assert!(outcome.finished);
        assert_eq!(board.finished_count(PlayerId::ZERO), 1);
    }

    #[test]
    fn test_winner_needs_four_finished() {
        let three = board_with(&[(0, 0, true), (1, 0, true), (2, 0, true)], PlayerId::ONE);
        assert_eq!(three.winner(), None);
        assert!(!three.is_game_over());

        let four = board_with(
            &[(5, 0, true), (6, 0, true), (7, 0, true), (9, 0, true)],
            PlayerId::ZERO,
        );
        assert_eq!(four.winner(), Some(PlayerId::ONE));
        assert!(four.is_game_over());
        assert_eq!(four.finished_count(PlayerId::ONE), 4);
    }

    #[test]
    fn test_apply_move_is_deterministic() {
        let start = board_with(&[(5, 1, false), (2, 4, false), (8, 3, true)], PlayerId::ZERO);
        for raw in 0..5 {
            let mut a = start.clone();
            let mut b = start.clone();
            assert_eq!(a.apply_move(id(raw)), b.apply_move(id(raw)));
            assert_eq!(a, b);
        }
    }
}
