//! Core value types: players, pieces, the board snapshot, and the RNG.
//!
//! Everything here is plain data. State transitions live in
//! [`crate::rules`]; nothing in this module knows how pieces move.

pub mod board;
pub mod piece;
pub mod player;
pub mod rng;

pub use board::{Board, BoardError};
pub use piece::{Piece, PieceId, PIECES_PER_PLAYER, PIECE_COUNT, TRACK_END};
pub use player::{PlayerId, PLAYER_COUNT};
pub use rng::GameRng;
