//! Squadro rules.
//!
//! Move generation, the capture/chain state transition, and terminal
//! detection are implemented directly on [`Board`](crate::core::Board):
//! - `legal_moves()`: unfinished pieces of the player on move
//! - `apply_move(id)`: validate, move, capture, clamp, pass the turn
//! - `winner()` / `is_game_over()`: four finished pieces win
//!
//! Rule violations surface as [`RulesError`] and are never corrected
//! silently.

pub mod engine;
pub mod error;
pub mod speed;

pub use engine::{MoveList, MoveOutcome, PIECES_TO_WIN};
pub use error::{RulesError, RulesResult};
pub use speed::{base_speed, effective_speed, HORIZONTAL_SPEEDS, VERTICAL_SPEEDS};
