//! Game drivers built on the searcher.
//!
//! - [`MatchController`]: the engine's side of a match against an external
//!   opponent, including the 1-based player and pawn numbering used on the
//!   wire
//! - [`play_match`]: the engine against itself

mod match_controller;
mod self_play;

pub use match_controller::{
    ControllerError, ExternalMove, MatchController, OpponentMove, DEFAULT_MOVE_TIME,
};
pub use self_play::{play_match, MatchRecord, PlyRecord, SelfPlayConfig};
