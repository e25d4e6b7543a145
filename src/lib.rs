//! # squadro-ai
//!
//! A Squadro playing engine: rules, a parallel iterative-deepening search,
//! and drivers for playing matches.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not sharing**: The live board has a single owner. Search
//!    works on clones, and every pool task owns its copy.
//!
//! 2. **Explicit inputs**: The deadline and random generator are values
//!    passed into the search, so a seeded search is reproducible.
//!
//! 3. **Complete depths only**: A depth's answer is used only after every
//!    root move at that depth has been scored.
//!
//! ## Modules
//!
//! - `core`: Pieces, players, the board, RNG
//! - `rules`: Move application, captures, win detection
//! - `pool`: Fixed-size worker pool with joinable task handles
//! - `search`: Evaluation, rollouts, alpha-beta, iterative deepening
//! - `controller`: Match controller and self-play

pub mod controller;
pub mod core;
pub mod pool;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Board, BoardError, GameRng, Piece, PieceId, PlayerId};

pub use crate::rules::{MoveList, MoveOutcome, RulesError, RulesResult};

pub use crate::pool::{PoolError, TaskError, TaskHandle, WorkerPool};

pub use crate::search::{SearchConfig, SearchError, SearchStats, Searcher};

pub use crate::controller::{
    play_match, ControllerError, ExternalMove, MatchController, MatchRecord, OpponentMove,
    SelfPlayConfig,
};
