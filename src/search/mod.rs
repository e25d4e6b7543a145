//! Move search.
//!
//! The searcher runs iterative deepening at the root. For each depth every
//! legal root move is scored in its own pool task by combining:
//!
//! - an alpha-beta value one ply shallower than the depth, over the static
//!   evaluation
//! - the margin of a batch of random playouts from the same position
//!
//! A depth only counts once all its tasks finish. New depths stop starting
//! once a fraction of the time budget is spent, and alpha-beta itself
//! degrades to the static value past the same deadline.
//!
//! ## Usage
//!
//! ```no_run
//! use std::time::Duration;
//! use squadro_ai::core::Board;
//! use squadro_ai::search::{SearchConfig, Searcher};
//!
//! let config = SearchConfig::default().with_max_depth(6).with_seed(7);
//! let mut searcher = Searcher::new(config).unwrap();
//!
//! let board = Board::new();
//! let best = searcher.find_best_move(&board, Duration::from_secs(2)).unwrap();
//! println!("best move: {best:?}");
//! ```

mod alphabeta;
mod config;
mod deadline;
mod error;
mod evaluate;
mod policy;
mod rollout;
mod searcher;
mod stats;

pub use alphabeta::{minimax, AlphaBeta};
pub use config::{ConfigError, SearchConfig};
pub use deadline::Deadline;
pub use error::SearchError;
pub use evaluate::{evaluate, FINISHED_BONUS, WIN_SCORE};
pub use policy::{BlendedEvaluator, RootEvaluator, RootScore};
pub use rollout::{playout, rollout};
pub use searcher::{MoveEvaluation, Searcher};
pub use stats::{DepthSummary, SearchStats};
