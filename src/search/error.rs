//! Errors surfaced by the searcher.

use thiserror::Error;

use crate::pool::{PoolError, TaskError};
use crate::rules::RulesError;

use super::config::ConfigError;

/// A search that could not produce a trustworthy move.
///
/// Never raised for ordinary positions; an empty move list is `Ok(None)`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A root-move task panicked or was dropped; the depth was abandoned.
    #[error("root move evaluation failed: {0}")]
    Task(#[from] TaskError),

    /// The searcher was built with an unusable config.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The worker pool could not start or accept work.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// The rules engine rejected a move generated by the search itself.
    #[error("rules violation during search: {0}")]
    Rules(#[from] RulesError),
}
