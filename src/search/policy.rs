//! Root-move scoring.
//!
//! Each root move is scored by a [`RootEvaluator`] running inside a worker
//! task. The default, [`BlendedEvaluator`], combines an alpha-beta value
//! with a rollout margin; the trait exists so the searcher can be driven
//! with other scorers.

use crate::core::{Board, GameRng};
use crate::rules::RulesResult;

use super::alphabeta::AlphaBeta;
use super::config::SearchConfig;
use super::deadline::Deadline;
use super::rollout::rollout;

/// Score of the position reached by one root move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RootScore {
    /// Blended score the root selection compares.
    pub score: i32,
    /// Alpha-beta value of the position.
    pub alpha_beta: i32,
    /// Player-0 playout wins minus player-1 playout wins.
    pub rollout_margin: i32,
    /// Alpha-beta nodes visited.
    pub nodes: u64,
    /// Playouts run.
    pub simulations: u32,
}

/// Scores the position after a root move.
pub trait RootEvaluator: Send + Sync {
    /// `child` is the position after the root move; `maximizing` is whether
    /// its side to move maximizes. `depth` is the current iteration depth.
    fn evaluate(
        &self,
        child: &Board,
        depth: u32,
        maximizing: bool,
        deadline: &Deadline,
        rng: &mut GameRng,
    ) -> RulesResult<RootScore>;
}

/// Alpha-beta at `depth - 1` blended with random playouts.
#[derive(Clone, Debug, Default)]
pub struct BlendedEvaluator {
    config: SearchConfig,
}

impl BlendedEvaluator {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl RootEvaluator for BlendedEvaluator {
    fn evaluate(
        &self,
        child: &Board,
        depth: u32,
        maximizing: bool,
        deadline: &Deadline,
        rng: &mut GameRng,
    ) -> RulesResult<RootScore> {
        let mut search = AlphaBeta::new(deadline);
        let alpha_beta = search.search_full(child, depth.saturating_sub(1), maximizing)?;

        let simulations = self.config.rollout_simulations;
        let rollout_margin = rollout(child, simulations, rng, self.config.max_rollout_plies)?;

        Ok(RootScore {
            score: self.config.combine(alpha_beta, rollout_margin, depth),
            alpha_beta,
            rollout_margin,
            nodes: search.nodes(),
            simulations,
        })
    }
}
