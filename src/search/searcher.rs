//! Iterative-deepening root search over the worker pool.
//!
//! Every depth fans out one task per legal root move, then waits for all of
//! them before picking a best move. Only depths that close that barrier
//! update the answer, so a move that is returned was always scored by a
//! complete depth.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::core::{Board, GameRng, PieceId};
use crate::pool::{join_all, WorkerPool};
use crate::rules::RulesResult;

use super::config::SearchConfig;
use super::deadline::Deadline;
use super::error::SearchError;
use super::policy::{BlendedEvaluator, RootEvaluator, RootScore};
use super::stats::{DepthSummary, SearchStats};

/// Score of one root move at one depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub piece: PieceId,
    pub score: RootScore,
}

/// Iterative-deepening searcher.
///
/// Owns the worker pool and the generator root tasks are seeded from.
/// Reusing one searcher across moves keeps the threads alive.
pub struct Searcher {
    /// Search configuration.
    config: SearchConfig,

    /// Threads the root tasks run on.
    pool: WorkerPool,

    /// Root generator; each task gets a fork.
    rng: GameRng,

    /// Scores a root move inside a task.
    evaluator: Arc<dyn RootEvaluator>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl Searcher {
    /// Validate `config`, then start the worker pool.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let pool = WorkerPool::new(config.threads)?;
        Ok(Self {
            rng: GameRng::new(config.seed),
            evaluator: Arc::new(BlendedEvaluator::new(config.clone())),
            config,
            pool,
            stats: SearchStats::default(),
        })
    }

    /// Set a custom root evaluator.
    pub fn with_evaluator<R: RootEvaluator + 'static>(mut self, evaluator: R) -> Self {
        self.evaluator = Arc::new(evaluator);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick a move for the side to move on `board` within `time_budget`.
    ///
    /// Returns `Ok(None)` when there is no legal move. A lone legal move is
    /// returned without searching. Otherwise depths 1 through `max_depth`
    /// are searched in order until the usable part of the budget is spent.
    /// If no depth completes, the first legal move is returned.
    pub fn find_best_move(
        &mut self,
        board: &Board,
        time_budget: Duration,
    ) -> Result<Option<PieceId>, SearchError> {
        let deadline = Deadline::starting_now(time_budget, self.config.safety_fraction);
        self.stats.reset();

        let moves = board.legal_moves();
        let Some(&first) = moves.first() else {
            return Ok(None);
        };
        if moves.len() == 1 {
            debug!("single legal move {first}, skipping search");
            return Ok(Some(first));
        }

        let maximizing = board.current_player().is_maximizing();
        let mut best = first;

        for depth in 1..=self.config.max_depth {
            if deadline.has_passed() {
                info!(
                    "time cutoff before depth {depth} after {:?}",
                    deadline.elapsed()
                );
                break;
            }

            let evaluations = self.evaluate_depth(board, &moves, depth, &deadline)?;
            let Some(chosen) = select(&evaluations, maximizing) else {
                break;
            };
            best = chosen.piece;

            debug!(
                "depth {depth} complete: best {} score {} ({:?})",
                chosen.piece,
                chosen.score.score,
                deadline.elapsed()
            );
            self.stats.depths.push(DepthSummary {
                depth,
                best_move: chosen.piece,
                best_score: chosen.score.score,
            });
        }

        self.stats.time_us = deadline.elapsed().as_micros() as u64;
        info!(
            "{} plays {best} after depth {} ({} nodes, {:?})",
            board.current_player(),
            self.stats.completed_depth(),
            self.stats.nodes,
            deadline.elapsed()
        );
        Ok(Some(best))
    }

    /// Score every root move at `depth`, one pool task per move.
    fn evaluate_depth(
        &mut self,
        board: &Board,
        moves: &[PieceId],
        depth: u32,
        deadline: &Deadline,
    ) -> Result<Vec<MoveEvaluation>, SearchError> {
        let child_maximizing = !board.current_player().is_maximizing();

        let mut handles = Vec::with_capacity(moves.len());
        for &piece in moves {
            let board = board.clone();
            let deadline = *deadline;
            let evaluator = Arc::clone(&self.evaluator);
            let mut rng = self.rng.fork();

            handles.push(self.pool.submit(move || -> RulesResult<MoveEvaluation> {
                let mut child = board;
                child.apply_move(piece)?;
                let score = evaluator.evaluate(&child, depth, child_maximizing, &deadline, &mut rng)?;
                Ok(MoveEvaluation { piece, score })
            })?);
            self.stats.tasks += 1;
        }

        let results = join_all(handles).inspect_err(|err| {
            warn!("abandoning depth {depth}: {err}");
        })?;

        let mut evaluations = Vec::with_capacity(results.len());
        for result in results {
            let evaluation = result?;
            self.stats.nodes += evaluation.score.nodes;
            self.stats.simulations += u64::from(evaluation.score.simulations);
            evaluations.push(evaluation);
        }
        Ok(evaluations)
    }
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("config", &self.config)
            .field("pool", &self.pool)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Highest score for player 0, lowest for player 1. The earliest move wins
/// ties.
fn select(evaluations: &[MoveEvaluation], maximizing: bool) -> Option<MoveEvaluation> {
    let mut iter = evaluations.iter().copied();
    let mut best = iter.next()?;
    for evaluation in iter {
        let better = if maximizing {
            evaluation.score.score > best.score.score
        } else {
            evaluation.score.score < best.score.score
        };
        if better {
            best = evaluation;
        }
    }
    Some(best)
}
