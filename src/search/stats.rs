//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use crate::core::PieceId;

/// Outcome of one completed iterative-deepening depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSummary {
    pub depth: u32,
    pub best_move: PieceId,
    pub best_score: i32,
}

/// Statistics collected during one `find_best_move` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Best move and score of every depth that closed its barrier.
    pub depths: Vec<DepthSummary>,

    /// Root-move tasks submitted to the pool.
    pub tasks: u32,

    /// Alpha-beta nodes visited across all tasks.
    pub nodes: u64,

    /// Random playouts run across all tasks.
    pub simulations: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Deepest depth that completed, or 0 if none did.
    #[must_use]
    pub fn completed_depth(&self) -> u32 {
        self.depths.last().map_or(0, |summary| summary.depth)
    }

    /// Calculate alpha-beta nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.completed_depth(), 0);
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn test_completed_depth_tracks_last_summary() {
        let mut stats = SearchStats::new();
        for depth in 1..=3 {
            stats.depths.push(DepthSummary {
                depth,
                best_move: PieceId::new(2).unwrap(),
                best_score: 0,
            });
        }
        assert_eq!(stats.completed_depth(), 3);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes = 1000;
        stats.time_us = 500_000;

        assert_eq!(stats.nodes_per_second(), 2000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.tasks = 10;
        stats.simulations = 50;

        stats.reset();

        assert_eq!(stats.tasks, 0);
        assert_eq!(stats.simulations, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.nodes = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.nodes, deserialized.nodes);
    }
}
