//! Engine-versus-engine matches.
//!
//! Each side gets its own searcher, seeded from the match seed, and both
//! play on one live board until the game ends or the ply cap is hit.

use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{Board, PieceId, PlayerId};
use crate::search::{SearchConfig, SearchError, Searcher};

/// Configuration for self-play.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Thinking time per move.
    pub move_time: Duration,

    /// Maximum plies before the match is abandoned undecided.
    pub max_plies: u32,

    /// Base seed; player 0 searches with it, player 1 with the next value.
    pub seed: u64,

    /// Search settings shared by both sides. Its seed is overridden.
    pub search: SearchConfig,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            move_time: Duration::from_secs(1),
            max_plies: 400,
            seed: 0,
            search: SearchConfig::default(),
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set thinking time per move.
    pub fn with_move_time(mut self, move_time: Duration) -> Self {
        self.move_time = move_time;
        self
    }

    /// Set maximum plies per match.
    pub fn with_max_plies(mut self, max: u32) -> Self {
        self.max_plies = max;
        self
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the search settings.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// One move of a recorded match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    /// Zero-based ply number.
    pub ply: u32,
    pub player: PlayerId,
    pub piece: PieceId,
    /// Opponents sent back by this move.
    pub captured: Vec<PieceId>,
}

/// A finished or abandoned match.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchRecord {
    pub plies: Vec<PlyRecord>,
    /// `None` if the ply cap was reached first.
    pub winner: Option<PlayerId>,
    pub final_board: Board,
}

impl MatchRecord {
    /// Number of plies played.
    pub fn len(&self) -> usize {
        self.plies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plies.is_empty()
    }
}

/// Play the engine against itself.
pub fn play_match(config: &SelfPlayConfig) -> Result<MatchRecord, SearchError> {
    let mut searchers = [
        Searcher::new(config.search.clone().with_seed(config.seed))?,
        Searcher::new(config.search.clone().with_seed(config.seed.wrapping_add(1)))?,
    ];

    let mut board = Board::new();
    let mut record = MatchRecord::default();

    for ply in 0..config.max_plies {
        if board.is_game_over() {
            break;
        }
        let player = board.current_player();
        let Some(piece) = searchers[player.index()].find_best_move(&board, config.move_time)? else {
            break;
        };

        let outcome = board.apply_move(piece)?;
        info!("ply {ply}: {player} moves {piece}");
        record.plies.push(PlyRecord {
            ply,
            player,
            piece,
            captured: outcome.captured.to_vec(),
        });
    }

    record.winner = board.winner();
    match record.winner {
        Some(winner) => info!("{winner} wins after {} plies", record.len()),
        None => info!("no winner after {} plies", record.len()),
    }
    record.final_board = board;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> SelfPlayConfig {
        SelfPlayConfig::new()
            .with_move_time(Duration::from_secs(30))
            .with_search(
                SearchConfig::default()
                    .with_max_depth(1)
                    .with_rollout_simulations(2)
                    .with_threads(2),
            )
    }

    #[test]
    fn test_config_builder() {
        let config = SelfPlayConfig::new().with_max_plies(12).with_seed(77);
        assert_eq!(config.max_plies, 12);
        assert_eq!(config.seed, 77);
        assert_eq!(config.move_time, Duration::from_secs(1));
    }

    #[test]
    fn test_ply_cap_stops_match() {
        let record = play_match(&quick_config().with_max_plies(6)).unwrap();

        assert_eq!(record.len(), 6);
        assert_eq!(record.winner, None);
        for (index, ply) in record.plies.iter().enumerate() {
            assert_eq!(ply.ply as usize, index);
            let expected = if index % 2 == 0 { PlayerId::ZERO } else { PlayerId::ONE };
            assert_eq!(ply.player, expected);
            assert_eq!(ply.piece.owner(), expected);
        }
    }

    #[test]
    fn test_record_serialization() {
        let record = play_match(&quick_config().with_max_plies(2)).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let restored: MatchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.plies, record.plies);
        assert_eq!(restored.final_board, record.final_board);
    }
}
