//! Search configuration parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A config the searcher refuses to run with.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("safety_fraction must be within 0.0..=1.0, got {0}")]
    SafetyFraction(f64),

    #[error("invalid search config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Search configuration parameters.
///
/// The score-blending constants have no derivation behind them; they are
/// kept as tunables with the values the engine has always played with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Deepest iteration attempted (inclusive).
    pub max_depth: u32,

    /// Fraction of the time budget after which no new depth starts and
    /// alpha-beta falls back to the static evaluation.
    /// The remainder is headroom for tasks already running.
    pub safety_fraction: f64,

    /// Random playouts per root move and depth.
    pub rollout_simulations: u32,

    /// Ply cap for one playout (0 = unlimited).
    /// A capped playout counts as neither side winning.
    pub max_rollout_plies: u32,

    /// Weight of the alpha-beta value in the blended score.
    pub exact_weight: f64,

    /// Weight of the normalized rollout margin in the blended score.
    pub rollout_weight: f64,

    /// The rollout term is scaled by `rollout_horizon - depth`.
    pub rollout_horizon: i32,

    /// Worker threads (0 = one per available CPU).
    pub threads: usize,

    /// Seed for the rollout generators.
    /// Same seed produces the same playouts.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 29,
            safety_fraction: 0.8,
            rollout_simulations: 500,
            max_rollout_plies: 10_000,
            exact_weight: 0.7,
            rollout_weight: 0.3,
            rollout_horizon: 60,
            threads: 0,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with a custom number of playouts.
    pub fn with_rollout_simulations(mut self, simulations: u32) -> Self {
        self.rollout_simulations = simulations;
        self
    }

    /// Create a new config with a custom worker count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom safety fraction.
    pub fn with_safety_fraction(mut self, fraction: f64) -> Self {
        self.safety_fraction = fraction;
        self
    }

    /// Parse and validate a config from JSON. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the time budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.safety_fraction) {
            return Err(ConfigError::SafetyFraction(self.safety_fraction));
        }
        Ok(())
    }

    /// Blend an alpha-beta value and a rollout margin for a root move.
    ///
    /// The margin is divided by the simulation count in integer arithmetic
    /// before weighting, and the blend truncates toward zero.
    #[must_use]
    pub fn combine(&self, alpha_beta: i32, rollout_margin: i32, depth: u32) -> i32 {
        // More simulations than `i32::MAX` always truncate the margin to zero.
        let normalized = match i32::try_from(self.rollout_simulations) {
            Ok(simulations) if simulations > 0 => rollout_margin / simulations,
            _ => 0,
        };
        let depth = i32::try_from(depth).unwrap_or(i32::MAX);
        let horizon = f64::from(self.rollout_horizon.saturating_sub(depth));
        (self.exact_weight * f64::from(alpha_beta) + self.rollout_weight * f64::from(normalized) * horizon) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 29);
        assert_eq!(config.rollout_simulations, 500);
        assert!((config.safety_fraction - 0.8).abs() < 1e-9);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_max_depth(4)
            .with_rollout_simulations(20)
            .with_threads(2)
            .with_seed(123);

        assert_eq!(config.max_depth, 4);
        assert_eq!(config.rollout_simulations, 20);
        assert_eq!(config.threads, 2);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_combine_truncates_rollout_margin() {
        let config = SearchConfig::default();
        // 499 / 500 truncates to 0: only the exact term remains.
        assert_eq!(config.combine(100, 499, 1), 70);
        // A clean sweep contributes 0.3 * 1 * (60 - 1).
        assert_eq!(config.combine(100, 500, 1), 87);
        assert_eq!(config.combine(-100, -500, 1), -87);
    }

    #[test]
    fn test_combine_without_rollouts() {
        let config = SearchConfig::default().with_rollout_simulations(0);
        assert_eq!(config.combine(15, 0, 3), 10);
    }

    #[test]
    fn test_combine_with_huge_simulation_count() {
        let config = SearchConfig::default().with_rollout_simulations(u32::MAX);
        assert_eq!(config.combine(0, 1000, 1), 0);
        assert_eq!(config.combine(100, -1000, 1), 70);
    }

    #[test]
    fn test_safety_fraction_out_of_range_rejected() {
        for fraction in [-1.0, 1.5, f64::NAN] {
            let config = SearchConfig::default().with_safety_fraction(fraction);
            assert!(matches!(config.validate(), Err(ConfigError::SafetyFraction(_))));
        }
        assert!(SearchConfig::default().with_safety_fraction(1.0).validate().is_ok());
        assert!(SearchConfig::default().with_safety_fraction(0.0).validate().is_ok());
    }

    #[test]
    fn test_json_with_negative_safety_fraction_rejected() {
        let result = SearchConfig::from_json(r#"{"safety_fraction": -1.0}"#);
        assert!(matches!(result, Err(ConfigError::SafetyFraction(f)) if f == -1.0));

        let result = SearchConfig::from_json("{not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SearchConfig::from_json(r#"{"max_depth": 3, "threads": 1}"#).unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.threads, 1);
        assert_eq!(config.rollout_simulations, 500);
    }
}
