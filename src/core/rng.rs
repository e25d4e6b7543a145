//! Seedable random source for rollouts.
//!
//! Rollouts never read an ambient generator; the searcher owns one seeded
//! `GameRng` and hands each worker task its own fork. Two searches with the
//! same seed over the same completed depths therefore play identical
//! playouts.
//!
//! ```
//! use squadro_ai::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut task_rng = rng.fork();
//!
//! let mut again = GameRng::new(42);
//! let mut task_again = again.fork();
//!
//! assert_eq!(task_rng.gen_index(100), task_again.gen_index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Multiplier spreading fork seeds apart (64-bit golden ratio).
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG with forking, backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent child generator.
    ///
    /// The n-th fork of a generator seeded with `s` is always the same
    /// stream, no matter how many numbers the parent has drawn.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Pick a uniformly random element, or `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        items.choose(&mut self.inner)
    }
}
