//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Injectable**: Shuffling only needs a [`ShuffleSource`], so tests can
//!   script the exact permutation
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use klondike_engine::core::{GameRng, ShuffleSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.index_up_to(51), b.index_up_to(51));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform indices for Fisher–Yates shuffling.
pub trait ShuffleSource {
    /// Return a uniformly chosen integer in `0..=upper`.
    fn index_up_to(&mut self, upper: usize) -> usize;
}

/// Deterministic RNG backing the engine's shuffles.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl ShuffleSource for GameRng {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many shuffles have been performed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
