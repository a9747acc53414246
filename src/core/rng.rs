//! Injectable randomness for dealing.
//!
//! Shuffling is the only non-deterministic input to the engine. It is
//! isolated behind the [`RandomSource`] capability so that hosts can pass a
//! seeded generator and tests can pass a scripted one.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal
//! - **Serializable**: O(1) state capture and restore for replays
//!
//! ```
//! use klondike_engine::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.gen_range_usize(0..52), rng2.gen_range_usize(0..52));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniformly distributed indices.
///
/// `next_index(upper)` must return a value in `0..upper` with every value
/// equally likely. `upper` is always at least 1.
pub trait RandomSource {
    /// Draw an index in `0..upper`.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

/// Seedable ChaCha8 generator, the default [`RandomSource`].
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

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
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

impl RandomSource for GameRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range_usize(0..upper)
    }
}

/// Serializable RNG state for replays.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many deals have been shuffled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
