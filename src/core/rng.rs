//! Deterministic random number generation for bots and sampling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical matches
//! - **Per-game streams**: Game `i` of a sample gets its own stream, so
//!   sequential and parallel sampling see the same randomness
//!
//! ```
//! use sogo::core::GameRng;
//!
//! let base = GameRng::new(42);
//! let mut game0 = base.for_game(0);
//! let mut again = GameRng::new(42).for_game(0);
//! assert_eq!(game0.gen_range_usize(0..100), again.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG backed by ChaCha8.
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

    /// Stream for game number `index` of a sample.
    ///
    /// Depends only on the seed and the index, never on how many numbers
    /// were drawn before, so games can run in any order.
    #[must_use]
    pub fn for_game(&self, index: u64) -> Self {
        let mixed = (self.seed ^ index.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA)).rotate_left(17);
        Self::new(mixed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
