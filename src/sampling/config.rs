//! Sampling configuration parameters.

use serde::{Deserialize, Serialize};

use crate::bots::StrategyKind;

/// Configuration for a batch of independent matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Number of matches to play.
    pub games: u64,

    /// Base seed. Game `i` uses the stream `GameRng::new(seed).for_game(i)`,
    /// so results do not depend on scheduling.
    pub seed: u64,

    /// Strategy playing White (moves first).
    pub white: StrategyKind,

    /// Strategy playing Black.
    pub black: StrategyKind,

    /// Spread games over the rayon thread pool.
    pub parallel: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            seed: 42,
            white: StrategyKind::Random,
            black: StrategyKind::Random,
            parallel: true,
        }
    }
}

impl SampleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_white(mut self, kind: StrategyKind) -> Self {
        self.white = kind;
        self
    }

    pub fn with_black(mut self, kind: StrategyKind) -> Self {
        self.black = kind;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
