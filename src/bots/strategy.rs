//! Strategy trait and the named strategy kinds the CLI and sampler build.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameRng, Token};
use crate::error::UnknownStrategy;
use crate::geometry::Column;

use super::baseline::{GreedyStrategy, RandomStrategy, ZeroStackStrategy};

/// Picks the next column for a player.
///
/// Strategies are stateless and only read the board, so one instance can
/// serve many games at once.
pub trait Strategy: Send + Sync {
    /// Short name for logs and error messages.
    fn name(&self) -> &str;

    /// Choose a legal column for `token`.
    ///
    /// Returns `None` only when the board has no legal move.
    fn choose(&self, board: &Board, token: Token, rng: &mut GameRng) -> Option<Column>;
}

/// Named baseline strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Uniformly random legal column.
    #[default]
    Random,
    /// Column (0, 0) while it has room, random afterwards.
    ZeroStack,
    /// Win if possible, block if necessary, random otherwise.
    Greedy,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Random, StrategyKind::ZeroStack, StrategyKind::Greedy];

    /// Instantiate the strategy.
    #[must_use]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy),
            StrategyKind::ZeroStack => Box::new(ZeroStackStrategy),
            StrategyKind::Greedy => Box::new(GreedyStrategy),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::ZeroStack => "stack",
            StrategyKind::Greedy => "greedy",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(StrategyKind::Random),
            "stack" | "zero-stack" => Ok(StrategyKind::ZeroStack),
            "greedy" => Ok(StrategyKind::Greedy),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}
