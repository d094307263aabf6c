//! Baseline move strategies.
//!
//! These are consumers of the board API, not part of the rules: each is
//! handed a read-only board and returns one legal column.
//!
//! - `RandomStrategy`: uniform over legal columns
//! - `ZeroStackStrategy`: stacks (0, 0) first
//! - `GreedyStrategy`: one-move lookahead (win, else block)

pub mod baseline;
pub mod strategy;

pub use baseline::{GreedyStrategy, RandomStrategy, ZeroStackStrategy};
pub use strategy::{Strategy, StrategyKind};
