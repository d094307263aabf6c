//! Baseline strategies: no search, at most one move of lookahead.

use crate::board::Board;
use crate::core::{GameRng, Token};
use crate::geometry::Column;

use super::strategy::Strategy;

/// Plays a uniformly random legal column.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&self, board: &Board, _token: Token, rng: &mut GameRng) -> Option<Column> {
        rng.choose(&board.legal_moves()).copied()
    }
}

/// Stacks column (0, 0) until it is full, then plays randomly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroStackStrategy;

impl ZeroStackStrategy {
    const TARGET: Column = Column::ORIGIN;
}

impl Strategy for ZeroStackStrategy {
    fn name(&self) -> &str {
        "stack"
    }

    fn choose(&self, board: &Board, token: Token, rng: &mut GameRng) -> Option<Column> {
        if board.landing_cell(Self::TARGET).is_some() {
            Some(Self::TARGET)
        } else {
            RandomStrategy.choose(board, token, rng)
        }
    }
}

/// Takes an immediate win, otherwise blocks the opponent's immediate win,
/// otherwise plays randomly.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose(&self, board: &Board, token: Token, rng: &mut GameRng) -> Option<Column> {
        let wins = board.winning_moves(token);
        if let Some(&column) = rng.choose(&wins) {
            return Some(column);
        }
        let blocks = board.winning_moves(!token);
        if let Some(&column) = rng.choose(&blocks) {
            return Some(column);
        }
        RandomStrategy.choose(board, token, rng)
    }
}
