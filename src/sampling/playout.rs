//! Playing one match between two strategies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::Board;
use crate::bots::Strategy;
use crate::core::{GameRng, Token};
use crate::error::MatchError;
use crate::geometry::{Column, Line, CELL_COUNT};

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// This token completed a line.
    Win(Token),
    /// The cube filled up with no completed line.
    Draw,
}

impl Outcome {
    #[must_use]
    pub fn winner(self) -> Option<Token> {
        match self {
            Outcome::Win(token) => Some(token),
            Outcome::Draw => None,
        }
    }
}

/// A finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub outcome: Outcome,
    /// Columns played, White first.
    pub moves: Vec<Column>,
    /// Lines completed by the final move (empty for a draw).
    pub winning_lines: SmallVec<[Line; 2]>,
}

impl MatchRecord {
    /// Number of tokens placed.
    #[must_use]
    pub fn length(&self) -> usize {
        self.moves.len()
    }
}

/// Play a match from an empty board.
///
/// The board is reset first. White moves first; the match stops on the
/// first move that completes a line, or when the cube is full.
pub fn play_match(
    board: &mut Board,
    white: &dyn Strategy,
    black: &dyn Strategy,
    rng: &mut GameRng,
) -> Result<MatchRecord, MatchError> {
    board.reset();
    let mut moves = Vec::with_capacity(CELL_COUNT);
    let mut token = Token::White;

    while !board.is_full() {
        let strategy = match token {
            Token::White => white,
            Token::Black => black,
        };

        let column = strategy.choose(board, token, rng).ok_or_else(|| MatchError::NoMove {
            token,
            strategy: strategy.name().to_string(),
        })?;

        let result = board.play(column, token).map_err(|source| MatchError::IllegalMove {
            token,
            strategy: strategy.name().to_string(),
            source,
        })?;
        moves.push(column);

        if result.is_win() {
            debug!(winner = %token, moves = moves.len(), "match won");
            return Ok(MatchRecord {
                outcome: Outcome::Win(token),
                moves,
                winning_lines: result.winning_lines,
            });
        }

        token = !token;
    }

    debug!(moves = moves.len(), "match drawn");
    Ok(MatchRecord {
        outcome: Outcome::Draw,
        moves,
        winning_lines: SmallVec::new(),
    })
}
