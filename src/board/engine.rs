//! Per-game board state with incremental victory detection.
//!
//! ## Counters
//!
//! Every line carries an occupancy counter: how many of its four cells hold
//! a token of either colour. Placing a token bumps the counters of the lines
//! through that cell only. When a counter reaches four, the line's cells are
//! compared; a line full of one colour is a win, a mixed full line is dead
//! and is never looked at again.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::Token;
use crate::error::PlacementError;
use crate::geometry::{Catalog, Cell, Column, Line, LineId, CELL_COUNT, COLUMN_COUNT, LINE_COUNT, LINE_LENGTH, SIZE};

/// Lifecycle of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Nothing placed yet.
    Empty,
    /// Tokens placed, no completed line.
    InProgress,
    /// A line was completed by this token. Terminal.
    Decided(Token),
}

/// Outcome of a single placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Token that was placed.
    pub token: Token,
    /// Cell the token came to rest in.
    pub placed_at: Cell,
    /// Every line this move completed with four equal tokens.
    pub winning_lines: SmallVec<[Line; 2]>,
}

impl MoveResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.winning_lines.is_empty()
    }

    /// The placed token if the move completed at least one line.
    #[must_use]
    pub fn winner(&self) -> Option<Token> {
        self.is_win().then_some(self.token)
    }

    /// Column height after the move.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.placed_at.z() + 1
    }
}

/// One game's board.
///
/// Cheap to clone and to reset; the catalog is shared, never copied.
#[derive(Clone, Debug)]
pub struct Board {
    catalog: Arc<Catalog>,
    cells: [Option<Token>; CELL_COUNT],
    counters: [u8; LINE_COUNT],
    heights: [u8; COLUMN_COUNT],
    moves: u8,
    status: Status,
}

impl Board {
    /// Create an empty board over a shared catalog.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            cells: [None; CELL_COUNT],
            counters: [0; LINE_COUNT],
            heights: [0; COLUMN_COUNT],
            moves: 0,
            status: Status::Empty,
        }
    }

    /// The catalog this board was built over.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Return to the empty state. The catalog is kept.
    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
        self.counters = [0; LINE_COUNT];
        self.heights = [0; COLUMN_COUNT];
        self.moves = 0;
        self.status = Status::Empty;
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<Token> {
        match self.status {
            Status::Decided(token) => Some(token),
            _ => None,
        }
    }

    /// Tokens placed since the last reset.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.moves as usize
    }

    /// Every cell occupied?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.moves_played() == CELL_COUNT
    }

    /// Token at `(x, y, z)`; `None` for an empty cell or coordinates outside
    /// the cube.
    #[must_use]
    pub fn cell_at(&self, x: u8, y: u8, z: u8) -> Option<Token> {
        Cell::new(x, y, z).and_then(|cell| self.get(cell))
    }

    /// Token in a cell.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Token> {
        self.cells[cell.index()]
    }

    /// Occupied cells on a line.
    #[must_use]
    pub fn counter(&self, id: LineId) -> u8 {
        self.counters[id.index()]
    }

    /// Number of tokens in column `(x, y)`, i.e. the lowest free `z`.
    pub fn column_height(&self, x: u8, y: u8) -> Result<u8, PlacementError> {
        Column::new(x, y).map(|column| self.height(column))
    }

    /// Height of a validated column.
    #[must_use]
    pub fn height(&self, column: Column) -> u8 {
        self.heights[column.index()]
    }

    /// Cell the next token dropped into `column` would land in, or `None`
    /// if the column is full.
    #[must_use]
    pub fn landing_cell(&self, column: Column) -> Option<Cell> {
        column.cell(self.height(column))
    }

    /// Columns that still have room, in column-index order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Column> {
        Column::all().filter(|&c| self.height(c) < SIZE).collect()
    }

    /// Would dropping `token` into `column` complete a line of that token?
    ///
    /// Read-only; used by strategies to look one move ahead.
    #[must_use]
    pub fn would_win(&self, column: Column, token: Token) -> bool {
        let Some(cell) = self.landing_cell(column) else {
            return false;
        };
        self.catalog.lines_through(cell).iter().any(|&id| {
            self.counters[id.index()] as usize == LINE_LENGTH - 1
                && self
                    .catalog
                    .line(id)
                    .cells()
                    .iter()
                    .filter(|&&c| c != cell)
                    .all(|&c| self.get(c) == Some(token))
        })
    }

    /// Every column where `token` would win immediately.
    #[must_use]
    pub fn winning_moves(&self, token: Token) -> Vec<Column> {
        Column::all().filter(|&c| self.would_win(c, token)).collect()
    }

    // === Mutation ===

    /// Drop `token` into column `(x, y)`.
    ///
    /// Rejects coordinates outside the grid and full columns before touching
    /// any state. Placing after the game is decided is allowed; the status
    /// stays with the first winner.
    pub fn place(&mut self, x: u8, y: u8, token: Token) -> Result<MoveResult, PlacementError> {
        let column = Column::new(x, y)?;
        let cell = self
            .landing_cell(column)
            .ok_or(PlacementError::ColumnFull { x, y })?;

        self.cells[cell.index()] = Some(token);
        self.heights[column.index()] += 1;
        self.moves += 1;

        let mut winning_lines = SmallVec::new();
        for &id in self.catalog.lines_through(cell) {
            let counter = &mut self.counters[id.index()];
            *counter += 1;
            // Only the transition to full triggers a check.
            if *counter as usize == LINE_LENGTH {
                let line = self.catalog.line(id);
                if line.cells().iter().all(|&c| self.cells[c.index()] == Some(token)) {
                    winning_lines.push(*line);
                }
            }
        }

        trace!(%token, %cell, completed = winning_lines.len(), "placed token");

        self.status = match self.status {
            Status::Decided(first) => Status::Decided(first),
            _ if !winning_lines.is_empty() => Status::Decided(token),
            _ => Status::InProgress,
        };

        Ok(MoveResult {
            token,
            placed_at: cell,
            winning_lines,
        })
    }

    /// Drop a token into an already validated column.
    pub fn play(&mut self, column: Column, token: Token) -> Result<MoveResult, PlacementError> {
        self.place(column.x(), column.y(), token)
    }
}
