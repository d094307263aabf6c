//! Engine errors.

use thiserror::Error;

use crate::core::Token;
use crate::geometry::{CellSet, LineId, LineKind};

/// A placement the board refused. The board is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("column ({x}, {y}) is outside the 4x4 grid")]
    OutOfBounds { x: u8, y: u8 },

    #[error("column ({x}, {y}) has no space left")]
    ColumnFull { x: u8, y: u8 },
}

/// A deserialized cell or line id that does not exist in the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("cell ({x}, {y}, {z}) is outside the 4x4x4 cube")]
    Cell { x: u8, y: u8, z: u8 },

    #[error("line id {0} is outside the catalog")]
    Line(u8),
}

/// Geometry catalog invariant violation.
///
/// Only produced while building the catalog; a catalog that fails any of
/// these checks is never handed out.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("line from {start:?} with step {step:?} is malformed: {reason}")]
    MalformedLine {
        start: (i8, i8, i8),
        step: (i8, i8, i8),
        reason: &'static str,
    },

    #[error("expected {expected} {kind:?} lines, found {found}")]
    FamilyCount {
        kind: LineKind,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} lines in total, found {found}")]
    TotalCount { expected: usize, found: usize },

    #[error("lines {first} and {second} cover the same cells {cells}")]
    DuplicateLine {
        first: LineId,
        second: LineId,
        cells: CellSet,
    },

    #[error("sweep generator disagrees: {missing} lines missing from catalog, {extra} lines not found by sweep")]
    CrossValidation { missing: usize, extra: usize },
}

/// A match could not be played to the end.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("{strategy} ({token}) returned no move while legal moves remain")]
    NoMove { token: Token, strategy: String },

    #[error("{strategy} ({token}) chose an illegal move")]
    IllegalMove {
        token: Token,
        strategy: String,
        #[source]
        source: PlacementError,
    },
}

/// A strategy name that does not match any known strategy.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown strategy `{0}` (expected random, stack or greedy)")]
pub struct UnknownStrategy(pub String);
