//! # sogo
//!
//! Rules engine for Sogo ("Score Four"): connect-four in a 4×4×4 cube.
//!
//! ## Design Principles
//!
//! 1. **Geometry Once**: The 76 winning lines are enumerated, checked and
//!    cross-validated a single time. The resulting `Catalog` is immutable
//!    and shared by every board through an `Arc`.
//!
//! 2. **Incremental Victory**: Each board keeps one occupancy counter per
//!    line. A move touches only the (at most 7) lines through its cell and
//!    compares tokens only when a counter reaches four.
//!
//! 3. **Explicit Outcomes**: Illegal placements are `Err` values that
//!    leave the board untouched; a move reports every line it completed.
//!
//! ## Modules
//!
//! - `core`: Player tokens and deterministic RNG
//! - `geometry`: Cells, columns, lines and the catalog
//! - `board`: Per-game state, placement, victory detection, text dump
//! - `bots`: Random, zero-stack and greedy baseline strategies
//! - `sampling`: Match driver and batch sampler
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use sogo::{Board, Catalog, Token};
//!
//! let catalog = Arc::new(Catalog::build());
//! let mut board = Board::new(catalog);
//!
//! for _ in 0..3 {
//!     assert!(!board.place(0, 0, Token::White).unwrap().is_win());
//! }
//! let result = board.place(0, 0, Token::White).unwrap();
//! assert_eq!(result.winner(), Some(Token::White));
//! ```

pub mod board;
pub mod bots;
pub mod core;
pub mod error;
pub mod geometry;
pub mod sampling;

// Re-export commonly used types
pub use crate::core::{GameRng, Token, TokenMap};

pub use crate::error::{CatalogError, MatchError, PlacementError, RangeError, UnknownStrategy};

pub use crate::geometry::{Catalog, Cell, CellClass, CellSet, Column, Line, LineId, LineKind, Step};

pub use crate::board::{Board, MoveResult, Status};

pub use crate::bots::{GreedyStrategy, RandomStrategy, Strategy, StrategyKind, ZeroStackStrategy};

pub use crate::sampling::{play_match, MatchRecord, Outcome, SampleConfig, SampleStats, Sampler};
