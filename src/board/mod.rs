//! The board engine: one game's occupancy, line counters and status.
//!
//! - `engine`: placement, legality and incremental victory detection
//! - `render`: text dump used by the CLI

pub mod engine;
pub mod render;

pub use engine::{Board, MoveResult, Status};
pub use render::EMPTY_MARKER;
