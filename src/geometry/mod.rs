//! Cube geometry: cells, columns, winning lines and the catalog tying them
//! together.
//!
//! The catalog is the only place lines are enumerated. Boards hold a shared
//! reference to it and never build their own.

pub mod catalog;
pub mod cell;
pub mod line;
pub mod sweep;

pub use catalog::{Catalog, LINE_COUNT, MAX_LINES_PER_CELL};
pub use cell::{Cell, CellClass, CellSet, Column, CELL_COUNT, COLUMN_COUNT, SIZE};
pub use line::{Line, LineId, LineKind, Step, LINE_LENGTH};
