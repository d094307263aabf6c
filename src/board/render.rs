//! Plain-text dump of a board, top layer first.
//!
//! ```text
//! Layer 3:
//! ....
//! ....
//! ....
//! ....
//! Layer 2:
//! (layers 2 and 1 elided)
//! Layer 0:
//! O...
//! .X..
//! ....
//! ....
//! ```
//!
//! Rows are `y = 0..4`, columns within a row are `x = 0..4`.

use std::fmt;

use crate::geometry::SIZE;

use super::engine::Board;

/// Character for an empty cell.
pub const EMPTY_MARKER: char = '.';

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in (0..SIZE).rev() {
            writeln!(f, "Layer {z}:")?;
            for y in 0..SIZE {
                let row: String = (0..SIZE)
                    .map(|x| self.cell_at(x, y, z).map_or(EMPTY_MARKER, |t| t.marker()))
                    .collect();
                writeln!(f, "{row}")?;
            }
        }
        Ok(())
    }
}
