//! Cells, columns and cell sets of the 4×4×4 cube.

use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, RangeError};

/// Edge length of the cube.
pub const SIZE: u8 = 4;

/// Number of cells in the cube.
pub const CELL_COUNT: usize = 64;

/// Number of (x, y) columns.
pub const COLUMN_COUNT: usize = 16;

/// A cell of the cube, addressed by `(x, y, z)` with `z` the height.
///
/// Coordinates are always in `0..4`: fields are private, and both the
/// constructors and deserialization reject anything outside the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    x: u8,
    y: u8,
    z: u8,
}

#[derive(Deserialize)]
struct RawCell {
    x: u8,
    y: u8,
    z: u8,
}

impl TryFrom<RawCell> for Cell {
    type Error = RangeError;

    fn try_from(RawCell { x, y, z }: RawCell) -> Result<Self, Self::Error> {
        Cell::new(x, y, z).ok_or(RangeError::Cell { x, y, z })
    }
}

impl Cell {
    /// Create a cell, or `None` if any coordinate is outside the cube.
    #[must_use]
    pub fn new(x: u8, y: u8, z: u8) -> Option<Self> {
        (x < SIZE && y < SIZE && z < SIZE).then_some(Self { x, y, z })
    }

    /// Create a cell from signed coordinates, as produced by stepping
    /// along a direction vector.
    #[must_use]
    pub fn from_signed(x: i8, y: i8, z: i8) -> Option<Self> {
        let x = u8::try_from(x).ok()?;
        let y = u8::try_from(y).ok()?;
        let z = u8::try_from(z).ok()?;
        Self::new(x, y, z)
    }

    /// Cell for a flat index `x + 4y + 16z`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let i = index as u8;
        Some(Self {
            x: i % SIZE,
            y: (i / SIZE) % SIZE,
            z: i / (SIZE * SIZE),
        })
    }

    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Height above the floor.
    #[must_use]
    pub const fn z(self) -> u8 {
        self.z
    }

    /// Signed coordinates, for stepping along direction vectors.
    #[must_use]
    pub const fn signed(self) -> (i8, i8, i8) {
        (self.x as i8, self.y as i8, self.z as i8)
    }

    /// Flat index `x + 4y + 16z`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.x as usize + 4 * self.y as usize + 16 * self.z as usize
    }

    /// The column this cell sits in.
    #[must_use]
    pub const fn column(self) -> Column {
        Column { x: self.x, y: self.y }
    }

    /// Position class, by how many coordinates lie on the cube boundary.
    #[must_use]
    pub fn class(self) -> CellClass {
        let on_boundary = [self.x, self.y, self.z]
            .iter()
            .filter(|&&c| c == 0 || c == SIZE - 1)
            .count();
        match on_boundary {
            3 => CellClass::Corner,
            2 => CellClass::Edge,
            1 => CellClass::Face,
            _ => CellClass::Interior,
        }
    }

    /// All 64 cells in flat-index order.
    pub fn all() -> impl Iterator<Item = Cell> + Clone {
        (0..CELL_COUNT).filter_map(Cell::from_index)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Where a cell sits in the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellClass {
    /// All three coordinates on the boundary (8 cells).
    Corner,
    /// Two coordinates on the boundary (24 cells).
    Edge,
    /// One coordinate on the boundary (24 cells).
    Face,
    /// No coordinate on the boundary (8 cells).
    Interior,
}

/// An `(x, y)` column; tokens fall to its lowest free cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawColumn")]
pub struct Column {
    x: u8,
    y: u8,
}

#[derive(Deserialize)]
struct RawColumn {
    x: u8,
    y: u8,
}

impl TryFrom<RawColumn> for Column {
    type Error = PlacementError;

    fn try_from(RawColumn { x, y }: RawColumn) -> Result<Self, Self::Error> {
        Column::new(x, y)
    }
}

impl Column {
    /// The corner column `(0, 0)`.
    pub const ORIGIN: Column = Column { x: 0, y: 0 };

    /// Create a column, rejecting coordinates outside the 4×4 grid.
    pub fn new(x: u8, y: u8) -> Result<Self, PlacementError> {
        if x < SIZE && y < SIZE {
            Ok(Self { x, y })
        } else {
            Err(PlacementError::OutOfBounds { x, y })
        }
    }

    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Flat column index `x + 4y`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.x as usize + 4 * self.y as usize
    }

    /// The cell at height `z` in this column.
    #[must_use]
    pub fn cell(self, z: u8) -> Option<Cell> {
        Cell::new(self.x, self.y, z)
    }

    /// All 16 columns in flat-index order.
    pub fn all() -> impl Iterator<Item = Column> + Clone {
        (0..SIZE).flat_map(|y| (0..SIZE).map(move |x| Column { x, y }))
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unordered set of cells as a 64-bit mask (bit `i` = flat index `i`).
///
/// Two lines are the same line exactly when their cell sets are equal,
/// whatever order or direction they were traced in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellSet(pub u64);

impl CellSet {
    /// Add a cell; returns `false` if it was already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let bit = 1u64 << cell.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        self.0 & (1u64 << cell.index()) != 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Cells in flat-index order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        Cell::all().filter(move |&c| self.contains(c))
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::default();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl std::fmt::Display for CellSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.cells().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}}")
    }
}
