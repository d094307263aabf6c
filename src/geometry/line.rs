//! Winning lines: four colinear cells with a constant step.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, RangeError};

use super::catalog::LINE_COUNT;
use super::cell::{Cell, CellSet};

/// Number of cells in a winning line.
pub const LINE_LENGTH: usize = 4;

/// Line identifier, assigned in generation order when the catalog is built.
///
/// Ids are stable for a given build of the crate but are not a wire format.
/// Only the catalog mints them; deserialization rejects ids past the last
/// line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct LineId(pub(crate) u8);

impl TryFrom<u8> for LineId {
    type Error = RangeError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < LINE_COUNT {
            Ok(LineId(id))
        } else {
            Err(RangeError::Line(id))
        }
    }
}

impl LineId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line({})", self.0)
    }
}

/// Step vector between consecutive cells of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub dx: i8,
    pub dy: i8,
    pub dz: i8,
}

impl Step {
    #[must_use]
    pub const fn new(dx: i8, dy: i8, dz: i8) -> Self {
        Self { dx, dy, dz }
    }

    /// How many axes this step moves along.
    #[must_use]
    pub fn axes(self) -> usize {
        [self.dx, self.dy, self.dz].iter().filter(|&&d| d != 0).count()
    }

    #[must_use]
    pub const fn as_tuple(self) -> (i8, i8, i8) {
        (self.dx, self.dy, self.dz)
    }
}

/// Direction family of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Parallel to one axis (48 lines).
    Axis,
    /// Diagonal of a face-parallel plane (24 lines).
    PlanarDiagonal,
    /// Corner-to-corner through the interior (4 lines).
    SpaceDiagonal,
}

impl LineKind {
    pub const ALL: [LineKind; 3] = [LineKind::Axis, LineKind::PlanarDiagonal, LineKind::SpaceDiagonal];

    /// Family of a unit step, or `None` for the zero vector or steps
    /// longer than one cell per axis.
    #[must_use]
    pub fn of(step: Step) -> Option<Self> {
        let unit = [step.dx, step.dy, step.dz].iter().all(|d| (-1..=1).contains(d));
        if !unit {
            return None;
        }
        match step.axes() {
            1 => Some(LineKind::Axis),
            2 => Some(LineKind::PlanarDiagonal),
            3 => Some(LineKind::SpaceDiagonal),
            _ => None,
        }
    }

    /// How many lines of this family a 4×4×4 cube holds.
    #[must_use]
    pub const fn expected_count(self) -> usize {
        match self {
            LineKind::Axis => 48,
            LineKind::PlanarDiagonal => 24,
            LineKind::SpaceDiagonal => 4,
        }
    }
}

/// Four colinear cells, in traversal order from the start cell.
///
/// Deserializing re-traces the line from its first cell and step, so the
/// cells and kind always agree with each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLine")]
pub struct Line {
    id: LineId,
    cells: [Cell; LINE_LENGTH],
    step: Step,
    kind: LineKind,
}

#[derive(Deserialize)]
struct RawLine {
    id: LineId,
    cells: [Cell; LINE_LENGTH],
    step: Step,
    kind: LineKind,
}

impl TryFrom<RawLine> for Line {
    type Error = CatalogError;

    fn try_from(raw: RawLine) -> Result<Self, Self::Error> {
        let start = raw.cells[0].signed();
        let line = Line::trace(raw.id, start, raw.step)?;
        if line.cells != raw.cells || line.kind != raw.kind {
            return Err(CatalogError::MalformedLine {
                start,
                step: raw.step.as_tuple(),
                reason: "cells or kind disagree with the step",
            });
        }
        Ok(line)
    }
}

impl Line {
    /// Walk four cells from `start` along `step`, rejecting anything that is
    /// not a proper line inside the cube.
    pub(crate) fn trace(id: LineId, start: (i8, i8, i8), step: Step) -> Result<Self, CatalogError> {
        let malformed = |reason| CatalogError::MalformedLine {
            start,
            step: step.as_tuple(),
            reason,
        };

        let kind = LineKind::of(step).ok_or_else(|| malformed("step is not a unit direction"))?;

        let first = Cell::from_signed(start.0, start.1, start.2).ok_or_else(|| malformed("leaves the cube"))?;
        let mut cells = [first; LINE_LENGTH];
        let mut seen = CellSet::default();
        for (k, slot) in cells.iter_mut().enumerate() {
            let k = k as i8;
            *slot = Cell::from_signed(start.0 + k * step.dx, start.1 + k * step.dy, start.2 + k * step.dz)
                .ok_or_else(|| malformed("leaves the cube"))?;
            if !seen.insert(*slot) {
                return Err(malformed("repeats a cell"));
            }
        }

        Ok(Self { id, cells, step, kind })
    }

    #[must_use]
    pub fn id(&self) -> LineId {
        self.id
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; LINE_LENGTH] {
        &self.cells
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// The line's cells as an unordered set.
    #[must_use]
    pub fn cell_set(&self) -> CellSet {
        self.cells.iter().copied().collect()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.cells;
        write!(f, "{} {a} {b} {c} {d}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_axis_line() {
        let line = Line::trace(LineId(0), (2, 1, 0), Step::new(0, 0, 1)).unwrap();
        assert_eq!(line.kind(), LineKind::Axis);
        let heights: Vec<_> = line.cells().iter().map(|c| c.z()).collect();
        assert_eq!(heights, vec![0, 1, 2, 3]);
        assert!(line.cells().iter().all(|c| c.x() == 2 && c.y() == 1));
    }

    #[test]
    fn test_trace_descending_diagonal() {
        let line = Line::trace(LineId(7), (3, 0, 0), Step::new(-1, 1, 1)).unwrap();
        assert_eq!(line.kind(), LineKind::SpaceDiagonal);
        assert_eq!(line.cells()[3], Cell::new(0, 3, 3).unwrap());
    }

    #[test]
    fn test_trace_rejects_out_of_bounds() {
        let err = Line::trace(LineId(0), (1, 0, 0), Step::new(1, 0, 0)).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedLine { reason: "leaves the cube", .. }));

        let err = Line::trace(LineId(0), (0, 0, 0), Step::new(-1, 0, 0)).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedLine { reason: "leaves the cube", .. }));
    }

    #[test]
    fn test_trace_rejects_bad_steps() {
        assert!(Line::trace(LineId(0), (0, 0, 0), Step::new(0, 0, 0)).is_err());
        assert!(Line::trace(LineId(0), (0, 0, 0), Step::new(2, 0, 0)).is_err());
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(LineKind::of(Step::new(0, -1, 0)), Some(LineKind::Axis));
        assert_eq!(LineKind::of(Step::new(1, 0, -1)), Some(LineKind::PlanarDiagonal));
        assert_eq!(LineKind::of(Step::new(-1, -1, 1)), Some(LineKind::SpaceDiagonal));
        assert_eq!(LineKind::of(Step::new(0, 0, 0)), None);

        let total: usize = LineKind::ALL.iter().map(|k| k.expected_count()).sum();
        assert_eq!(total, 76);
    }

    #[test]
    fn test_line_id_deserialize_checks_range() {
        let id: LineId = serde_json::from_str("75").unwrap();
        assert_eq!(id.index(), 75);
        assert_eq!(serde_json::to_string(&id).unwrap(), "75");

        let err = serde_json::from_str::<LineId>("76").unwrap_err();
        assert!(err.to_string().contains("line id 76 is outside the catalog"));
    }

    #[test]
    fn test_line_deserialize_retraces() {
        let line = Line::trace(LineId(3), (0, 3, 0), Step::new(1, -1, 1)).unwrap();
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(serde_json::from_str::<Line>(&json).unwrap(), line);

        // Same cells labelled with the wrong family.
        let forged_kind = json.replace("SpaceDiagonal", "Axis");
        assert!(serde_json::from_str::<Line>(&forged_kind).is_err());

        // A vertical step that does not match the stored cells.
        let vertical = Line::trace(LineId(3), (0, 3, 0), Step::new(0, 0, 1)).unwrap();
        let forged_step = json.replace(
            &serde_json::to_string(&line.step()).unwrap(),
            &serde_json::to_string(&vertical.step()).unwrap(),
        );
        assert!(serde_json::from_str::<Line>(&forged_step).is_err());
    }

    #[test]
    fn test_cell_set_ignores_direction() {
        let up = Line::trace(LineId(0), (0, 0, 0), Step::new(1, 1, 0)).unwrap();
        let down = Line::trace(LineId(1), (3, 3, 0), Step::new(-1, -1, 0)).unwrap();
        assert_ne!(up.cells(), down.cells());
        assert_eq!(up.cell_set(), down.cell_set());
    }
}
