//! The geometry catalog: every cell, every winning line, and which lines
//! run through which cell.
//!
//! Built once, verified, then shared read-only (usually behind an `Arc`)
//! by every board.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::CatalogError;

use super::cell::{Cell, CellSet, CELL_COUNT};
use super::line::{Line, LineId, LineKind, Step};
use super::sweep;

/// Number of winning lines in a 4×4×4 cube.
pub const LINE_COUNT: usize = 76;

/// The most lines any single cell lies on.
pub const MAX_LINES_PER_CELL: usize = 7;

type Seed = ((i8, i8, i8), Step);

/// Immutable cell/line tables for the 4×4×4 cube.
#[derive(Clone, Debug)]
pub struct Catalog {
    cells: Vec<Cell>,
    lines: Vec<Line>,
    through: Vec<SmallVec<[LineId; MAX_LINES_PER_CELL]>>,
}

impl Catalog {
    /// Build and verify the catalog.
    ///
    /// # Panics
    ///
    /// If the enumeration violates a geometric invariant. Nothing can be
    /// played on a wrong catalog, so this is treated as a programming error.
    #[must_use]
    pub fn build() -> Self {
        match Self::try_build() {
            Ok(catalog) => catalog,
            Err(err) => panic!("geometry catalog is inconsistent: {err}"),
        }
    }

    /// Build the catalog, reporting the first invariant it violates.
    pub fn try_build() -> Result<Self, CatalogError> {
        let lines = seeds()
            .enumerate()
            .map(|(i, (start, step))| Line::trace(LineId(i as u8), start, step))
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self::from_lines(lines)?;
        catalog.cross_validate()?;

        debug!(lines = catalog.lines.len(), "geometry catalog built");
        Ok(catalog)
    }

    /// Index traced lines by cell after checking family counts and
    /// uniqueness.
    pub(crate) fn from_lines(lines: Vec<Line>) -> Result<Self, CatalogError> {
        for kind in LineKind::ALL {
            let found = lines.iter().filter(|l| l.kind() == kind).count();
            if found != kind.expected_count() {
                return Err(CatalogError::FamilyCount {
                    kind,
                    expected: kind.expected_count(),
                    found,
                });
            }
        }
        if lines.len() != LINE_COUNT {
            return Err(CatalogError::TotalCount {
                expected: LINE_COUNT,
                found: lines.len(),
            });
        }

        let mut by_cells: FxHashMap<CellSet, LineId> = FxHashMap::default();
        for line in &lines {
            if let Some(&first) = by_cells.get(&line.cell_set()) {
                return Err(CatalogError::DuplicateLine {
                    first,
                    second: line.id(),
                    cells: line.cell_set(),
                });
            }
            by_cells.insert(line.cell_set(), line.id());
        }

        let cells: Vec<Cell> = Cell::all().collect();
        let mut through = vec![SmallVec::new(); CELL_COUNT];
        for line in &lines {
            for cell in line.cells() {
                through[cell.index()].push(line.id());
            }
        }

        Ok(Self { cells, lines, through })
    }

    /// Compare the catalog against the independent sweep generator.
    pub fn cross_validate(&self) -> Result<(), CatalogError> {
        let ours = self.line_sets();
        let swept = sweep::line_sets();

        let missing = swept.difference(&ours).count();
        let extra = ours.difference(&swept).count();
        if missing == 0 && extra == 0 {
            Ok(())
        } else {
            Err(CatalogError::CrossValidation { missing, extra })
        }
    }

    /// All cells in flat-index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All lines, indexed by `LineId`.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    /// Ids of every line running through `cell`.
    #[must_use]
    pub fn lines_through(&self, cell: Cell) -> &[LineId] {
        &self.through[cell.index()]
    }

    /// Number of lines in a family.
    #[must_use]
    pub fn count(&self, kind: LineKind) -> usize {
        self.lines.iter().filter(|l| l.kind() == kind).count()
    }

    /// Every line as an unordered cell set.
    #[must_use]
    pub fn line_sets(&self) -> FxHashSet<CellSet> {
        self.lines.iter().map(Line::cell_set).collect()
    }
}

/// Start cell and step of every line, axis lines first, then planar
/// diagonals, then space diagonals.
fn seeds() -> impl Iterator<Item = Seed> {
    axis_seeds().chain(planar_seeds()).chain(space_seeds())
}

fn axis_seeds() -> impl Iterator<Item = Seed> {
    (0..4i8).flat_map(|a| {
        (0..4i8).flat_map(move |b| {
            [
                ((a, b, 0), Step::new(0, 0, 1)),
                ((0, a, b), Step::new(1, 0, 0)),
                ((b, 0, a), Step::new(0, 1, 0)),
            ]
        })
    })
}

fn planar_seeds() -> impl Iterator<Item = Seed> {
    (0..4i8).flat_map(|a| {
        [
            // xy plane at height a
            ((0, 0, a), Step::new(1, 1, 0)),
            ((0, 3, a), Step::new(1, -1, 0)),
            // yz plane at x = a
            ((a, 0, 0), Step::new(0, 1, 1)),
            ((a, 0, 3), Step::new(0, 1, -1)),
            // xz plane at y = a
            ((0, a, 0), Step::new(1, 0, 1)),
            ((3, a, 0), Step::new(-1, 0, 1)),
        ]
    })
}

fn space_seeds() -> impl Iterator<Item = Seed> {
    [
        ((0, 0, 0), Step::new(1, 1, 1)),
        ((0, 3, 0), Step::new(1, -1, 1)),
        ((3, 3, 0), Step::new(-1, -1, 1)),
        ((3, 0, 0), Step::new(-1, 1, 1)),
    ]
    .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts() {
        let catalog = Catalog::build();
        assert_eq!(catalog.cells().len(), CELL_COUNT);
        assert_eq!(catalog.lines().len(), LINE_COUNT);
        assert_eq!(catalog.count(LineKind::Axis), 48);
        assert_eq!(catalog.count(LineKind::PlanarDiagonal), 24);
        assert_eq!(catalog.count(LineKind::SpaceDiagonal), 4);
    }

    #[test]
    fn test_ids_match_positions() {
        let catalog = Catalog::build();
        for (i, line) in catalog.lines().iter().enumerate() {
            assert_eq!(line.id().index(), i);
            assert_eq!(catalog.line(line.id()), line);
        }
    }

    #[test]
    fn test_generation_order() {
        let kinds: Vec<_> = Catalog::build().lines().iter().map(Line::kind).collect();
        assert!(kinds[..48].iter().all(|&k| k == LineKind::Axis));
        assert!(kinds[48..72].iter().all(|&k| k == LineKind::PlanarDiagonal));
        assert!(kinds[72..].iter().all(|&k| k == LineKind::SpaceDiagonal));
    }

    #[test]
    fn test_adjacency_is_bidirectional() {
        let catalog = Catalog::build();
        for &cell in catalog.cells() {
            for &id in catalog.lines_through(cell) {
                assert!(catalog.line(id).contains(cell));
            }
        }
        for line in catalog.lines() {
            for &cell in line.cells() {
                assert!(catalog.lines_through(cell).contains(&line.id()));
            }
        }
    }

    #[test]
    fn test_missing_family_is_rejected() {
        let mut lines = Catalog::build().lines().to_vec();
        lines.pop();
        let err = Catalog::from_lines(lines).unwrap_err();
        assert_eq!(
            err,
            CatalogError::FamilyCount {
                kind: LineKind::SpaceDiagonal,
                expected: 4,
                found: 3,
            }
        );
    }

    #[test]
    fn test_duplicate_line_is_rejected() {
        let mut lines = Catalog::build().lines().to_vec();
        // Same cells as line 0, traced from the other end.
        let first = lines[0];
        let [.., last] = *first.cells();
        let step = first.step();
        let reversed = Line::trace(
            LineId(1),
            last.signed(),
            Step::new(-step.dx, -step.dy, -step.dz),
        )
        .unwrap();
        lines[1] = reversed;

        let err = Catalog::from_lines(lines).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLine { first: LineId(0), second: LineId(1), .. }));
    }

    #[test]
    fn test_cross_validation_passes() {
        assert_eq!(Catalog::build().cross_validate(), Ok(()));
    }
}
