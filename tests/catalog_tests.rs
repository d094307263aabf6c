//! Geometry catalog verification tests.
//!
//! These tests check the line enumeration against the cube's geometry:
//! family counts, uniqueness, agreement with the sweep generator, and the
//! number of lines through every class of cell.

use rustc_hash::FxHashSet;

use sogo::geometry::{sweep, Catalog, Cell, CellClass, CellSet, LineKind, LINE_COUNT, LINE_LENGTH};

// =============================================================================
// Counts and Uniqueness
// =============================================================================

#[test]
fn test_exactly_76_lines() {
    let catalog = Catalog::build();
    assert_eq!(catalog.lines().len(), LINE_COUNT);
    assert_eq!(catalog.count(LineKind::Axis), 48);
    assert_eq!(catalog.count(LineKind::PlanarDiagonal), 24);
    assert_eq!(catalog.count(LineKind::SpaceDiagonal), 4);
}

#[test]
fn test_no_duplicate_lines() {
    let catalog = Catalog::build();
    let sets: FxHashSet<CellSet> = catalog.lines().iter().map(|l| l.cell_set()).collect();
    assert_eq!(sets.len(), LINE_COUNT);
}

#[test]
fn test_every_line_is_well_formed() {
    let catalog = Catalog::build();
    for line in catalog.lines() {
        let cells = line.cells();
        assert_eq!(line.cell_set().len(), LINE_LENGTH, "{line} repeats a cell");

        let step = line.step();
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(b.x() as i8 - a.x() as i8, step.dx, "{line} has uneven x step");
            assert_eq!(b.y() as i8 - a.y() as i8, step.dy, "{line} has uneven y step");
            assert_eq!(b.z() as i8 - a.z() as i8, step.dz, "{line} has uneven z step");
        }
        assert_eq!(LineKind::of(step), Some(line.kind()));
    }
}

#[test]
fn test_axis_lines_per_axis() {
    let catalog = Catalog::build();
    let along = |dx: i8, dy: i8, dz: i8| {
        catalog
            .lines()
            .iter()
            .filter(|l| {
                let s = l.step();
                (s.dx.abs(), s.dy.abs(), s.dz.abs()) == (dx, dy, dz)
            })
            .count()
    };
    assert_eq!(along(1, 0, 0), 16);
    assert_eq!(along(0, 1, 0), 16);
    assert_eq!(along(0, 0, 1), 16);
}

#[test]
fn test_space_diagonals_join_opposite_corners() {
    let catalog = Catalog::build();
    for line in catalog.lines().iter().filter(|l| l.kind() == LineKind::SpaceDiagonal) {
        let first = line.cells()[0];
        let last = line.cells()[3];
        assert_eq!(first.class(), CellClass::Corner);
        assert_eq!(last.class(), CellClass::Corner);
        assert_eq!((first.x() + last.x(), first.y() + last.y(), first.z() + last.z()), (3, 3, 3));
    }
}

// =============================================================================
// Cross-validation
// =============================================================================

#[test]
fn test_sweep_matches_direct_enumeration() {
    let catalog = Catalog::build();
    assert_eq!(sweep::line_sets(), catalog.line_sets());
}

#[test]
fn test_try_build_succeeds() {
    let catalog = Catalog::try_build().expect("catalog should verify");
    assert!(catalog.cross_validate().is_ok());
}

#[test]
fn test_build_is_deterministic() {
    let a = Catalog::build();
    let b = Catalog::build();
    assert_eq!(a.lines(), b.lines());
}

// =============================================================================
// Lines per Cell
// =============================================================================

#[test]
fn test_lines_per_cell_by_class() {
    let catalog = Catalog::build();
    for &cell in catalog.cells() {
        let expected = match cell.class() {
            CellClass::Corner | CellClass::Interior => 7,
            CellClass::Edge | CellClass::Face => 4,
        };
        assert_eq!(
            catalog.lines_through(cell).len(),
            expected,
            "{cell} ({:?})",
            cell.class()
        );
    }
}

#[test]
fn test_corner_breakdown() {
    let catalog = Catalog::build();
    let corner = Cell::new(0, 0, 0).unwrap();
    let kinds: Vec<_> = catalog
        .lines_through(corner)
        .iter()
        .map(|&id| catalog.line(id).kind())
        .collect();

    let count = |kind| kinds.iter().filter(|&&k| k == kind).count();
    assert_eq!(count(LineKind::Axis), 3);
    assert_eq!(count(LineKind::PlanarDiagonal), 3);
    assert_eq!(count(LineKind::SpaceDiagonal), 1);
}

#[test]
fn test_lines_per_cell_within_bounds() {
    let catalog = Catalog::build();
    for &cell in catalog.cells() {
        let n = catalog.lines_through(cell).len();
        assert!((4..=13).contains(&n), "{cell} lies on {n} lines");
    }
}

#[test]
fn test_incidence_total() {
    let catalog = Catalog::build();
    let total: usize = catalog.cells().iter().map(|&c| catalog.lines_through(c).len()).sum();
    assert_eq!(total, LINE_COUNT * LINE_LENGTH);
}
