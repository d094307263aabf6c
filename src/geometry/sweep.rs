//! Independent line generator used to cross-check the catalog.
//!
//! Instead of listing line families by hand, this sweeps every start cell
//! against every direction in `{-1, 0, 1}³` (minus the zero vector), walks
//! four steps, and keeps the candidates that stay inside the cube with four
//! distinct cells. Each line is found twice (once from each end), so the
//! result is deduplicated as cell sets.
//!
//! Every function here is pure and returns a fresh iterator, so the sweep
//! can be restarted at will.

use rustc_hash::FxHashSet;

use super::cell::{Cell, CellSet, SIZE};
use super::line::LINE_LENGTH;

/// Signed coordinate triple used while walking.
pub type Point = (i8, i8, i8);

fn add(a: Point, b: Point) -> Point {
    (a.0 + b.0, a.1 + b.1, a.2 + b.2)
}

/// Every cell of the cube as a start point.
pub fn start_points() -> impl Iterator<Item = Point> + Clone {
    let n = SIZE as i8;
    (0..n).flat_map(move |x| (0..n).flat_map(move |y| (0..n).map(move |z| (x, y, z))))
}

/// The 26 non-zero directions with components in `{-1, 0, 1}`.
pub fn directions() -> impl Iterator<Item = Point> + Clone {
    (-1..=1i8)
        .flat_map(|x| (-1..=1i8).flat_map(move |y| (-1..=1i8).map(move |z| (x, y, z))))
        .filter(|&d| d != (0, 0, 0))
}

/// `length` points starting at `start`, each one `step` further along.
pub fn walk(start: Point, step: Point, length: usize) -> impl Iterator<Item = Point> + Clone {
    std::iter::successors(Some(start), move |&p| Some(add(p, step))).take(length)
}

/// Every start × direction walk of four points, in or out of bounds.
pub fn candidates() -> impl Iterator<Item = Vec<Point>> {
    start_points().flat_map(|start| directions().map(move |step| walk(start, step, LINE_LENGTH).collect::<Vec<_>>()))
}

/// All points inside the cube's bounding box?
#[must_use]
pub fn in_bounding_box(points: &[Point]) -> bool {
    let range = 0..SIZE as i8;
    points
        .iter()
        .all(|&(x, y, z)| range.contains(&x) && range.contains(&y) && range.contains(&z))
}

/// Gather a candidate into a cell set, if it is inside the cube and has
/// exactly four distinct cells.
#[must_use]
pub fn gather(points: &[Point]) -> Option<CellSet> {
    if !in_bounding_box(points) {
        return None;
    }
    let set: CellSet = points
        .iter()
        .map(|&(x, y, z)| Cell::from_signed(x, y, z))
        .collect::<Option<CellSet>>()?;
    (set.len() == LINE_LENGTH).then_some(set)
}

/// The deduplicated set of all winning lines found by the sweep.
#[must_use]
pub fn line_sets() -> FxHashSet<CellSet> {
    candidates().filter_map(|points| gather(&points)).collect()
}
