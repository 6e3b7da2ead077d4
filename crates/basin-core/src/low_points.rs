//! Local minima of a height map.
use crate::cell::LowPoint;
use crate::heightmap::HeightMap;

/// Every cell strictly lower than all of its existing 4-neighbours, in
/// row-major order.
///
/// Cells on the edge are only compared against the neighbours that exist,
/// so the border never acts as a wall. Ties disqualify: a plateau of equal
/// minimal values contributes no low point.
pub fn find_low_points(map: &HeightMap) -> Vec<LowPoint> {
    let low_points: Vec<LowPoint> = map
        .cells()
        .filter(|cell| {
            map.neighbors(cell.row, cell.col)
                .all(|neighbor| cell.value < neighbor.value)
        })
        .collect();

    log::trace!(
        "found {} low points in {}x{} map",
        low_points.len(),
        map.height(),
        map.width()
    );
    low_points
}
