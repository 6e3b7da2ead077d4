//! Basin expansion: flood fill from a low point over cells below the
//! sentinel height.
use serde::Serialize;

use crate::cell::{Cell, LowPoint};
use crate::heightmap::HeightMap;

#[cfg(feature = "threading")]
use rayon::prelude::*;

/// Height that never belongs to a basin and bounds every flood fill.
pub const SENTINEL: u8 = 9;

/// The cells reachable from one low point without crossing a sentinel.
#[derive(Debug, Clone, Serialize)]
pub struct Basin {
    /// Low point the expansion started from.
    pub seed: Cell,
    /// Members in discovery order; the seed comes first.
    pub cells: Vec<Cell>,
}

impl Basin {
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.iter().any(|c| c.position() == (row, col))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

/// Grow the basin seeded at `seed`.
///
/// Depth-first over a `Vec` stack with a visited grid private to this call,
/// so every cell is pushed at most once. The result is the maximal set of
/// sub-sentinel cells 4-connected to the seed; traversal order only affects
/// the order of `cells`.
///
/// A seed sitting on the sentinel itself (possible only on a 1×1 map of `9`)
/// yields an empty basin.
pub fn expand_basin(map: &HeightMap, seed: LowPoint) -> Basin {
    let seed = map.cell(seed.row, seed.col);
    if seed.value >= SENTINEL {
        return Basin {
            seed,
            cells: Vec::new(),
        };
    }

    let mut visited = vec![false; map.len()];
    visited[map.index(seed.row, seed.col)] = true;
    let mut frontier = vec![seed];
    let mut cells = vec![seed];

    while let Some(current) = frontier.pop() {
        for neighbor in map.neighbors(current.row, current.col) {
            let i = map.index(neighbor.row, neighbor.col);
            if visited[i] || neighbor.value >= SENTINEL {
                continue;
            }
            visited[i] = true;
            cells.push(neighbor);
            frontier.push(neighbor);
        }
    }

    log::trace!(
        "basin at ({}, {}) has {} cells",
        seed.row,
        seed.col,
        cells.len()
    );
    Basin { seed, cells }
}

/// One basin per low point, in low-point order.
///
/// Basins are not merged: two low points joined by sub-sentinel terrain each
/// produce their own (identical) basin, and both count toward ranking.
pub fn find_basins(map: &HeightMap, low_points: &[LowPoint]) -> Vec<Basin> {
    #[cfg(feature = "threading")]
    let basins: Vec<Basin> = low_points
        .par_iter()
        .map(|&seed| expand_basin(map, seed))
        .collect();

    #[cfg(not(feature = "threading"))]
    let basins: Vec<Basin> = low_points
        .iter()
        .map(|&seed| expand_basin(map, seed))
        .collect();

    basins
}
