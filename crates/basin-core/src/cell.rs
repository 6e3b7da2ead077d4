use std::hash::{Hash, Hasher};

use serde::Serialize;

/// One grid position together with the height stored there.
///
/// Identity is the `(row, col)` pair; `value` is derived from the map and
/// does not take part in equality or hashing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub value: u8,
}

/// A cell strictly lower than every existing 4-neighbour.
pub type LowPoint = Cell;

impl Cell {
    pub fn new(row: usize, col: usize, value: u8) -> Self {
        Self { row, col, value }
    }

    /// Risk level contributed by this cell when it is a low point.
    #[inline]
    pub fn risk_level(&self) -> u64 {
        u64::from(self.value) + 1
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position().hash(state);
    }
}
