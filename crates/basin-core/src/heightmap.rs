use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::ConfigError;

/// Highest height a cell may hold.
pub const MAX_HEIGHT: u8 = 9;

/// Up, down, left, right. Neighbour iteration always follows this order.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An immutable rectangular grid of heights in `0..=9`, row-major.
///
/// Construction validates shape and range, so every `HeightMap` in existence
/// is non-empty and rectangular. Serialized as an array of row arrays;
/// deserialization goes through the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct HeightMap {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl HeightMap {
    /// Build a map from nested rows, rejecting empty, ragged or out-of-range input.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, ConfigError> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(ConfigError::EmptyGrid),
        };

        let mut data = Vec::with_capacity(width * rows.len());
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(ConfigError::RaggedRow {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            if let Some((col, &value)) = cells.iter().enumerate().find(|&(_, &v)| v > MAX_HEIGHT) {
                return Err(ConfigError::ValueOutOfRange { row, col, value });
            }
            data.extend_from_slice(cells);
        }

        Ok(Self {
            data,
            width,
            height: rows.len(),
        })
    }

    /// Parse the JSON form (an array of row arrays).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of columns. Never 0: construction rejects empty grids.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Row-major index of `(row, col)`. Caller guarantees bounds.
    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Height at `(row, col)`.
    ///
    /// # Panics
    /// If the position lies outside the grid. Positions handed out by this
    /// map (`cells`, `neighbors`) are always in bounds.
    #[inline]
    pub fn value_at(&self, row: usize, col: usize) -> u8 {
        assert!(
            self.in_bounds(row, col),
            "({row}, {col}) outside {}x{} height map",
            self.height,
            self.width
        );
        self.data[self.index(row, col)]
    }

    /// Checked variant of [`value_at`](Self::value_at).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.in_bounds(row, col).then(|| self.data[self.index(row, col)])
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        Cell::new(row, col, self.value_at(row, col))
    }

    /// The existing 4-neighbours of `(row, col)` in up, down, left, right order.
    /// Positions off the edge are skipped.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Cell> + '_ {
        assert!(
            self.in_bounds(row, col),
            "({row}, {col}) outside {}x{} height map",
            self.height,
            self.width
        );

        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.get(r, c).map(|value| Cell::new(r, c, value))
        })
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &value)| Cell::new(i / self.width, i % self.width, value))
    }

    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.data.chunks(self.width).map(<[u8]>::to_vec).collect()
    }

    pub fn min_height(&self) -> u8 {
        self.data.iter().copied().min().unwrap_or(0)
    }

    pub fn max_height(&self) -> u8 {
        self.data.iter().copied().max().unwrap_or(0)
    }
}

impl TryFrom<Vec<Vec<u8>>> for HeightMap {
    type Error = ConfigError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<HeightMap> for Vec<Vec<u8>> {
    fn from(map: HeightMap) -> Self {
        map.rows()
    }
}

/// Text form: one line per row, one decimal digit per cell, no separators.
/// Trailing whitespace after the last row is ignored.
impl FromStr for HeightMap {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .trim_end()
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.trim_end_matches('\r')
                    .chars()
                    .enumerate()
                    .map(|(col, ch)| match ch.to_digit(10) {
                        Some(d) => Ok(d as u8),
                        None => Err(ConfigError::InvalidDigit { row, col, found: ch }),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}

impl fmt::Display for HeightMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.data.chunks(self.width).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &value in row {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2199943210\n3987894921\n9856789892\n8767896789\n9899965678\n";

    fn positions(cells: impl Iterator<Item = Cell>) -> Vec<(usize, usize)> {
        cells.map(|c| c.position()).collect()
    }

    #[test]
    fn parses_dimensions_and_values() {
        let map: HeightMap = EXAMPLE.parse().unwrap();
        assert_eq!(map.width(), 10);
        assert_eq!(map.height(), 5);
        assert_eq!(map.value_at(0, 0), 2);
        assert_eq!(map.value_at(0, 9), 0);
        assert_eq!(map.value_at(4, 9), 8);
        assert_eq!(map.min_height(), 0);
        assert_eq!(map.max_height(), 9);
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let map: HeightMap = "12\r\n34\r\n".parse().unwrap();
        assert_eq!(map.rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!("".parse::<HeightMap>(), Err(ConfigError::EmptyGrid)));
        assert!(matches!("\n\n".parse::<HeightMap>(), Err(ConfigError::EmptyGrid)));
        assert!(matches!(HeightMap::from_rows(vec![vec![]]), Err(ConfigError::EmptyGrid)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = "123\n12\n123".parse::<HeightMap>().unwrap_err();
        assert!(
            matches!(err, ConfigError::RaggedRow { row: 1, expected: 3, found: 2 }),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn non_digit_is_rejected_with_position() {
        let err = "123\n1x3".parse::<HeightMap>().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidDigit { row: 1, col: 1, found: 'x' }),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = HeightMap::from_rows(vec![vec![1, 2], vec![3, 12]]).unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange { row: 1, col: 1, value: 12 }));
    }

    #[test]
    fn neighbors_follow_up_down_left_right() {
        let map: HeightMap = "123\n456\n789".parse().unwrap();
        assert_eq!(
            positions(map.neighbors(1, 1)),
            vec![(0, 1), (2, 1), (1, 0), (1, 2)]
        );
        let values: Vec<u8> = map.neighbors(1, 1).map(|c| c.value).collect();
        assert_eq!(values, vec![2, 8, 4, 6]);
    }

    #[test]
    fn neighbors_omit_cells_off_the_edge() {
        let map: HeightMap = "123\n456\n789".parse().unwrap();
        assert_eq!(positions(map.neighbors(0, 0)), vec![(1, 0), (0, 1)]);
        assert_eq!(positions(map.neighbors(2, 2)), vec![(1, 2), (2, 1)]);
        assert_eq!(positions(map.neighbors(0, 1)), vec![(1, 1), (0, 0), (0, 2)]);

        let single: HeightMap = "5".parse().unwrap();
        assert_eq!(single.neighbors(0, 0).count(), 0);
    }

    #[test]
    fn single_row_and_single_column_maps() {
        let row: HeightMap = "3141".parse().unwrap();
        assert_eq!(positions(row.neighbors(0, 1)), vec![(0, 0), (0, 2)]);

        let column: HeightMap = "3\n1\n4".parse().unwrap();
        assert_eq!(column.width(), 1);
        assert_eq!(positions(column.neighbors(1, 0)), vec![(0, 0), (2, 0)]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn value_at_out_of_bounds_panics() {
        let map: HeightMap = "12\n34".parse().unwrap();
        map.value_at(2, 0);
    }

    #[test]
    fn get_is_checked() {
        let map: HeightMap = "12\n34".parse().unwrap();
        assert_eq!(map.get(1, 1), Some(4));
        assert_eq!(map.get(0, 2), None);
    }

    #[test]
    fn cells_are_row_major() {
        let map: HeightMap = "12\n34".parse().unwrap();
        assert_eq!(positions(map.cells()), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn display_round_trips_text_form() {
        let map: HeightMap = EXAMPLE.parse().unwrap();
        assert_eq!(map.to_string(), EXAMPLE.trim_end());
    }

    #[test]
    fn json_form_is_nested_rows_and_validated() {
        let map: HeightMap = "12\n34".parse().unwrap();
        assert_eq!(serde_json::to_string(&map).unwrap(), "[[1,2],[3,4]]");
        assert_eq!(HeightMap::from_json("[[1,2],[3,4]]").unwrap(), map);
        assert!(HeightMap::from_json("[[1,2],[3]]").is_err());
        assert!(HeightMap::from_json("[]").is_err());
    }
}
