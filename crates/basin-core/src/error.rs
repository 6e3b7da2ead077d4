//! Error taxonomy for grid construction and basin ranking.
//!
//! Every variant here is a configuration error: the input (or the requested
//! reduction) cannot be satisfied, and nothing is retried. Out-of-bounds
//! access is not represented; it is a defect and panics instead.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("height map is empty")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid height {found:?} at row {row}, column {col}; expected a digit 0-9")]
    InvalidDigit { row: usize, col: usize, found: char },

    #[error("height {value} at row {row}, column {col} is outside 0..=9")]
    ValueOutOfRange { row: usize, col: usize, value: u8 },

    #[error("requested the {requested} largest basins but only {found} exist")]
    NotEnoughBasins { requested: usize, found: usize },

    #[error("product of the {k} largest basin sizes does not fit in 64 bits")]
    ScoreOverflow { k: usize },

    #[error("malformed height map JSON: {0}")]
    Json(#[from] serde_json::Error),
}
