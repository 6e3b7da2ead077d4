//! The two final reductions over low points and basins.
use crate::basins::Basin;
use crate::cell::LowPoint;
use crate::error::ConfigError;
use crate::ranking::rank_and_reduce;

/// Number of basins multiplied together for the basin score.
pub const BASIN_SCORE_TOP_K: usize = 3;

/// Sum of `value + 1` over all low points.
pub fn risk_score(low_points: &[LowPoint]) -> u64 {
    low_points.iter().map(LowPoint::risk_level).sum()
}

/// Product of the sizes of the three largest basins.
pub fn basin_score(basins: &[Basin]) -> Result<u64, ConfigError> {
    rank_and_reduce(basins, BASIN_SCORE_TOP_K)
}
