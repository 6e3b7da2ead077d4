//! Full analysis pipeline: low points → basins → ranking → scores.
use serde::{Deserialize, Serialize};

use crate::basins::{find_basins, Basin};
use crate::cell::Cell;
use crate::error::ConfigError;
use crate::heightmap::HeightMap;
use crate::low_points::find_low_points;
use crate::ranking::{rank_and_reduce, top_sizes};
use crate::score::{risk_score, BASIN_SCORE_TOP_K};

// ── Parameters ────────────────────────────────────────────────────────────────

/// Tunables for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// How many of the largest basins are multiplied into the basin score.
    pub top_k: usize,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            top_k: BASIN_SCORE_TOP_K,
        }
    }
}

// ── Result ────────────────────────────────────────────────────────────────────

/// Everything one pass over a height map produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub width: usize,
    pub height: usize,
    /// Low points in row-major order.
    pub low_points: Vec<Cell>,
    /// Basin sizes in low-point order (not ranked; duplicates kept).
    pub basin_sizes: Vec<usize>,
    /// The `top_k` largest basin sizes, largest first.
    pub top_basin_sizes: Vec<usize>,
    pub risk_score: u64,
    pub basin_score: u64,
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Run the whole pipeline over `map`.
///
/// Steps:
/// 1. Low point detection.
/// 2. One basin expansion per low point.
/// 3. Ranking and top-K product (fails if fewer than `top_k` basins).
/// 4. Risk score over the low points.
///
/// Nothing is cached between calls; the same map always yields the same report.
pub fn analyze(map: &HeightMap, params: &AnalysisParams) -> Result<AnalysisReport, ConfigError> {
    // Step 1 — low points.
    let low_points = find_low_points(map);
    log::debug!("{} low points", low_points.len());

    // Step 2 — basins.
    let basins = find_basins(map, &low_points);
    let basin_sizes: Vec<usize> = basins.iter().map(Basin::size).collect();
    log::debug!("basin sizes {basin_sizes:?}");

    // Step 3 — ranking.
    let basin_score = rank_and_reduce(&basins, params.top_k)?;
    let top_basin_sizes = top_sizes(&basins, params.top_k);
    log::debug!("top {} basins {top_basin_sizes:?} → {basin_score}", params.top_k);

    // Step 4 — risk.
    let risk_score = risk_score(&low_points);
    log::debug!("risk score {risk_score}");

    Ok(AnalysisReport {
        width: map.width(),
        height: map.height(),
        low_points,
        basin_sizes,
        top_basin_sizes,
        risk_score,
        basin_score,
    })
}
