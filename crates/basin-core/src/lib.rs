//! Structural analysis of small integer height maps: local minima, basins
//! bounded by the sentinel height 9, and the scores derived from them.
pub mod analysis;
pub mod basins;
pub mod cell;
pub mod error;
pub mod heightmap;
pub mod low_points;
pub mod ranking;
pub mod score;
pub mod submission;

pub use analysis::{analyze, AnalysisParams, AnalysisReport};
pub use basins::{expand_basin, find_basins, Basin, SENTINEL};
pub use cell::{Cell, LowPoint};
pub use error::ConfigError;
pub use heightmap::HeightMap;
pub use low_points::find_low_points;
pub use ranking::{rank_and_reduce, rank_basins, top_sizes};
pub use score::{basin_score, risk_score};
