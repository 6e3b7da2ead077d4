//! Basin ranking by size and top-K reduction.
use std::cmp::Reverse;

use crate::basins::Basin;
use crate::error::ConfigError;

/// Sort basins largest first. The sort is stable; equal sizes keep their
/// discovery order, which callers should not rely on.
pub fn rank_basins(basins: &mut [Basin]) {
    basins.sort_by_key(|b| Reverse(b.size()));
}

/// Sizes of the `k` largest basins, largest first. Shorter than `k` when
/// fewer basins exist.
pub fn top_sizes(basins: &[Basin], k: usize) -> Vec<usize> {
    let mut sizes: Vec<usize> = basins.iter().map(Basin::size).collect();
    sizes.sort_by_key(|&s| Reverse(s));
    sizes.truncate(k);
    sizes
}

/// Product of the sizes of the `k` largest basins.
///
/// Fewer than `k` basins is a configuration error rather than a silently
/// shorter product, and so is a product that overflows `u64`. `k = 0` is
/// the empty product, 1.
pub fn rank_and_reduce(basins: &[Basin], k: usize) -> Result<u64, ConfigError> {
    if basins.len() < k {
        return Err(ConfigError::NotEnoughBasins {
            requested: k,
            found: basins.len(),
        });
    }
    top_sizes(basins, k)
        .into_iter()
        .try_fold(1u64, |acc, s| acc.checked_mul(s as u64))
        .ok_or(ConfigError::ScoreOverflow { k })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn basin_of_size(seed_col: usize, size: usize) -> Basin {
        Basin {
            seed: Cell::new(0, seed_col, 0),
            cells: (0..size).map(|i| Cell::new(i, seed_col, 0)).collect(),
        }
    }

    fn sample() -> Vec<Basin> {
        [3, 9, 14, 9]
            .into_iter()
            .enumerate()
            .map(|(i, size)| basin_of_size(i, size))
            .collect()
    }

    #[test]
    fn rank_orders_by_descending_size() {
        let mut basins = sample();
        rank_basins(&mut basins);
        let sizes: Vec<usize> = basins.iter().map(Basin::size).collect();
        assert_eq!(sizes, vec![14, 9, 9, 3]);
    }

    #[test]
    fn top_three_product() {
        assert_eq!(rank_and_reduce(&sample(), 3).unwrap(), 1134);
        assert_eq!(top_sizes(&sample(), 3), vec![14, 9, 9]);
    }

    #[test]
    fn k_equal_to_basin_count_uses_all() {
        assert_eq!(rank_and_reduce(&sample(), 4).unwrap(), 3 * 9 * 14 * 9);
    }

    #[test]
    fn zero_k_is_empty_product() {
        assert_eq!(rank_and_reduce(&[], 0).unwrap(), 1);
    }

    #[test]
    fn fewer_basins_than_k_is_an_error() {
        let basins = vec![basin_of_size(0, 1)];
        let err = rank_and_reduce(&basins, 3).unwrap_err();
        assert!(
            matches!(err, ConfigError::NotEnoughBasins { requested: 3, found: 1 }),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn oversized_product_is_an_error() {
        // 100 copies of one 200-cell basin: 200^10 exceeds u64.
        let basins: Vec<Basin> = (0..100).map(|i| basin_of_size(i, 200)).collect();
        assert_eq!(rank_and_reduce(&basins, 8).unwrap(), 200u64.pow(8));
        let err = rank_and_reduce(&basins, 10).unwrap_err();
        assert!(
            matches!(err, ConfigError::ScoreOverflow { k: 10 }),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn ranking_does_not_depend_on_input_order() {
        let mut reversed = sample();
        reversed.reverse();
        assert_eq!(
            rank_and_reduce(&reversed, 3).unwrap(),
            rank_and_reduce(&sample(), 3).unwrap()
        );
    }
}
