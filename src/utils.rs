//! Assorted utilities and helpers.

use crate::instance::Item;
use crate::solver::Strategy;
use crate::traits::KnapsackValue;

/// Default upper bound on dense table cells (2^28).
///
/// The limit counts cells, not bytes: a dense table at the limit occupies
/// `2^28 * size_of::<V>()` bytes, i.e. 1 GiB for `u32`, 2 GiB for `u64`/`f64`
/// and 4 GiB for `u128`. Lower it with
/// [`SolverBuilder::with_cell_limit`](crate::builder::SolverBuilder::with_cell_limit)
/// for wide value types or constrained hosts.
pub const DEFAULT_CELL_LIMIT: usize = 1 << 28;

/// Number of cells a dense table needs for `num_items` items at `capacity`,
/// or `None` if the count overflows `usize`.
#[inline]
pub fn table_cells(num_items: usize, capacity: usize) -> Option<usize> {
    num_items.checked_add(1)?.checked_mul(capacity.checked_add(1)?)
}

/// Pick a storage strategy for an instance.
///
/// Dense tabulation is preferred whenever its table fits under `cell_limit`;
/// otherwise only the reachable cells are computed.
#[inline]
pub fn default_strategy(num_items: usize, capacity: usize, cell_limit: usize) -> Strategy {
    match table_cells(num_items, capacity) {
        Some(cells) if cells <= cell_limit => Strategy::Dense,
        _ => Strategy::Lazy,
    }
}

/// Convert a validated (non-negative) weight into table units.
///
/// Weights beyond `usize::MAX` saturate; they exceed any representable
/// capacity either way.
#[inline]
pub(crate) fn weight_units(weight: i64) -> usize {
    usize::try_from(weight).unwrap_or(usize::MAX)
}

/// Sum of item weights, saturating at `i64::MAX`.
pub fn total_weight<V>(items: &[Item<V>]) -> i64 {
    items
        .iter()
        .fold(0i64, |acc, item| acc.saturating_add(item.weight))
}

/// Sum of item values, accumulated from the last item to the first.
///
/// Selections are reported in descending index order while the table adds
/// values in ascending index order, so summing back to front reproduces
/// [`Solution::max_value`](crate::solver::Solution::max_value) exactly, float
/// rounding included.
pub fn total_value<V: KnapsackValue>(items: &[Item<V>]) -> V {
    items
        .iter()
        .rev()
        .fold(V::zero(), |acc, item| acc + item.value)
}
