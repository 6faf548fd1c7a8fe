//! The knapsack solver.
//!
//! Solving is split in two phases:
//! 1. [`Solver::solve`] validates the specification, picks a memo strategy and
//!    evaluates the root cell `value(n, capacity)`.
//! 2. [`Solution::select`] replays the recurrence's decisions from the
//!    populated table, only when the caller asks for the chosen items.
//!
//! [`maximum_value`] stops after phase 1.

use crate::error::KnapsackError;
use crate::instance::{Item, Specification};
use crate::table::{DenseTable, LazyTable};
use crate::traits::{KnapsackValue, MemoTable};
use crate::utils::{default_strategy, table_cells, weight_units, DEFAULT_CELL_LIMIT};

/// How the memo table is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Bottom-up tabulation of every `(prefix, capacity)` cell.
    Dense,
    /// On-demand evaluation of the cells reachable from the root.
    Lazy,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Dense => "dense",
            Strategy::Lazy => "lazy",
        }
    }
}

#[derive(Debug)]
enum Memo<'a, V> {
    Dense(DenseTable<V>),
    Lazy(LazyTable<'a, V>),
}

impl<V: KnapsackValue> MemoTable<V> for Memo<'_, V> {
    fn num_items(&self) -> usize {
        match self {
            Memo::Dense(t) => t.num_items(),
            Memo::Lazy(t) => t.num_items(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Memo::Dense(t) => t.capacity(),
            Memo::Lazy(t) => t.capacity(),
        }
    }

    #[inline]
    fn value(&self, prefix: usize, capacity: usize) -> V {
        match self {
            Memo::Dense(t) => t.value(prefix, capacity),
            Memo::Lazy(t) => t.value(prefix, capacity),
        }
    }
}

/// Exact 0-1 knapsack solver.
///
/// Typical usage:
/// ```
/// use knapsack_dp::{Solver, Specification};
///
/// let spec = Specification::from_pairs(5, [(2, 3), (3, 4), (4, 5), (5, 6)]);
/// let solution = Solver::new().solve(&spec).unwrap();
/// assert_eq!(solution.max_value(), 7);
/// assert_eq!(solution.selected_indices(), vec![1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    strategy: Option<Strategy>,
    cell_limit: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Solver with automatic strategy choice and [`DEFAULT_CELL_LIMIT`].
    pub fn new() -> Self {
        Self::with_config(None, DEFAULT_CELL_LIMIT)
    }

    /// Solver with an explicit configuration. `None` lets each instance pick
    /// its strategy via [`default_strategy`].
    ///
    /// # Panics
    /// Panics if `cell_limit == 0`.
    pub fn with_config(strategy: Option<Strategy>, cell_limit: usize) -> Self {
        assert!(cell_limit > 0, "cell_limit must be positive");
        Self {
            strategy,
            cell_limit,
        }
    }

    /// The forced strategy, if any.
    pub fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    /// Maximum number of dense table cells this solver will allocate. The
    /// memory cost is this count times `size_of::<V>()`.
    pub fn cell_limit(&self) -> usize {
        self.cell_limit
    }

    /// Solve `spec`, returning the optimal value and a deferred selector.
    ///
    /// Fails with [`KnapsackError::InvalidInput`] on negative capacity,
    /// negative weights or unordered values, and with
    /// [`KnapsackError::TableTooLarge`] when dense storage is forced for an
    /// instance that does not fit under the cell limit.
    ///
    /// Value sums use the value type's own `+`. The type must be wide enough
    /// for the best total: with a narrow integer such as `u8`, two items worth
    /// 200 and 100 overflow, which panics in debug builds and wraps in
    /// release builds.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            name = "knapsack_solve",
            skip(self, spec),
            fields(
                items = spec.items.len(),
                capacity = spec.capacity,
                strategy = tracing::field::Empty
            )
        )
    )]
    pub fn solve<'a, V: KnapsackValue>(
        &self,
        spec: &'a Specification<V>,
    ) -> Result<Solution<'a, V>, KnapsackError> {
        spec.validate()?;
        let num_items = spec.len();
        let capacity = usize::try_from(spec.capacity).map_err(|_| self.too_large(spec))?;
        let strategy = self
            .strategy
            .unwrap_or_else(|| default_strategy(num_items, capacity, self.cell_limit));
        #[cfg(feature = "tracing")]
        tracing::Span::current().record("strategy", strategy.as_str());

        let table = match strategy {
            Strategy::Dense => match table_cells(num_items, capacity) {
                Some(cells) if cells <= self.cell_limit => {
                    Memo::Dense(DenseTable::build(&spec.items, capacity))
                }
                _ => return Err(self.too_large(spec)),
            },
            Strategy::Lazy => Memo::Lazy(LazyTable::new(&spec.items, capacity)),
        };
        let max_value = table.value(num_items, capacity);

        Ok(Solution {
            items: &spec.items,
            capacity,
            strategy,
            max_value,
            table,
        })
    }

    /// Optimal value only; no selection work is done.
    pub fn maximum_value<V: KnapsackValue>(
        &self,
        spec: &Specification<V>,
    ) -> Result<V, KnapsackError> {
        Ok(self.solve(spec)?.max_value())
    }

    fn too_large<V>(&self, spec: &Specification<V>) -> KnapsackError {
        KnapsackError::TableTooLarge {
            items: spec.items.len(),
            capacity: spec.capacity,
            limit: self.cell_limit,
        }
    }
}

/// Result of [`Solver::solve`]: the optimal value plus the memo table needed
/// to reconstruct one optimal selection on demand.
///
/// The table lives exactly as long as the solution.
#[derive(Debug)]
pub struct Solution<'a, V> {
    items: &'a [Item<V>],
    capacity: usize,
    strategy: Strategy,
    max_value: V,
    table: Memo<'a, V>,
}

impl<V: KnapsackValue> Solution<'_, V> {
    /// Root value `value(n, capacity)`: the best total value of a subset whose
    /// weight fits the capacity. Zero when the capacity is zero.
    pub fn max_value(&self) -> V {
        self.max_value
    }

    /// Strategy the table was built with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Indices of one optimal selection, in descending index order.
    ///
    /// Walks prefixes from `n` down to `1`; item `p - 1` was taken exactly when
    /// `value(p, c) > value(p - 1, c)`, in which case its weight is removed
    /// from the running capacity `c`. Repeated calls return the same indices.
    pub fn selected_indices(&self) -> Vec<usize> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("select", items = self.items.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut picked = Vec::new();
        let mut capacity = self.capacity;
        for prefix in (1..=self.items.len()).rev() {
            if self.table.value(prefix, capacity) > self.table.value(prefix - 1, capacity) {
                picked.push(prefix - 1);
                capacity -= weight_units(self.items[prefix - 1].weight);
            }
        }
        picked
    }

    /// One optimal selection of items, in descending index order.
    ///
    /// [`total_value`](crate::utils::total_value) of the result equals
    /// [`max_value`](Solution::max_value) exactly, floats included.
    pub fn select(&self) -> Vec<Item<V>> {
        self.selected_indices()
            .into_iter()
            .map(|index| self.items[index])
            .collect()
    }
}

/// Solve `spec` with a default [`Solver`].
pub fn knapsack<V: KnapsackValue>(
    spec: &Specification<V>,
) -> Result<Solution<'_, V>, KnapsackError> {
    Solver::new().solve(spec)
}

/// Optimal value of `spec` with a default [`Solver`], skipping selection.
pub fn maximum_value<V: KnapsackValue>(spec: &Specification<V>) -> Result<V, KnapsackError> {
    Solver::new().maximum_value(spec)
}
