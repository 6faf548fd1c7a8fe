//! Memo table storage strategies.
//!
//! Both tables evaluate the same recurrence over item prefixes:
//!
//! ```text
//! value(0, c)     = 0
//! value(p, 0)     = 0
//! value(p, c)     = value(p-1, c)                         if w[p-1] > c
//!                 = best_of(value(p-1, c),
//!                           value(p-1, c - w[p-1]) + v[p-1])  otherwise
//! ```
//!
//! where `best_of` keeps the exclusion value unless inclusion is strictly
//! better. The selection walk in [`crate::solver`] relies on that strictness to
//! replay decisions from the table alone.
//!
//! - [`DenseTable`] fills every cell bottom-up, one row per item.
//! - [`LazyTable`] computes only the cells reachable from the queried root and
//!   caches them in a hash map.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::instance::Item;
use crate::traits::{KnapsackValue, MemoTable};
use crate::utils::weight_units;

/// One cell of the recurrence.
///
/// `included` is `None` when the item does not fit. Ties go to exclusion.
#[inline]
pub(crate) fn best_of<V: KnapsackValue>(excluded: V, included: Option<V>) -> V {
    match included {
        Some(v) if v > excluded => v,
        _ => excluded,
    }
}

/// Fully tabulated `(n + 1) x (capacity + 1)` table in a flat row-major array.
#[derive(Clone, Debug)]
pub struct DenseTable<V> {
    num_items: usize,
    width: usize,
    cells: Vec<V>,
}

impl<V: KnapsackValue> DenseTable<V> {
    /// Fill the table for `items` under `capacity`.
    ///
    /// The caller is responsible for having validated the items and checked
    /// that `(items.len() + 1) * (capacity + 1)` cells fit in memory.
    pub fn build(items: &[Item<V>], capacity: usize) -> Self {
        let num_items = items.len();
        let width = capacity + 1;
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("dense_fill", items = num_items, width);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut cells = Vec::with_capacity(width * (num_items + 1));
        cells.resize(width, V::zero());
        let mut next = Vec::with_capacity(width);
        for (p, item) in items.iter().enumerate() {
            let prev = &cells[p * width..(p + 1) * width];
            forward_step(prev, weight_units(item.weight), item.value, &mut next);
            cells.extend_from_slice(&next);
        }

        Self {
            num_items,
            width,
            cells,
        }
    }

    /// Total number of stored cells, including the zero row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: the zero row is stored even for an empty instance.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row `p` of the table as a slice indexed by capacity.
    pub fn row(&self, prefix: usize) -> &[V] {
        &self.cells[prefix * self.width..(prefix + 1) * self.width]
    }
}

/// Advance one row: from prefix `p` to prefix `p + 1` by offering one item.
fn forward_step<V: KnapsackValue>(prev: &[V], weight: usize, value: V, next: &mut Vec<V>) {
    next.clear();
    next.extend(prev.iter().enumerate().map(|(c, &excluded)| {
        if c == 0 {
            return V::zero();
        }
        let included = (weight <= c).then(|| prev[c - weight] + value);
        best_of(excluded, included)
    }));
}

impl<V: KnapsackValue> MemoTable<V> for DenseTable<V> {
    fn num_items(&self) -> usize {
        self.num_items
    }

    fn capacity(&self) -> usize {
        self.width - 1
    }

    #[inline]
    fn value(&self, prefix: usize, capacity: usize) -> V {
        self.cells[prefix * self.width + capacity]
    }
}

/// Lazily memoized table keyed by `(prefix, capacity)`.
///
/// Cells are computed on first query with an explicit work stack, so deep
/// item lists do not grow the call stack. The memo uses interior mutability;
/// a `LazyTable` is confined to one thread.
#[derive(Debug)]
pub struct LazyTable<'a, V> {
    items: &'a [Item<V>],
    weights: Vec<usize>,
    capacity: usize,
    memo: RefCell<HashMap<(usize, usize), V>>,
}

impl<'a, V: KnapsackValue> LazyTable<'a, V> {
    /// Create an empty memo over validated `items`.
    pub fn new(items: &'a [Item<V>], capacity: usize) -> Self {
        Self {
            items,
            weights: items.iter().map(|item| weight_units(item.weight)).collect(),
            capacity,
            memo: RefCell::new(HashMap::new()),
        }
    }

    /// Number of cells computed so far. The zero row and zero column are
    /// implicit and never stored.
    pub fn computed_cells(&self) -> usize {
        self.memo.borrow().len()
    }

    fn lookup(&self, prefix: usize, capacity: usize) -> Option<V> {
        if prefix == 0 || capacity == 0 {
            return Some(V::zero());
        }
        self.memo.borrow().get(&(prefix, capacity)).copied()
    }

    fn evaluate(&self, prefix: usize, capacity: usize) -> V {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("lazy_evaluate", prefix, capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut resolved = V::zero();
        let mut stack = vec![(prefix, capacity)];
        while let Some(&(p, c)) = stack.last() {
            if let Some(v) = self.lookup(p, c) {
                resolved = v;
                stack.pop();
                continue;
            }

            let weight = self.weights[p - 1];
            let excluded = self.lookup(p - 1, c);
            let remainder = if weight <= c {
                Some(self.lookup(p - 1, c - weight))
            } else {
                None
            };

            match (excluded, remainder) {
                (None, _) => stack.push((p - 1, c)),
                (Some(_), Some(None)) => stack.push((p - 1, c - weight)),
                (Some(excluded), remainder) => {
                    let included = remainder.flatten().map(|r| r + self.items[p - 1].value);
                    let v = best_of(excluded, included);
                    self.memo.borrow_mut().insert((p, c), v);
                    resolved = v;
                    stack.pop();
                }
            }
        }
        resolved
    }
}

impl<V: KnapsackValue> MemoTable<V> for LazyTable<'_, V> {
    fn num_items(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn value(&self, prefix: usize, capacity: usize) -> V {
        match self.lookup(prefix, capacity) {
            Some(v) => v,
            None => self.evaluate(prefix, capacity),
        }
    }
}
