//! Core trait definitions for the knapsack dynamic program.
//!
//! Two seams keep the solver generic:
//! - [`KnapsackValue`]: the numeric type carried by item values. Integers and
//!   floats both qualify; the recurrence only needs `+`, a zero and a
//!   comparison that is total over the values it actually sees.
//! - [`MemoTable`]: a populated (or lazily populated) table of best values,
//!   indexed by item prefix and capacity. The selection walk is written once
//!   against this trait and works for every storage strategy.

use std::fmt::Debug;
use std::ops::Add;

/// Numeric type usable as an item value.
///
/// Semantics:
/// - `zero()` is the value of an empty selection.
/// - Sums are formed with `+`; integer overflow follows the usual Rust rules
///   for the concrete type.
/// - `PartialOrd` must be a total order on every value passed to the solver.
///   Types with unordered members (floats) report them through
///   [`is_ordered`](KnapsackValue::is_ordered) so that the solver can reject
///   them as invalid input.
pub trait KnapsackValue: Copy + PartialOrd + Add<Output = Self> + Debug {
    /// Additive identity.
    fn zero() -> Self;

    /// Whether this value takes part in the total order.
    #[inline]
    fn is_ordered(&self) -> bool {
        true
    }
}

macro_rules! impl_integer_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl KnapsackValue for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

macro_rules! impl_float_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl KnapsackValue for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn is_ordered(&self) -> bool {
                    !self.is_nan()
                }
            }
        )*
    };
}

impl_integer_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_value!(f32, f64);

/// Table of best achievable values for a fixed specification.
///
/// Rows are item *prefixes*: row `p` considers items `0..p`, so row `0` is the
/// empty prefix and is zero at every capacity. Columns are capacities
/// `0..=capacity()`.
///
/// Implementations may compute cells eagerly or on demand, but a cell, once
/// computed, never changes.
pub trait MemoTable<V: KnapsackValue> {
    /// Number of items `n`; valid prefixes are `0..=n`.
    fn num_items(&self) -> usize;

    /// Full capacity of the specification; valid columns are `0..=capacity`.
    fn capacity(&self) -> usize;

    /// Best total value using items `0..prefix` with at most `capacity` weight.
    ///
    /// Callers must keep `prefix <= num_items()` and
    /// `capacity <= self.capacity()`.
    fn value(&self, prefix: usize, capacity: usize) -> V;
}

#[cfg(test)]
mod tests {
    use super::KnapsackValue;

    #[test]
    fn integer_zero_and_order() {
        assert_eq!(<u32 as KnapsackValue>::zero(), 0);
        assert_eq!(<i64 as KnapsackValue>::zero(), 0);
        assert!((-5i32).is_ordered());
    }

    #[test]
    fn floats_reject_nan_only() {
        assert_eq!(<f64 as KnapsackValue>::zero(), 0.0);
        assert!(1.5f64.is_ordered());
        assert!(f64::INFINITY.is_ordered());
        assert!(!f64::NAN.is_ordered());
        assert!(!f32::NAN.is_ordered());
    }
}
