//! Problem instances: items and the specification handed to the solver.

use crate::error::InvalidInput;
use crate::traits::KnapsackValue;

/// A single indivisible item.
///
/// `weight` is measured in the same discrete units as the specification's
/// capacity. It is signed only so that malformed input can be represented and
/// rejected; valid items have `weight >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Item<V> {
    pub weight: i64,
    pub value: V,
}

impl<V> Item<V> {
    pub fn new(weight: i64, value: V) -> Self {
        Self { weight, value }
    }
}

impl<V> From<(i64, V)> for Item<V> {
    fn from((weight, value): (i64, V)) -> Self {
        Self { weight, value }
    }
}

/// A 0-1 knapsack instance.
///
/// Item order carries no meaning beyond fixing the indices `0..n` and, through
/// them, which of several equally good selections is reported.
#[derive(Clone, Debug, PartialEq)]
pub struct Specification<V> {
    pub capacity: i64,
    pub items: Vec<Item<V>>,
}

impl<V: KnapsackValue> Specification<V> {
    pub fn new(capacity: i64, items: Vec<Item<V>>) -> Self {
        Self { capacity, items }
    }

    /// Build from `(weight, value)` pairs.
    pub fn from_pairs<I>(capacity: i64, pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, V)>,
    {
        Self {
            capacity,
            items: pairs.into_iter().map(Item::from).collect(),
        }
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check the input contract.
    ///
    /// Rejects negative capacity, negative weights and values outside the
    /// total order. The first offending field (capacity, then items in index
    /// order) is reported.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.capacity < 0 {
            return Err(InvalidInput::NegativeCapacity {
                capacity: self.capacity,
            });
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.weight < 0 {
                return Err(InvalidInput::NegativeWeight {
                    index,
                    weight: item.weight,
                });
            }
            if !item.value.is_ordered() {
                return Err(InvalidInput::UnorderedValue { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_keeps_order() {
        let spec = Specification::from_pairs(5, [(2, 3), (3, 4)]);
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.items[0], Item::new(2, 3));
        assert_eq!(spec.items[1], Item::new(3, 4));
    }

    #[test]
    fn empty_spec_is_valid() {
        let spec: Specification<u32> = Specification::new(0, Vec::new());
        assert!(spec.is_empty());
        assert_eq!(spec.validate(), Ok(()));
    }

    #[test]
    fn negative_capacity_reported_before_items() {
        let spec = Specification::from_pairs(-1, [(-4, 1)]);
        assert_eq!(
            spec.validate(),
            Err(InvalidInput::NegativeCapacity { capacity: -1 })
        );
    }

    #[test]
    fn first_bad_item_reported() {
        let spec = Specification::from_pairs(10, [(1, 1.0), (2, f64::NAN), (-3, 1.0)]);
        assert_eq!(
            spec.validate(),
            Err(InvalidInput::UnorderedValue { index: 1 })
        );

        let spec = Specification::from_pairs(10, [(1, 1), (-3, 1)]);
        assert_eq!(
            spec.validate(),
            Err(InvalidInput::NegativeWeight {
                index: 1,
                weight: -3
            })
        );
    }
}
