use knapsack_dp::{maximum_value, Item, Specification};
use proptest::prelude::*;

fn arb_pairs() -> impl Strategy<Value = Vec<(i64, u32)>> {
    proptest::collection::vec((0i64..10, 0u32..30), 0..12)
}

proptest! {
    #[test]
    fn more_capacity_never_hurts(pairs in arb_pairs(), capacity in 0i64..30, extra in 0i64..10) {
        let small = Specification::from_pairs(capacity, pairs.clone());
        let large = Specification::from_pairs(capacity + extra, pairs);
        prop_assert!(maximum_value(&large).unwrap() >= maximum_value(&small).unwrap());
    }

    #[test]
    fn more_items_never_hurt(
        pairs in arb_pairs(),
        capacity in 0i64..30,
        weight in 0i64..10,
        value in 0u32..30,
        position in 0usize..12,
    ) {
        let before = Specification::from_pairs(capacity, pairs);
        let mut after = before.clone();
        let at = position.min(after.items.len());
        after.items.insert(at, Item::new(weight, value));
        prop_assert!(maximum_value(&after).unwrap() >= maximum_value(&before).unwrap());
    }

    #[test]
    fn item_order_does_not_change_value(
        pairs in proptest::collection::vec((1i64..10, 0u32..30), 0..12),
        capacity in 0i64..30,
    ) {
        let forward = Specification::from_pairs(capacity, pairs.clone());
        let backward = Specification::from_pairs(capacity, pairs.into_iter().rev());
        prop_assert_eq!(maximum_value(&forward).unwrap(), maximum_value(&backward).unwrap());
    }
}
