use knapsack_dp::{
    utils::{total_value, total_weight},
    Item, Solver, SolverBuilder, Specification,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn brute_force(items: &[Item<u32>], capacity: i64) -> u32 {
    let n = items.len();
    let mut best = 0;
    for mask in 0u32..(1u32 << n) {
        let mut weight = 0i64;
        let mut value = 0u32;
        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                weight += item.weight;
                value += item.value;
            }
        }
        if weight <= capacity {
            best = best.max(value);
        }
    }
    best
}

fn solvers() -> [Solver; 3] {
    [
        Solver::new(),
        SolverBuilder::new().with_strategy(knapsack_dp::Strategy::Dense).build(),
        SolverBuilder::new().with_strategy(knapsack_dp::Strategy::Lazy).build(),
    ]
}

fn arb_spec(max_items: usize) -> impl Strategy<Value = Specification<u32>> {
    (
        0i64..25,
        proptest::collection::vec((1i64..8, 0u32..20), 0..=max_items),
    )
        .prop_map(|(capacity, pairs)| Specification::from_pairs(capacity, pairs))
}

proptest! {
    #[test]
    fn max_value_matches_brute_force(spec in arb_spec(10)) {
        let expected = brute_force(&spec.items, spec.capacity);
        for solver in solvers() {
            let solution = solver.solve(&spec).unwrap();
            prop_assert_eq!(solution.max_value(), expected);
        }
    }

    #[test]
    fn selection_realizes_max_value(spec in arb_spec(10)) {
        for solver in solvers() {
            let solution = solver.solve(&spec).unwrap();
            let chosen = solution.select();
            prop_assert!(total_weight(&chosen) <= spec.capacity);
            prop_assert_eq!(total_value(&chosen), solution.max_value());
        }
    }

    #[test]
    fn selection_indices_are_strictly_descending(spec in arb_spec(10)) {
        let solution = Solver::new().solve(&spec).unwrap();
        let indices = solution.selected_indices();
        prop_assert!(indices.windows(2).all(|w| w[0] > w[1]));
        let from_indices: Vec<Item<u32>> = indices.iter().map(|&i| spec.items[i]).collect();
        prop_assert_eq!(from_indices, solution.select());
    }

    #[test]
    fn selector_is_idempotent(spec in arb_spec(10)) {
        for solver in solvers() {
            let solution = solver.solve(&spec).unwrap();
            let first = solution.select();
            let second = solution.select();
            prop_assert_eq!(first, second);
        }
    }
}

proptest! {
    #[test]
    fn float_selection_realizes_max_value(
        capacity in 0i64..30,
        pairs in proptest::collection::vec((0i64..8, 0.0f64..10.0), 0..12),
    ) {
        let spec = Specification::from_pairs(capacity, pairs);
        for solver in solvers() {
            let solution = solver.solve(&spec).unwrap();
            let chosen = solution.select();
            prop_assert!(total_weight(&chosen) <= spec.capacity);
            prop_assert_eq!(total_value(&chosen), solution.max_value());
        }
    }
}

#[test]
fn seeded_twenty_item_instances_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..4 {
        let capacity = rng.gen_range(0..60);
        let items: Vec<Item<u32>> = (0..20)
            .map(|_| Item::new(rng.gen_range(1..15), rng.gen_range(0..40)))
            .collect();
        let spec = Specification::new(capacity, items);
        let expected = brute_force(&spec.items, spec.capacity);
        for solver in solvers() {
            let solution = solver.solve(&spec).unwrap();
            assert_eq!(solution.max_value(), expected);
            let chosen = solution.select();
            assert!(total_weight(&chosen) <= capacity);
            assert_eq!(total_value(&chosen), expected);
        }
    }
}
