//! Example: choosing what to pack under a weight limit.
//!
//! Run with:
//! `cargo run --example knapsack`

use knapsack_dp::utils::{total_value, total_weight};
use knapsack_dp::{knapsack, Item, SolverBuilder, Specification, Strategy};

fn main() {
    // (weight, value) pairs, capacity 10
    let names = ["map", "compass", "water", "sandwich", "glucose", "tin", "banana"];
    let spec = Specification::new(
        10,
        vec![
            Item::new(1, 150.0),
            Item::new(1, 35.0),
            Item::new(5, 200.0),
            Item::new(3, 160.0),
            Item::new(2, 60.0),
            Item::new(4, 45.0),
            Item::new(3, 60.0),
        ],
    );

    let solution = match knapsack(&spec) {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("knapsack: {err}");
            std::process::exit(1);
        }
    };

    println!("Best value: {}", solution.max_value());
    println!("Packed (last item first):");
    for index in solution.selected_indices() {
        let item = spec.items[index];
        println!("  {:<10} weight={} value={}", names[index], item.weight, item.value);
    }
    let chosen = solution.select();
    println!(
        "Total weight {} of {}, total value {}",
        total_weight(&chosen),
        spec.capacity,
        total_value(&chosen)
    );

    // Same instance through the lazy memo.
    let lazy = SolverBuilder::new().with_strategy(Strategy::Lazy).build();
    match lazy.maximum_value(&spec) {
        Ok(best) => println!("Lazy memo agrees: {best}"),
        Err(err) => eprintln!("lazy solve failed: {err}"),
    }
}
