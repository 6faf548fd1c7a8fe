//! Exact 0-1 knapsack via memoized dynamic programming.
//!
//! Given a capacity and a list of items, each with an integer weight and a
//! numeric value, this crate computes the largest total value of any subset
//! whose weight fits the capacity, and, only when asked, one subset that
//! achieves it.
//!
//! ## Core idea
//! 1. Describe the instance as a [`Specification`].
//! 2. [`Solver::solve`] fills a memo table over `(item prefix, capacity)` and
//!    reads the optimum from its root cell.
//! 3. [`Solution::select`] walks the table backwards to recover the items.
//!    Ties in the recurrence always go to *excluding* the item, which is what
//!    makes that walk deterministic.
//!
//! Two storage strategies are available: dense bottom-up tabulation, and lazy
//! memoization of only the cells the root depends on. The solver picks dense
//! storage when the full table fits under a configurable cell limit.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{knapsack, maximum_value, Item, Specification};
//!
//! let spec = Specification::from_pairs(5, [(2, 3), (3, 4), (4, 5), (5, 6)]);
//! assert_eq!(maximum_value(&spec).unwrap(), 7);
//!
//! let solution = knapsack(&spec).unwrap();
//! assert_eq!(solution.select(), vec![Item::new(3, 4), Item::new(2, 3)]);
//! ```
//!
//! ## Errors
//! Negative capacities, negative weights and NaN values are rejected with
//! [`KnapsackError::InvalidInput`]; nothing is clamped silently.

pub mod builder;
pub mod error;
pub mod instance;
pub mod solver;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::SolverBuilder;
pub use crate::error::{InvalidInput, KnapsackError};
pub use crate::instance::{Item, Specification};
pub use crate::solver::{knapsack, maximum_value, Solution, Solver, Strategy};
pub use crate::traits::{KnapsackValue, MemoTable};
