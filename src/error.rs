//! Error types returned by the solver.
//!
//! Every failure is detected up front, before any table work starts, and is
//! deterministic: retrying the same specification fails the same way.

use thiserror::Error;

/// Ways a [`Specification`](crate::instance::Specification) can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("capacity must be non-negative, got {capacity}")]
    NegativeCapacity { capacity: i64 },

    #[error("item {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: i64 },

    #[error("item {index} has a value that cannot be ordered (NaN)")]
    UnorderedValue { index: usize },
}

/// Top-level error for [`Solver::solve`](crate::solver::Solver::solve) and
/// [`maximum_value`](crate::solver::maximum_value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The dense table for this instance cannot be allocated: either the cell
    /// count overflows `usize` or it exceeds the configured cell limit.
    #[error("memo table for {items} items at capacity {capacity} exceeds the limit of {limit} cells")]
    TableTooLarge {
        items: usize,
        capacity: i64,
        limit: usize,
    },
}

impl KnapsackError {
    /// True for the `InvalidInput` family.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, KnapsackError::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_converts_and_displays() {
        let err: KnapsackError = InvalidInput::NegativeCapacity { capacity: -3 }.into();
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "invalid input: capacity must be non-negative, got -3"
        );
    }

    #[test]
    fn table_too_large_is_not_invalid_input() {
        let err = KnapsackError::TableTooLarge {
            items: 4,
            capacity: 1 << 40,
            limit: 1024,
        };
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("limit of 1024 cells"));
    }
}
