use crate::solver::{Solver, Strategy};
use crate::utils::DEFAULT_CELL_LIMIT;

pub struct SolverBuilder {
    strategy: Option<Strategy>,
    cell_limit: Option<usize>,
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self {
            strategy: None,
            cell_limit: None,
        }
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn with_cell_limit(mut self, cell_limit: usize) -> Self {
        self.cell_limit = Some(cell_limit);
        self
    }
    pub fn build(self) -> Solver {
        Solver::with_config(
            self.strategy,
            self.cell_limit.unwrap_or(DEFAULT_CELL_LIMIT),
        )
    }
}
