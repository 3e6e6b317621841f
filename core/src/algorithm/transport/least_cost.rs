//! Least-Cost rule for an initial feasible allocation
//!
//! Cost-aware counterpart of the North-West corner rule: cells are visited
//! in ascending `(cost, row, col)` order — the secondary keys make ties
//! deterministic — and each receives the most its row and column still
//! allow. Typically lands closer to the optimum than the corner sweep,
//! giving Stepping-Stone less work.

use log::debug;

use crate::algorithm::traits::{Algorithm, AlgorithmError, Weight};
use crate::algorithm::transport::{TransportPlan, TransportProblem};

/// Catalog descriptor for the Least-Cost rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastCost;

impl Algorithm for LeastCost {
    fn name(&self) -> &'static str {
        "Least-Cost"
    }

    fn category(&self) -> &'static str {
        "transport"
    }

    fn description(&self) -> &'static str {
        "Initial feasible allocation for a balanced transportation \
         problem by greedy assignment in ascending unit-cost order."
    }
}

/// Builds the Least-Cost initial plan.
pub fn least_cost(problem: &TransportProblem) -> Result<TransportPlan, AlgorithmError> {
    let rows = problem.rows();
    let cols = problem.cols();
    let mut supply: Vec<Weight> = problem.supply().to_vec();
    let mut demand: Vec<Weight> = problem.demand().to_vec();
    let mut allocation = vec![vec![0 as Weight; cols]; rows];

    let mut cells: Vec<(usize, usize)> = (0..rows)
        .flat_map(|i| (0..cols).map(move |j| (i, j)))
        .collect();
    // Stable sort on cost keeps row-major order within equal costs.
    cells.sort_by_key(|&(i, j)| problem.cost(i, j));

    for (i, j) in cells {
        if supply[i] > 0 && demand[j] > 0 {
            let quantity = supply[i].min(demand[j]);
            allocation[i][j] = quantity;
            supply[i] -= quantity;
            demand[j] -= quantity;
        }
    }

    let plan = TransportPlan::new(problem, allocation);
    debug!("least-cost initial plan costs {}", plan.total_cost);
    Ok(plan)
}
