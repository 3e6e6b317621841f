//! Transportation-problem solvers
//!
//! A transportation problem ships quantities from supply points (rows) to
//! demand points (columns) at per-cell unit costs. Two heuristics build an
//! initial feasible allocation — the cost-blind North-West corner rule and
//! the cost-aware Least-Cost rule — and the Stepping-Stone method then
//! improves a feasible allocation to (local) optimality via closed-loop
//! reallocation.
//!
//! All three share the balance precondition `sum(supply) == sum(demand)`,
//! checked when the [`TransportProblem`] is constructed.

pub mod least_cost;
pub mod north_west;
pub mod stepping_stone;

pub use self::least_cost::{least_cost, LeastCost};
pub use self::north_west::{north_west, NorthWest};
pub use self::stepping_stone::{
    stepping_stone, ImprovementStep, SteppingStone, SteppingStoneResult,
};

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, Weight};

/// Validated, balanced transportation problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportProblem {
    supply: Vec<Weight>,
    demand: Vec<Weight>,
    cost: Vec<Vec<Weight>>,
}

impl TransportProblem {
    /// Validates shapes, signs, and the balance precondition.
    ///
    /// # Errors
    /// [`AlgorithmError::InvalidInput`] for empty vectors, a cost matrix
    /// whose shape does not match, or negative entries;
    /// [`AlgorithmError::UnbalancedProblem`] when total supply and total
    /// demand differ.
    pub fn new(
        supply: Vec<Weight>,
        demand: Vec<Weight>,
        cost: Vec<Vec<Weight>>,
    ) -> Result<Self, AlgorithmError> {
        if supply.is_empty() || demand.is_empty() {
            return Err(AlgorithmError::InvalidInput(
                "supply and demand must be non-empty".into(),
            ));
        }
        if cost.len() != supply.len() || cost.iter().any(|row| row.len() != demand.len()) {
            return Err(AlgorithmError::InvalidInput(format!(
                "cost matrix must be {} x {}",
                supply.len(),
                demand.len()
            )));
        }
        if supply.iter().any(|&s| s < 0) || demand.iter().any(|&d| d < 0) {
            return Err(AlgorithmError::InvalidInput(
                "supplies and demands must be non-negative".into(),
            ));
        }
        if cost.iter().flatten().any(|&c| c < 0) {
            return Err(AlgorithmError::InvalidInput(
                "unit costs must be non-negative".into(),
            ));
        }

        let total_supply: Weight = supply.iter().sum();
        let total_demand: Weight = demand.iter().sum();
        if total_supply != total_demand {
            return Err(AlgorithmError::UnbalancedProblem {
                supply: total_supply,
                demand: total_demand,
            });
        }

        Ok(Self {
            supply,
            demand,
            cost,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.supply.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.demand.len()
    }

    #[inline]
    pub fn supply(&self) -> &[Weight] {
        &self.supply
    }

    #[inline]
    pub fn demand(&self) -> &[Weight] {
        &self.demand
    }

    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> Weight {
        self.cost[row][col]
    }

    /// Total cost of shipping `allocation` under this problem's unit costs.
    pub fn total_cost(&self, allocation: &[Vec<Weight>]) -> Weight {
        allocation
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &q)| (i, j, q)))
            .map(|(i, j, q)| q * self.cost[i][j])
            .sum()
    }
}

/// A feasible shipping plan: allocation matrix plus its total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportPlan {
    /// Quantity shipped per (supply row, demand column) cell.
    pub allocation: Vec<Vec<Weight>>,
    pub total_cost: Weight,
}

impl TransportPlan {
    pub(crate) fn new(problem: &TransportProblem, allocation: Vec<Vec<Weight>>) -> Self {
        let total_cost = problem.total_cost(&allocation);
        Self {
            allocation,
            total_cost,
        }
    }

    /// Checks the feasibility invariant: non-negative cells whose row and
    /// column sums match the problem's supplies and demands exactly.
    pub fn is_feasible(&self, problem: &TransportProblem) -> bool {
        if self.allocation.len() != problem.rows()
            || self
                .allocation
                .iter()
                .any(|row| row.len() != problem.cols())
        {
            return false;
        }
        if self.allocation.iter().flatten().any(|&q| q < 0) {
            return false;
        }
        let row_ok = self
            .allocation
            .iter()
            .zip(problem.supply())
            .all(|(row, &s)| row.iter().sum::<Weight>() == s);
        let col_ok = (0..problem.cols()).all(|j| {
            self.allocation.iter().map(|row| row[j]).sum::<Weight>() == problem.demand()[j]
        });
        row_ok && col_ok
    }

    /// Number of strictly positive cells; a non-degenerate basic solution
    /// has exactly `rows + cols - 1` of them.
    pub fn basic_cell_count(&self) -> usize {
        self.allocation.iter().flatten().filter(|&&q| q > 0).count()
    }
}
