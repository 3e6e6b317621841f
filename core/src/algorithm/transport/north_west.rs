//! North-West corner rule for an initial feasible allocation
//!
//! Cost-blind: a cursor starts at the top-left cell and ships as much as
//! the row's remaining supply and the column's remaining demand allow,
//! moving down when the row empties and right when the column does. The
//! balance precondition guarantees both exhaust together.

use log::debug;

use crate::algorithm::traits::{Algorithm, AlgorithmError, Weight};
use crate::algorithm::transport::{TransportPlan, TransportProblem};

/// Catalog descriptor for the North-West corner rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct NorthWest;

impl Algorithm for NorthWest {
    fn name(&self) -> &'static str {
        "North-West Corner"
    }

    fn category(&self) -> &'static str {
        "transport"
    }

    fn description(&self) -> &'static str {
        "Initial feasible allocation for a balanced transportation \
         problem by cursor sweep from the top-left cell, ignoring costs \
         entirely."
    }
}

/// Builds the North-West corner initial plan.
pub fn north_west(problem: &TransportProblem) -> Result<TransportPlan, AlgorithmError> {
    let rows = problem.rows();
    let cols = problem.cols();
    let mut supply: Vec<Weight> = problem.supply().to_vec();
    let mut demand: Vec<Weight> = problem.demand().to_vec();
    let mut allocation = vec![vec![0 as Weight; cols]; rows];

    let (mut i, mut j) = (0, 0);
    while i < rows && j < cols {
        let quantity = supply[i].min(demand[j]);
        allocation[i][j] = quantity;
        supply[i] -= quantity;
        demand[j] -= quantity;

        // Row exhaustion wins the tie so a fully served corner still
        // advances deterministically.
        if supply[i] == 0 {
            i += 1;
        } else if demand[j] == 0 {
            j += 1;
        }
    }

    let plan = TransportPlan::new(problem, allocation);
    debug!("north-west initial plan costs {}", plan.total_cost);
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_from_the_top_left_corner() {
        let problem = TransportProblem::new(
            vec![20, 30],
            vec![10, 40],
            vec![vec![4, 6], vec![8, 2]],
        )
        .unwrap();

        let plan = north_west(&problem).unwrap();
        assert_eq!(plan.allocation, vec![vec![10, 10], vec![0, 30]]);
        assert_eq!(plan.total_cost, 10 * 4 + 10 * 6 + 30 * 2);
        assert!(plan.is_feasible(&problem));
    }

    #[test]
    fn result_is_feasible_regardless_of_costs() {
        let problem = TransportProblem::new(
            vec![15, 25, 10],
            vec![5, 15, 15, 15],
            vec![
                vec![10, 2, 20, 11],
                vec![12, 7, 9, 20],
                vec![4, 14, 16, 18],
            ],
        )
        .unwrap();

        let plan = north_west(&problem).unwrap();
        assert!(plan.is_feasible(&problem));
        assert_eq!(plan.allocation, vec![
            vec![5, 10, 0, 0],
            vec![0, 5, 15, 5],
            vec![0, 0, 0, 10],
        ]);
        // Non-degenerate basic solution: rows + cols - 1 positive cells.
        assert_eq!(plan.basic_cell_count(), 3 + 4 - 1);
    }

    #[test]
    fn single_cell_problem_ships_everything_at_once() {
        let problem = TransportProblem::new(vec![7], vec![7], vec![vec![3]]).unwrap();
        let plan = north_west(&problem).unwrap();
        assert_eq!(plan.allocation, vec![vec![7]]);
        assert_eq!(plan.total_cost, 21);
    }
}
