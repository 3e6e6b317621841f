//! Stepping-Stone improvement of a feasible transportation plan
//!
//! Starting from any feasible basic plan (North-West corner or Least-Cost),
//! the method repeatedly looks for an empty cell whose closed loop through
//! occupied cells has a negative alternating cost sum, then shifts as much
//! quantity as the loop allows around it. When no loop improves the cost
//! the plan is optimal over the reachable bases.
//!
//! The loop search is an explicit DFS over the bipartite row/column
//! structure of the basis: moves alternate between rows and columns, and
//! each row or column hosts at most one move, so the search depth is
//! bounded by `rows + cols`.
//!
//! Degeneracy is handled explicitly. The basis is tracked as a cell set
//! separate from the allocation, so a cell can be basic at quantity zero.
//! An empty cell with no closed loop is skipped, and a loop whose shift
//! quantity is zero still exchanges the entering and leaving cells.

use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, AlgorithmError, Weight};
use crate::algorithm::transport::{TransportPlan, TransportProblem};

/// Catalog descriptor for the Stepping-Stone method.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteppingStone;

impl Algorithm for SteppingStone {
    fn name(&self) -> &'static str {
        "Stepping-Stone"
    }

    fn category(&self) -> &'static str {
        "transport"
    }

    fn description(&self) -> &'static str {
        "Improves a feasible transportation plan to optimality by shifting \
         quantity around negative-cost closed loops of occupied cells."
    }
}

/// One applied improvement: the entering cell, its closed loop, and the
/// quantity moved around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementStep {
    /// Empty cell brought into the basis.
    pub entering: (usize, usize),
    /// Basic cell removed from the basis.
    pub leaving: (usize, usize),
    /// Loop cells starting at `entering`; even positions gain quantity,
    /// odd positions lose it.
    pub cells: Vec<(usize, usize)>,
    /// Alternating cost sum around the loop, strictly negative.
    pub improvement: Weight,
    /// Quantity moved; zero for a pure basis exchange on a degenerate plan.
    pub shift: Weight,
    /// Plan cost after applying the step.
    pub cost_after: Weight,
}

/// Outcome of the improvement loop: the optimized plan plus the teaching
/// trace of every step taken and the final dual potentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteppingStoneResult {
    pub plan: TransportPlan,
    /// Cost of the plan the method started from.
    pub initial_cost: Weight,
    /// Number of improvement steps applied.
    pub iterations: usize,
    pub improvements: Vec<ImprovementStep>,
    /// Dual potential per supply row, `cost = u + v` on basic cells.
    pub row_potentials: Vec<Weight>,
    /// Dual potential per demand column.
    pub col_potentials: Vec<Weight>,
}

/// Optimizes `initial` in place of quantity shifts around closed loops.
///
/// # Errors
/// [`AlgorithmError::InvalidInput`] when `initial` is not feasible for
/// `problem`; [`AlgorithmError::ResourceExhausted`] if the improvement
/// loop exceeds its `rows * cols * 64` fail-safe bound.
pub fn stepping_stone(
    problem: &TransportProblem,
    initial: TransportPlan,
) -> Result<SteppingStoneResult, AlgorithmError> {
    if !initial.is_feasible(problem) {
        return Err(AlgorithmError::InvalidInput(
            "initial plan is not a feasible allocation for this problem".into(),
        ));
    }

    let rows = problem.rows();
    let cols = problem.cols();
    let initial_cost = initial.total_cost;
    let mut allocation = initial.allocation;
    let mut basis: Vec<Vec<bool>> = allocation
        .iter()
        .map(|row| row.iter().map(|&q| q > 0).collect())
        .collect();

    let cap = rows * cols * 64;
    let mut improvements: Vec<ImprovementStep> = Vec::new();

    loop {
        // Most negative loop over all empty cells, row-major tie-break.
        let mut best: Option<(Weight, Vec<(usize, usize)>)> = None;
        for i in 0..rows {
            for j in 0..cols {
                if basis[i][j] {
                    continue;
                }
                let Some(cells) = find_loop(&basis, (i, j)) else {
                    continue;
                };
                let delta = loop_delta(problem, &cells);
                if delta < 0 && best.as_ref().map_or(true, |(b, _)| delta < *b) {
                    best = Some((delta, cells));
                }
            }
        }

        let Some((improvement, cells)) = best else {
            break;
        };
        if improvements.len() == cap {
            return Err(AlgorithmError::ResourceExhausted {
                phase: "stepping-stone improvement",
                iterations: cap,
            });
        }

        // Shift quantity is set by the tightest losing cell; ties resolve
        // to the earliest loop position so the leaving cell is unique.
        let (shift, leaving) = cells
            .iter()
            .enumerate()
            .filter(|(k, _)| k % 2 == 1)
            .map(|(_, &(i, j))| (allocation[i][j], (i, j)))
            .min_by_key(|&(q, _)| q)
            .unwrap();

        for (k, &(i, j)) in cells.iter().enumerate() {
            if k % 2 == 0 {
                allocation[i][j] += shift;
            } else {
                allocation[i][j] -= shift;
            }
        }
        let entering = cells[0];
        basis[entering.0][entering.1] = true;
        basis[leaving.0][leaving.1] = false;

        let cost_after = problem.total_cost(&allocation);
        debug!(
            "stepping-stone: ({}, {}) enters, ({}, {}) leaves, {} units at {} per unit, cost {}",
            entering.0, entering.1, leaving.0, leaving.1, shift, improvement, cost_after
        );
        improvements.push(ImprovementStep {
            entering,
            leaving,
            cells,
            improvement,
            shift,
            cost_after,
        });
    }

    let (row_potentials, col_potentials) = potentials(problem, &basis);
    let plan = TransportPlan::new(problem, allocation);
    Ok(SteppingStoneResult {
        iterations: improvements.len(),
        plan,
        initial_cost,
        improvements,
        row_potentials,
        col_potentials,
    })
}

/// Alternating +/- cost sum around a closed loop, entering cell first.
fn loop_delta(problem: &TransportProblem, cells: &[(usize, usize)]) -> Weight {
    cells
        .iter()
        .enumerate()
        .map(|(k, &(i, j))| {
            let c = problem.cost(i, j);
            if k % 2 == 0 {
                c
            } else {
                -c
            }
        })
        .sum()
}

/// Closed loop through basic cells starting at `start`, or `None` when the
/// basis offers no such loop (degenerate plan).
///
/// The returned cells alternate row and column moves beginning with a row
/// move, so the closing edge back to `start` is always a column move and
/// the loop length is even and at least 4. Starting with a row move loses
/// nothing: traversing the same loop the other way around starts with the
/// column move.
fn find_loop(basis: &[Vec<bool>], start: (usize, usize)) -> Option<Vec<(usize, usize)>> {
    let mut path = vec![start];
    let mut used_rows = vec![false; basis.len()];
    let mut used_cols = vec![false; basis[0].len()];
    if search(basis, start, &mut path, &mut used_rows, &mut used_cols) {
        Some(path)
    } else {
        None
    }
}

fn search(
    basis: &[Vec<bool>],
    start: (usize, usize),
    path: &mut Vec<(usize, usize)>,
    used_rows: &mut [bool],
    used_cols: &mut [bool],
) -> bool {
    let &last = path.last().unwrap();
    // Cells at odd positions are reached by a row move, even by a column
    // move; each move consumes its row or column, bounding the depth.
    if path.len() % 2 == 1 {
        if used_rows[last.0] {
            return false;
        }
        used_rows[last.0] = true;
        if path.len() >= 3
            && start.1 != last.1
            && !used_cols[start.1]
            && basis[last.0][start.1]
        {
            path.push((last.0, start.1));
            return true;
        }
        for j in 0..basis[0].len() {
            if j != last.1 && basis[last.0][j] {
                path.push((last.0, j));
                if search(basis, start, path, used_rows, used_cols) {
                    return true;
                }
                path.pop();
            }
        }
        used_rows[last.0] = false;
    } else {
        if used_cols[last.1] {
            return false;
        }
        used_cols[last.1] = true;
        for i in 0..basis.len() {
            if i != last.0 && basis[i][last.1] {
                path.push((i, last.1));
                if search(basis, start, path, used_rows, used_cols) {
                    return true;
                }
                path.pop();
            }
        }
        used_cols[last.1] = false;
    }
    false
}

/// Dual potentials `u[i]`, `v[j]` with `cost = u + v` on basic cells,
/// propagated by BFS over the bipartite graph the basis induces. Each
/// connected component is seeded with 0 at its first row, so a degenerate
/// basis still gets a full assignment.
fn potentials(problem: &TransportProblem, basis: &[Vec<bool>]) -> (Vec<Weight>, Vec<Weight>) {
    enum Axis {
        Row(usize),
        Col(usize),
    }

    let rows = problem.rows();
    let cols = problem.cols();
    let mut u = vec![0; rows];
    let mut v = vec![0; cols];
    let mut seen_row = vec![false; rows];
    let mut seen_col = vec![false; cols];
    let mut queue = VecDeque::new();

    for seed in 0..rows {
        if seen_row[seed] {
            continue;
        }
        seen_row[seed] = true;
        queue.push_back(Axis::Row(seed));
        while let Some(axis) = queue.pop_front() {
            match axis {
                Axis::Row(i) => {
                    for j in 0..cols {
                        if basis[i][j] && !seen_col[j] {
                            v[j] = problem.cost(i, j) - u[i];
                            seen_col[j] = true;
                            queue.push_back(Axis::Col(j));
                        }
                    }
                }
                Axis::Col(j) => {
                    for i in 0..rows {
                        if basis[i][j] && !seen_row[i] {
                            u[i] = problem.cost(i, j) - v[j];
                            seen_row[i] = true;
                            queue.push_back(Axis::Row(i));
                        }
                    }
                }
            }
        }
    }
    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::transport::{least_cost, north_west};

    fn textbook_problem() -> TransportProblem {
        TransportProblem::new(
            vec![15, 25, 10],
            vec![5, 15, 15, 15],
            vec![
                vec![10, 2, 20, 11],
                vec![12, 7, 9, 20],
                vec![4, 14, 16, 18],
            ],
        )
        .unwrap()
    }

    #[test]
    fn already_optimal_plan_is_returned_unchanged() {
        let problem = TransportProblem::new(
            vec![20, 30],
            vec![10, 40],
            vec![vec![4, 6], vec![8, 2]],
        )
        .unwrap();
        let initial = north_west(&problem).unwrap();

        let result = stepping_stone(&problem, initial.clone()).unwrap();
        assert_eq!(result.plan, initial);
        assert_eq!(result.initial_cost, 160);
        assert_eq!(result.iterations, 0);
        assert!(result.improvements.is_empty());
        // Basis {(0,0), (0,1), (1,1)} with u[0] = 0.
        assert_eq!(result.row_potentials, vec![0, -4]);
        assert_eq!(result.col_potentials, vec![4, 6]);
    }

    #[test]
    fn north_west_start_reaches_the_optimum() {
        let problem = textbook_problem();
        let initial = north_west(&problem).unwrap();
        assert_eq!(initial.total_cost, 520);

        let result = stepping_stone(&problem, initial).unwrap();
        assert_eq!(result.initial_cost, 520);
        assert_eq!(result.plan.total_cost, 435);
        assert!(result.plan.is_feasible(&problem));

        // Three steps: the middle one is a pure basis exchange.
        assert_eq!(result.iterations, 3);
        let costs: Vec<_> = result.improvements.iter().map(|s| s.cost_after).collect();
        assert_eq!(costs, vec![475, 475, 435]);
        assert_eq!(result.improvements[1].shift, 0);
        assert!(result.improvements.iter().all(|s| s.improvement < 0));
    }

    #[test]
    fn potentials_reconstruct_costs_on_basic_cells() {
        let problem = textbook_problem();
        let result = stepping_stone(&problem, north_west(&problem).unwrap()).unwrap();

        for i in 0..problem.rows() {
            for j in 0..problem.cols() {
                if result.plan.allocation[i][j] > 0 {
                    assert_eq!(
                        result.row_potentials[i] + result.col_potentials[j],
                        problem.cost(i, j),
                        "potentials must split the cost of basic cell ({i}, {j})",
                    );
                }
            }
        }
    }

    #[test]
    fn loopless_cells_of_a_degenerate_basis_are_skipped() {
        // The greedy start is degenerate here: 5 basic cells instead of 6,
        // which leaves several empty cells without a closed loop.
        let problem = textbook_problem();
        let initial = least_cost(&problem).unwrap();
        assert_eq!(initial.basic_cell_count(), 5);
        assert_eq!(initial.total_cost, 475);

        let result = stepping_stone(&problem, initial).unwrap();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.plan.total_cost, 475);
        assert!(result.plan.is_feasible(&problem));
    }

    #[test]
    fn infeasible_initial_plan_is_rejected() {
        let problem = TransportProblem::new(
            vec![20, 30],
            vec![10, 40],
            vec![vec![4, 6], vec![8, 2]],
        )
        .unwrap();
        let bogus = TransportPlan::new(&problem, vec![vec![20, 0], vec![0, 30]]);

        assert!(matches!(
            stepping_stone(&problem, bogus),
            Err(AlgorithmError::InvalidInput(_))
        ));
    }
}
