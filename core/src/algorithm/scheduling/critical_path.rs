//! Project scheduling by the Potentiel Métra method
//!
//! Tasks are graph nodes; a directed edge `(p, n, w)` states that `n` may
//! start only after `p`, and that `p` contributes `w` time units into `n`.
//! Acyclicity is verified first — a cycle makes topological ordering
//! infeasible and is reported before any time computation runs.
//!
//! The passes follow the method as taught:
//! - forward (topological order): earliest start is the latest predecessor
//!   finish; earliest finish adds the heaviest incoming edge weight
//! - backward (reverse order, seeded to the project duration): latest start
//!   is the tightest `latest_finish(successor) - edge weight`, and latest
//!   finish then equals latest start
//! - free margin = tightest `latest_start(successor) - earliest_finish`,
//!   zero for sinks; total margin = `latest_start - earliest_start`
//!
//! The critical path is the zero-total-margin node set in topological
//! order, and the project duration is the maximum earliest finish.

use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, AlgorithmError, NodeId, Weight};
use crate::data_structures::graph::Graph;

/// Computed timing attributes of one task. All derived, never caller-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTiming {
    pub node: NodeId,
    pub earliest_start: Weight,
    pub earliest_finish: Weight,
    pub latest_start: Weight,
    pub latest_finish: Weight,
    pub free_margin: Weight,
    pub total_margin: Weight,
    /// Longest-path depth from a source node; layout data for the
    /// external level diagram, not a scheduling quantity.
    pub level: usize,
}

/// Full Potentiel Métra schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Per-task timings indexed by node identifier.
    pub tasks: Vec<TaskTiming>,
    /// Zero-total-margin tasks in topological order.
    pub critical_path: Vec<NodeId>,
    /// Minimum project duration.
    pub project_duration: Weight,
}

impl Schedule {
    /// Timing row of `node`.
    #[inline]
    pub fn timing(&self, node: NodeId) -> &TaskTiming {
        &self.tasks[node.as_usize()]
    }
}

/// Catalog descriptor for the Potentiel Métra scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct PotentielMetra;

impl Algorithm for PotentielMetra {
    fn name(&self) -> &'static str {
        "Potentiel Métra"
    }

    fn category(&self) -> &'static str {
        "scheduling"
    }

    fn description(&self) -> &'static str {
        "Critical-path project scheduling: topological ordering, \
         forward/backward timing passes, free and total margins, and the \
         zero-margin critical path determining the project duration."
    }
}

/// Kahn's algorithm; errors name a node left inside a cycle.
fn topological_order(graph: &Graph) -> Result<Vec<NodeId>, AlgorithmError> {
    let n = graph.node_count();
    let mut in_degree = vec![0usize; n];
    for edge in graph.edges() {
        in_degree[edge.target.as_usize()] += 1;
    }

    let mut queue: VecDeque<NodeId> = (0..n)
        .filter(|&i| in_degree[i] == 0)
        .map(NodeId)
        .collect();
    let mut order = Vec::with_capacity(n);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &(next, _) in graph.neighbors(node) {
            let d = &mut in_degree[next.as_usize()];
            *d -= 1;
            if *d == 0 {
                queue.push_back(next);
            }
        }
    }

    if order.len() < n {
        // Any node with remaining in-degree sits on or behind a cycle.
        let stuck = (0..n)
            .find(|&i| in_degree[i] > 0)
            .map(NodeId)
            .unwrap_or(NodeId(0));
        return Err(AlgorithmError::Cycle(stuck));
    }
    Ok(order)
}

/// Computes the Potentiel Métra schedule of a precedence graph.
///
/// # Errors
/// [`AlgorithmError::Cycle`] if the graph is not acyclic (detected before
/// any time computation); [`AlgorithmError::InvalidInput`] for undirected
/// input, an empty task set, or negative durations.
pub fn critical_path(graph: &Graph) -> Result<Schedule, AlgorithmError> {
    if !graph.is_directed() {
        return Err(AlgorithmError::InvalidInput(
            "precedence graphs are directed".into(),
        ));
    }
    if graph.node_count() == 0 {
        return Err(AlgorithmError::InvalidInput("empty task set".into()));
    }
    if graph.has_negative_weight() {
        return Err(AlgorithmError::InvalidInput(
            "task durations must be non-negative".into(),
        ));
    }

    let order = topological_order(graph)?;
    let n = graph.node_count();
    let predecessors = graph.predecessors();

    // Forward pass.
    let mut earliest_start = vec![0 as Weight; n];
    let mut earliest_finish = vec![0 as Weight; n];
    let mut level = vec![0usize; n];
    for &node in &order {
        let i = node.as_usize();
        let mut duration_in = 0;
        for &(pred, weight) in &predecessors[i] {
            let p = pred.as_usize();
            earliest_start[i] = earliest_start[i].max(earliest_finish[p]);
            level[i] = level[i].max(level[p] + 1);
            duration_in = duration_in.max(weight);
        }
        earliest_finish[i] = earliest_start[i] + duration_in;
    }

    let project_duration = earliest_finish.iter().copied().max().unwrap_or(0);

    // Backward pass, seeded to the project duration; sinks keep
    // latest_finish = latest_start = project_duration.
    let mut latest_start = vec![project_duration; n];
    let mut latest_finish = vec![project_duration; n];
    for &node in order.iter().rev() {
        let i = node.as_usize();
        for &(succ, weight) in graph.neighbors(node) {
            let s = succ.as_usize();
            latest_start[i] = latest_start[i].min(latest_finish[s] - weight);
        }
        latest_finish[i] = latest_start[i];
    }

    let mut tasks = Vec::with_capacity(n);
    for i in 0..n {
        let node = NodeId(i);
        let successors = graph.neighbors(node);
        let free_margin = successors
            .iter()
            .map(|&(succ, _)| latest_start[succ.as_usize()] - earliest_finish[i])
            .min()
            .unwrap_or(0);
        tasks.push(TaskTiming {
            node,
            earliest_start: earliest_start[i],
            earliest_finish: earliest_finish[i],
            latest_start: latest_start[i],
            latest_finish: latest_finish[i],
            free_margin,
            total_margin: latest_start[i] - earliest_start[i],
            level: level[i],
        });
    }

    let critical_path: Vec<NodeId> = order
        .iter()
        .copied()
        .filter(|node| tasks[node.as_usize()].total_margin == 0)
        .collect();
    debug!(
        "project duration {project_duration}, critical path {:?}",
        critical_path.iter().map(|n| n.as_usize()).collect::<Vec<_>>()
    );

    Ok(Schedule {
        tasks,
        critical_path,
        project_duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 -> 1 -> 3 and 0 -> 2 -> 3, with the 1-branch longer.
    fn diamond() -> Graph {
        let mut graph = Graph::directed(4);
        graph.add_edge(NodeId(0), NodeId(1), 5).unwrap();
        graph.add_edge(NodeId(0), NodeId(2), 2).unwrap();
        graph.add_edge(NodeId(1), NodeId(3), 4).unwrap();
        graph.add_edge(NodeId(2), NodeId(3), 1).unwrap();
        graph
    }

    #[test]
    fn forward_pass_accumulates_longest_chain() {
        let schedule = critical_path(&diamond()).unwrap();

        assert_eq!(schedule.timing(NodeId(0)).earliest_finish, 0);
        assert_eq!(schedule.timing(NodeId(1)).earliest_finish, 5);
        assert_eq!(schedule.timing(NodeId(2)).earliest_finish, 2);
        // 3 starts after the slower branch and adds its heaviest
        // incoming contribution.
        assert_eq!(schedule.timing(NodeId(3)).earliest_start, 5);
        assert_eq!(schedule.timing(NodeId(3)).earliest_finish, 9);
        assert_eq!(schedule.project_duration, 9);
    }

    #[test]
    fn critical_path_has_zero_margin_throughout() {
        let schedule = critical_path(&diamond()).unwrap();

        assert!(!schedule.critical_path.is_empty());
        for &node in &schedule.critical_path {
            assert_eq!(schedule.timing(node).total_margin, 0);
        }
        // Branch nodes carry slack; only the anchor of the longest chain
        // is margin-free here.
        assert_eq!(schedule.critical_path, vec![NodeId(0)]);
        assert!(schedule.timing(NodeId(2)).total_margin > 0);
    }

    #[test]
    fn margins_follow_the_backward_pass() {
        let schedule = critical_path(&diamond()).unwrap();

        // Backward pass: ls(2) = lf(3) - w(2,3) = 9 - 1.
        let t2 = schedule.timing(NodeId(2));
        assert_eq!(t2.latest_start, 8);
        assert_eq!(t2.latest_finish, 8);
        // Free margin: ls(3) - ef(2) = 9 - 2.
        assert_eq!(t2.free_margin, 7);
        assert_eq!(t2.total_margin, 8);

        // The longer branch: ls(1) = lf(3) - w(1,3) = 5.
        let t1 = schedule.timing(NodeId(1));
        assert_eq!(t1.latest_start, 5);
        assert_eq!(t1.total_margin, 5);

        // Sink: free margin 0, latest times at project duration.
        let t3 = schedule.timing(NodeId(3));
        assert_eq!(t3.free_margin, 0);
        assert_eq!(t3.latest_finish, schedule.project_duration);
    }

    #[test]
    fn levels_count_longest_predecessor_chains() {
        let schedule = critical_path(&diamond()).unwrap();
        assert_eq!(schedule.timing(NodeId(0)).level, 0);
        assert_eq!(schedule.timing(NodeId(1)).level, 1);
        assert_eq!(schedule.timing(NodeId(2)).level, 1);
        assert_eq!(schedule.timing(NodeId(3)).level, 2);
    }

    #[test]
    fn cycle_is_reported_before_any_timing() {
        let mut graph = Graph::directed(3);
        graph.add_edge(NodeId(0), NodeId(1), 1).unwrap();
        graph.add_edge(NodeId(1), NodeId(2), 1).unwrap();
        graph.add_edge(NodeId(2), NodeId(0), 1).unwrap();

        assert!(matches!(
            critical_path(&graph),
            Err(AlgorithmError::Cycle(_))
        ));
    }

    #[test]
    fn independent_tasks_form_parallel_critical_chains() {
        // Two unrelated chains; only the longer one is critical.
        let mut graph = Graph::directed(4);
        graph.add_edge(NodeId(0), NodeId(1), 6).unwrap();
        graph.add_edge(NodeId(2), NodeId(3), 2).unwrap();

        let schedule = critical_path(&graph).unwrap();
        assert_eq!(schedule.project_duration, 6);
        // ls(0) = lf(1) - 6 = 0; the shorter chain slips by 4.
        assert_eq!(schedule.critical_path, vec![NodeId(0)]);
        assert_eq!(schedule.timing(NodeId(2)).total_margin, 4);
        assert_eq!(schedule.timing(NodeId(1)).total_margin, 6);
    }

    #[test]
    fn rejects_undirected_empty_and_negative_inputs() {
        assert!(critical_path(&Graph::undirected(3)).is_err());
        assert!(critical_path(&Graph::directed(0)).is_err());

        let mut negative = Graph::directed(2);
        negative.add_edge(NodeId(0), NodeId(1), -2).unwrap();
        assert!(critical_path(&negative).is_err());
    }
}
