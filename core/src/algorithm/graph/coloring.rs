//! Greedy graph coloring by the Welsh-Powell heuristic
//!
//! Nodes are visited in descending degree order (ties: ascending node
//! identifier, which the stable sort preserves). Each round opens a fresh
//! color on the first uncolored node and extends it to every later node
//! with no neighbor already wearing it.
//!
//! The number of colors used is an upper bound on the chromatic number,
//! not the chromatic number itself: Welsh-Powell is a heuristic and may
//! overshoot the optimum on adversarial inputs.

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, AlgorithmError, NodeId};
use crate::data_structures::graph::Graph;

/// Color assignment produced by one coloring run. Colors are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoringResult {
    /// Color per node, indexed by node identifier.
    pub colors: Vec<usize>,
    /// Number of distinct colors used; an upper bound on the chromatic
    /// number.
    pub colors_used: usize,
}

impl ColoringResult {
    /// Color of `node`.
    #[inline]
    pub fn color_of(&self, node: NodeId) -> usize {
        self.colors[node.as_usize()]
    }
}

/// Catalog descriptor for Welsh-Powell coloring.
#[derive(Debug, Clone, Copy, Default)]
pub struct WelshPowell;

impl Algorithm for WelshPowell {
    fn name(&self) -> &'static str {
        "Welsh-Powell"
    }

    fn category(&self) -> &'static str {
        "graph"
    }

    fn description(&self) -> &'static str {
        "Greedy proper coloring scanning nodes by descending degree; the \
         color count is an upper bound on the chromatic number, not an \
         exact result."
    }
}

/// Colors an undirected graph so that no adjacent nodes share a color.
///
/// # Errors
/// [`AlgorithmError::InvalidInput`] if the graph is directed.
pub fn welsh_powell(graph: &Graph) -> Result<ColoringResult, AlgorithmError> {
    if graph.is_directed() {
        return Err(AlgorithmError::InvalidInput(
            "Welsh-Powell operates on undirected graphs".into(),
        ));
    }

    let n = graph.node_count();
    let mut order: Vec<NodeId> = graph.nodes().collect();
    // Stable sort keeps ascending node order within equal degrees.
    order.sort_by(|a, b| graph.degree(*b).cmp(&graph.degree(*a)));

    let mut colors = vec![0usize; n];
    let mut current_color = 0;

    for (i, &node) in order.iter().enumerate() {
        if colors[node.as_usize()] != 0 {
            continue;
        }
        current_color += 1;
        colors[node.as_usize()] = current_color;

        // Extend the fresh color to every later node whose neighborhood
        // does not already contain it.
        for &candidate in &order[i + 1..] {
            if colors[candidate.as_usize()] != 0 {
                continue;
            }
            let conflict = graph
                .neighbors(candidate)
                .iter()
                .any(|&(neighbor, _)| colors[neighbor.as_usize()] == current_color);
            if !conflict {
                colors[candidate.as_usize()] = current_color;
            }
        }
    }

    Ok(ColoringResult {
        colors,
        colors_used: current_color,
    })
}
