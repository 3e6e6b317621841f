//! Minimum spanning tree by Kruskal's algorithm
//!
//! Edges are scanned in ascending weight order; the union-find structure
//! answers "would this edge close a cycle" in near-constant amortized time.
//! A disconnected input is not an error — the greedy scan then yields a
//! minimum spanning forest with `|V| - components` edges.
//!
//! The result keeps the full sorted scan with an included/excluded flag per
//! edge: the teaching front-end draws accepted edges green and rejected
//! ones red, so the scan order is part of the output contract.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, AlgorithmError, NodeId, Weight};
use crate::data_structures::graph::Graph;
use crate::data_structures::union_find::UnionFind;

/// Undirected edge in canonical orientation (`source <= target`) with the
/// total order Kruskal sorts by: `(weight, source, target)`. The secondary
/// keys make equal-weight ties deterministic within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
}

impl MstEdge {
    pub fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        if source <= target {
            Self {
                source,
                target,
                weight,
            }
        } else {
            Self {
                source: target,
                target: source,
                weight,
            }
        }
    }
}

impl Ord for MstEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for MstEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One entry of the sorted scan trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedEdge {
    pub edge: MstEdge,
    /// True if the edge joined two components; false if it was discarded
    /// because it would have closed a cycle.
    pub included: bool,
}

/// Minimum spanning tree (or forest) result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// Accepted edges in scan order.
    pub edges: Vec<MstEdge>,
    /// Sum of accepted edge weights.
    pub total_weight: Weight,
    /// Connected components of the input; 1 for a spanning tree, more for
    /// a forest.
    pub components: usize,
    /// The full sorted edge list with inclusion flags, for visualization.
    pub scanned: Vec<ScannedEdge>,
}

/// Catalog descriptor for Kruskal's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl Algorithm for Kruskal {
    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn category(&self) -> &'static str {
        "graph"
    }

    fn description(&self) -> &'static str {
        "Minimum spanning tree by greedy ascending-weight edge selection \
         with union-find cycle rejection. Disconnected inputs yield a \
         minimum spanning forest over the given node set."
    }
}

/// Computes a minimum spanning tree (or forest) of an undirected graph.
///
/// # Errors
/// [`AlgorithmError::InvalidInput`] if the graph is directed.
pub fn kruskal(graph: &Graph) -> Result<MstResult, AlgorithmError> {
    if graph.is_directed() {
        return Err(AlgorithmError::InvalidInput(
            "Kruskal operates on undirected graphs".into(),
        ));
    }

    let mut sorted: Vec<MstEdge> = graph
        .edges()
        .iter()
        .map(|e| MstEdge::new(e.source, e.target, e.weight))
        .collect();
    sorted.sort();

    let mut uf = UnionFind::new(graph.node_count());
    let mut edges = Vec::new();
    let mut scanned = Vec::with_capacity(sorted.len());
    let mut total_weight = 0;

    for edge in sorted {
        let included = uf.union(edge.source, edge.target);
        if included {
            edges.push(edge);
            total_weight += edge.weight;
        }
        scanned.push(ScannedEdge { edge, included });
    }

    let components = uf.components();
    debug!(
        "kruskal: {} edges accepted, total weight {total_weight}, {components} component(s)",
        edges.len()
    );

    Ok(MstResult {
        edges,
        total_weight,
        components,
        scanned,
    })
}
