//! Dijkstra's single-source shortest paths
//!
//! Binary-heap relaxation over non-negative edge weights. The heap pops
//! entries in `(distance, node)` order, so equal-distance ties resolve
//! deterministically toward the smaller node identifier and the first path
//! that settles a node is the one reported — the catalog promises one
//! shortest path per destination, not an enumeration of all of them.
//!
//! # Complexity
//! O((V + E) log V) with the standard lazy-deletion heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use crate::algorithm::path_finding::ShortestPaths;
use crate::algorithm::traits::{Algorithm, AlgorithmError, NodeId, Weight};
use crate::data_structures::graph::Graph;

/// Heap entry ordered as a min-heap on `(distance, node)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    distance: Weight,
    node: NodeId,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior in BinaryHeap.
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Catalog descriptor for Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Algorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn category(&self) -> &'static str {
        "path_finding"
    }

    fn description(&self) -> &'static str {
        "Single-source shortest paths on graphs with non-negative edge \
         weights, by greedy settlement of the closest unsettled node. \
         Reports the minimum distance and one shortest path per reachable \
         destination."
    }
}

/// Computes shortest paths from `source` over non-negative weights.
///
/// # Errors
/// [`AlgorithmError::InvalidInput`] if any edge weight is negative or the
/// source is not a node of the graph.
pub fn dijkstra(graph: &Graph, source: NodeId) -> Result<ShortestPaths, AlgorithmError> {
    if !graph.contains(source) {
        return Err(AlgorithmError::InvalidInput(format!(
            "source {source} is not a node of the graph"
        )));
    }
    if graph.has_negative_weight() {
        return Err(AlgorithmError::InvalidInput(
            "Dijkstra requires non-negative edge weights; use Bellman-Ford instead".into(),
        ));
    }

    let n = graph.node_count();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source.as_usize()] = Some(0);
    heap.push(HeapEntry {
        distance: 0,
        node: source,
    });

    while let Some(HeapEntry { distance, node }) = heap.pop() {
        let u = node.as_usize();
        // Lazy deletion: stale entries are superseded by the settled flag.
        if settled[u] {
            continue;
        }
        settled[u] = true;
        trace!("settled node {node} at distance {distance}");

        for &(neighbor, weight) in graph.neighbors(node) {
            let v = neighbor.as_usize();
            let candidate = distance + weight;
            if dist[v].map_or(true, |best| candidate < best) {
                dist[v] = Some(candidate);
                prev[v] = Some(node);
                heap.push(HeapEntry {
                    distance: candidate,
                    node: neighbor,
                });
            }
        }
    }

    Ok(ShortestPaths::from_scan(source, &dist, &prev))
}
