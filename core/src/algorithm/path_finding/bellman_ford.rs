//! Bellman-Ford single-source shortest paths with negative-cycle detection
//!
//! Edge-list relaxation tolerating negative weights. The detection contract
//! is exact: `|V| - 1` full passes first, then one additional pass, and only
//! an edge that still relaxes there proves a reachable negative cycle.
//! Detecting earlier would misreport graphs whose negative edges lie on
//! acyclic regions, which are perfectly valid inputs.

use log::{debug, trace};

use crate::algorithm::path_finding::ShortestPaths;
use crate::algorithm::traits::{Algorithm, AlgorithmError, NodeId, Weight};
use crate::data_structures::graph::{Graph, Orientation};

/// Catalog descriptor for the Bellman-Ford algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord;

impl Algorithm for BellmanFord {
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn category(&self) -> &'static str {
        "path_finding"
    }

    fn description(&self) -> &'static str {
        "Single-source shortest paths tolerating negative edge weights, by \
         |V| - 1 rounds of edge relaxation. A further round that still \
         improves any distance proves a negative cycle reachable from the \
         source, reported as an error."
    }
}

/// Directed arcs to relax: the edge list itself, mirrored for undirected
/// graphs so both traversal directions participate.
fn arcs(graph: &Graph) -> Vec<(NodeId, NodeId, Weight)> {
    let mut arcs = Vec::with_capacity(graph.edge_count() * 2);
    for edge in graph.edges() {
        arcs.push((edge.source, edge.target, edge.weight));
        if graph.orientation() == Orientation::Undirected {
            arcs.push((edge.target, edge.source, edge.weight));
        }
    }
    arcs
}

/// Computes shortest paths from `source`, allowing negative weights.
///
/// # Errors
/// [`AlgorithmError::NegativeCycle`] if a negative cycle is reachable from
/// the source; [`AlgorithmError::InvalidInput`] if the source is not a node
/// of the graph.
pub fn bellman_ford(graph: &Graph, source: NodeId) -> Result<ShortestPaths, AlgorithmError> {
    if !graph.contains(source) {
        return Err(AlgorithmError::InvalidInput(format!(
            "source {source} is not a node of the graph"
        )));
    }

    let n = graph.node_count();
    let arcs = arcs(graph);
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    dist[source.as_usize()] = Some(0);

    // Exactly |V| - 1 relaxation passes; early exit would blur the
    // detection contract below.
    for pass in 1..n {
        let mut relaxed = 0usize;
        for &(from, to, weight) in &arcs {
            let Some(base) = dist[from.as_usize()] else {
                continue;
            };
            let candidate = base + weight;
            if dist[to.as_usize()].map_or(true, |best| candidate < best) {
                dist[to.as_usize()] = Some(candidate);
                prev[to.as_usize()] = Some(from);
                relaxed += 1;
                trace!("pass {pass}: relaxed {from} -> {to} to {candidate}");
            }
        }
        debug!("pass {pass}: {relaxed} relaxations");
    }

    // Detection pass: any arc that still relaxes closes a negative cycle.
    for &(from, to, weight) in &arcs {
        let Some(base) = dist[from.as_usize()] else {
            continue;
        };
        if dist[to.as_usize()].map_or(true, |best| base + weight < best) {
            return Err(AlgorithmError::NegativeCycle { source, from, to });
        }
    }

    Ok(ShortestPaths::from_scan(source, &dist, &prev))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::path_finding::dijkstra;

    #[test]
    fn negative_edges_on_acyclic_regions_are_legal() {
        let mut graph = Graph::directed(4);
        graph.add_edge(NodeId(0), NodeId(1), 5).unwrap();
        graph.add_edge(NodeId(1), NodeId(2), -4).unwrap();
        graph.add_edge(NodeId(0), NodeId(2), 3).unwrap();
        graph.add_edge(NodeId(2), NodeId(3), 2).unwrap();

        let result = bellman_ford(&graph, NodeId(0)).unwrap();
        assert_eq!(result.distance_to(NodeId(2)), Some(1));
        assert_eq!(result.distance_to(NodeId(3)), Some(3));
        assert_eq!(result.path_to(NodeId(3)).unwrap(), &[
            NodeId(0),
            NodeId(1),
            NodeId(2),
            NodeId(3)
        ]);
    }

    #[test]
    fn reachable_negative_cycle_is_detected() {
        let mut graph = Graph::directed(4);
        graph.add_edge(NodeId(0), NodeId(1), 1).unwrap();
        graph.add_edge(NodeId(1), NodeId(2), -2).unwrap();
        graph.add_edge(NodeId(2), NodeId(1), 1).unwrap();
        graph.add_edge(NodeId(2), NodeId(3), 1).unwrap();

        assert!(matches!(
            bellman_ford(&graph, NodeId(0)),
            Err(AlgorithmError::NegativeCycle { .. })
        ));
    }

    #[test]
    fn unreachable_negative_cycle_is_not_an_error() {
        let mut graph = Graph::directed(5);
        graph.add_edge(NodeId(0), NodeId(1), 2).unwrap();
        // Cycle 2 <-> 3 has net weight -1 but is unreachable from 0.
        graph.add_edge(NodeId(2), NodeId(3), -3).unwrap();
        graph.add_edge(NodeId(3), NodeId(2), 2).unwrap();

        let result = bellman_ford(&graph, NodeId(0)).unwrap();
        assert_eq!(result.distance_to(NodeId(1)), Some(2));
        assert_eq!(result.distance_to(NodeId(2)), None);
    }

    #[test]
    fn agrees_with_dijkstra_on_non_negative_weights() {
        let mut graph = Graph::directed(5);
        graph.add_edge(NodeId(0), NodeId(1), 7).unwrap();
        graph.add_edge(NodeId(0), NodeId(2), 2).unwrap();
        graph.add_edge(NodeId(2), NodeId(1), 3).unwrap();
        graph.add_edge(NodeId(1), NodeId(3), 1).unwrap();
        graph.add_edge(NodeId(2), NodeId(3), 8).unwrap();
        graph.add_edge(NodeId(3), NodeId(4), 4).unwrap();

        let bf = bellman_ford(&graph, NodeId(0)).unwrap();
        let dj = dijkstra(&graph, NodeId(0)).unwrap();
        for node in graph.nodes() {
            assert_eq!(bf.distance_to(node), dj.distance_to(node));
        }
    }

    #[test]
    fn single_node_graph_yields_only_the_source() {
        let graph = Graph::directed(1);
        let result = bellman_ford(&graph, NodeId(0)).unwrap();
        assert_eq!(result.reachable_count(), 1);
        assert_eq!(result.distance_to(NodeId(0)), Some(0));
    }
}
