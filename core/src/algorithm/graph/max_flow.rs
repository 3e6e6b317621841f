//! Maximum flow by Ford-Fulkerson with BFS augmentation (Edmonds-Karp)
//!
//! The residual network is explicit: every capacity edge is paired at
//! construction with a zero-capacity reverse edge, and the two are linked by
//! index so pushing flow forward credits the reverse residual in one step.
//! Breadth-first search picks the shortest augmenting path by edge count,
//! which bounds the number of augmentation rounds by O(V * E).
//!
//! The ordered list of augmenting paths and their bottlenecks is part of
//! the result: the teaching front-end replays it as the explanatory trace.

use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Algorithm, AlgorithmError, NodeId, Weight};
use crate::data_structures::graph::Graph;

/// Flow capacity type.
pub type Capacity = Weight;

/// Flow value type.
pub type Flow = Weight;

/// Directed edge of the residual network.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlowEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// Original capacity; zero for the residual reverse partner.
    pub capacity: Capacity,
    /// Current flow; negative on a reverse partner means its forward edge
    /// carries that much flow.
    pub flow: Flow,
    /// Index of the paired reverse edge.
    reverse: usize,
}

impl FlowEdge {
    /// Residual capacity still available in this direction.
    #[inline]
    pub fn residual_capacity(&self) -> Capacity {
        self.capacity - self.flow
    }
}

/// Residual network owned by a single max-flow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowNetwork {
    vertex_count: usize,
    /// Edge indices incident to each vertex.
    adjacency: Vec<Vec<usize>>,
    edges: Vec<FlowEdge>,
}

impl FlowNetwork {
    fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        }
    }

    /// Adds a capacity edge together with its zero-capacity reverse partner.
    fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Capacity) {
        let forward = self.edges.len();
        let reverse = forward + 1;

        self.edges.push(FlowEdge {
            from,
            to,
            capacity,
            flow: 0,
            reverse,
        });
        self.edges.push(FlowEdge {
            from: to,
            to: from,
            capacity: 0,
            flow: 0,
            reverse: forward,
        });
        self.adjacency[from.as_usize()].push(forward);
        self.adjacency[to.as_usize()].push(reverse);
    }

    /// BFS for the shortest augmenting path; returns the entering edge
    /// index per visited vertex, or `None` if the sink is unreachable.
    fn shortest_augmenting_path(&self, source: NodeId, sink: NodeId) -> Option<Vec<usize>> {
        let mut parent_edge = vec![usize::MAX; self.vertex_count];
        let mut visited = vec![false; self.vertex_count];
        let mut queue = VecDeque::new();

        visited[source.as_usize()] = true;
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            for &edge_index in &self.adjacency[current.as_usize()] {
                let edge = &self.edges[edge_index];
                let next = edge.to.as_usize();
                if !visited[next] && edge.residual_capacity() > 0 {
                    visited[next] = true;
                    parent_edge[next] = edge_index;
                    if edge.to == sink {
                        return Some(parent_edge);
                    }
                    queue.push_back(edge.to);
                }
            }
        }
        None
    }

    /// Flow pushed along each original capacity edge (reverse partners are
    /// construction artifacts and are skipped).
    pub fn edge_flows(&self) -> Vec<FlowEdge> {
        self.edges
            .iter()
            .filter(|e| e.capacity > 0)
            .copied()
            .collect()
    }

    /// Net flow out of a vertex; zero at internal vertices of a valid flow.
    pub fn net_outflow(&self, vertex: NodeId) -> Flow {
        self.edges
            .iter()
            .filter(|e| e.capacity > 0)
            .map(|e| {
                if e.from == vertex {
                    e.flow
                } else if e.to == vertex {
                    -e.flow
                } else {
                    0
                }
            })
            .sum()
    }
}

/// One augmenting path of the run, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentingPath {
    /// Vertex sequence from source to sink.
    pub nodes: Vec<NodeId>,
    /// Minimum residual capacity along the path at the time it was used.
    pub bottleneck: Flow,
}

/// Maximum flow result with the annotated residual network and path trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxFlowResult {
    pub max_flow: Flow,
    /// The residual network at termination.
    pub network: FlowNetwork,
    /// Augmenting paths in the order they were applied.
    pub augmenting_paths: Vec<AugmentingPath>,
}

/// Catalog descriptor for the Edmonds-Karp algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdmondsKarp;

impl Algorithm for EdmondsKarp {
    fn name(&self) -> &'static str {
        "Ford-Fulkerson (Edmonds-Karp)"
    }

    fn category(&self) -> &'static str {
        "graph"
    }

    fn description(&self) -> &'static str {
        "Maximum flow by repeated BFS-shortest augmenting paths over an \
         explicit residual network. Reports the flow value, the per-edge \
         flow assignment, and the ordered augmenting-path trace."
    }
}

/// Computes the maximum flow from `source` to `sink`.
///
/// # Errors
/// [`AlgorithmError::InvalidInput`] for undirected input, negative
/// capacities, out-of-range endpoints, or `source == sink`;
/// [`AlgorithmError::ResourceExhausted`] if augmentation exceeds the
/// Edmonds-Karp round bound (a fail-safe that well-formed input cannot hit).
pub fn edmonds_karp(
    graph: &Graph,
    source: NodeId,
    sink: NodeId,
) -> Result<MaxFlowResult, AlgorithmError> {
    if !graph.is_directed() {
        return Err(AlgorithmError::InvalidInput(
            "max-flow operates on directed capacity graphs".into(),
        ));
    }
    if !graph.contains(source) || !graph.contains(sink) {
        return Err(AlgorithmError::InvalidInput(format!(
            "source {source} or sink {sink} is not a node of the graph"
        )));
    }
    if source == sink {
        return Err(AlgorithmError::InvalidInput(
            "source and sink must differ".into(),
        ));
    }
    if graph.has_negative_weight() {
        return Err(AlgorithmError::InvalidInput(
            "edge capacities must be non-negative".into(),
        ));
    }

    let mut network = FlowNetwork::new(graph.node_count());
    for edge in graph.edges() {
        network.add_edge(edge.source, edge.target, edge.weight);
    }

    // Edmonds-Karp terminates within |V| * |E| augmentations; exceeding the
    // bound indicates a broken invariant rather than slow convergence.
    let round_bound = graph.node_count() * graph.edge_count() + 1;
    let mut max_flow = 0;
    let mut augmenting_paths = Vec::new();

    for round in 0.. {
        let Some(parent_edge) = network.shortest_augmenting_path(source, sink) else {
            break;
        };
        if round >= round_bound {
            return Err(AlgorithmError::ResourceExhausted {
                phase: "max-flow augmentation",
                iterations: round,
            });
        }

        // Walk sink -> source to find the bottleneck, then apply it.
        let mut path_edges = Vec::new();
        let mut cursor = sink;
        while cursor != source {
            let edge_index = parent_edge[cursor.as_usize()];
            path_edges.push(edge_index);
            cursor = network.edges[edge_index].from;
        }
        path_edges.reverse();

        let bottleneck = path_edges
            .iter()
            .map(|&i| network.edges[i].residual_capacity())
            .min()
            .unwrap_or(0);
        if bottleneck == 0 {
            break;
        }

        let mut nodes = vec![source];
        for &edge_index in &path_edges {
            let reverse = network.edges[edge_index].reverse;
            network.edges[edge_index].flow += bottleneck;
            network.edges[reverse].flow -= bottleneck;
            nodes.push(network.edges[edge_index].to);
        }

        debug!(
            "augmenting path {:?} with bottleneck {bottleneck}",
            nodes.iter().map(|n| n.as_usize()).collect::<Vec<_>>()
        );
        max_flow += bottleneck;
        augmenting_paths.push(AugmentingPath { nodes, bottleneck });
    }

    Ok(MaxFlowResult {
        max_flow,
        network,
        augmenting_paths,
    })
}
