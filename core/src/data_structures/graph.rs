//! Adjacency-list weighted graph shared by all graph algorithms
//!
//! One graph type covers both orientations: an undirected edge is stored
//! once in the edge list and mirrored into both adjacency rows. Node
//! identifiers are dense (`0..n`), which keeps every algorithm's working
//! arrays index-addressable and lets the MST run use an array-backed
//! disjoint-set instead of hash-keyed parents.
//!
//! # Invariants
//! - Every edge endpoint is a node of the graph (checked at insertion)
//! - No self-loops, no multi-edges (an undirected duplicate in either
//!   orientation is rejected)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, NodeId, Weight};

/// Edge orientation of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Directed,
    Undirected,
}

/// A weighted edge as stored in the edge list.
///
/// For undirected graphs the pair is kept in insertion order; algorithms
/// that need a canonical orientation (Kruskal) normalize on their side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
}

/// Adjacency-based weighted graph with dense node identifiers.
///
/// Serializes for presentation output only; graphs are always built
/// through [`Graph::add_edge`] so the duplicate guard stays consistent.
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    orientation: Orientation,
    /// Outgoing (or incident, for undirected) neighbors per node.
    adjacency: Vec<Vec<(NodeId, Weight)>>,
    /// Flat edge list in insertion order.
    edges: Vec<Edge>,
    /// Duplicate-edge guard; undirected graphs key on the normalized pair.
    #[serde(skip)]
    lookup: HashMap<(NodeId, NodeId), usize>,
}

impl Graph {
    /// Creates a directed graph over nodes `0..node_count`.
    pub fn directed(node_count: usize) -> Self {
        Self::with_orientation(node_count, Orientation::Directed)
    }

    /// Creates an undirected graph over nodes `0..node_count`.
    pub fn undirected(node_count: usize) -> Self {
        Self::with_orientation(node_count, Orientation::Undirected)
    }

    fn with_orientation(node_count: usize, orientation: Orientation) -> Self {
        Self {
            orientation,
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).map(NodeId)
    }

    /// Edge list in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.as_usize() < self.node_count()
    }

    /// Neighbors of `node` with edge weights. For directed graphs these are
    /// the outgoing edges only.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        &self.adjacency[node.as_usize()]
    }

    /// Number of incident edges (out-degree for directed graphs).
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node.as_usize()].len()
    }

    fn lookup_key(&self, source: NodeId, target: NodeId) -> (NodeId, NodeId) {
        match self.orientation {
            Orientation::Directed => (source, target),
            Orientation::Undirected if source <= target => (source, target),
            Orientation::Undirected => (target, source),
        }
    }

    /// Adds a weighted edge, enforcing the graph invariants.
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: Weight,
    ) -> Result<(), AlgorithmError> {
        if !self.contains(source) || !self.contains(target) {
            return Err(AlgorithmError::InvalidInput(format!(
                "edge ({source}, {target}) leaves the node set 0..{}",
                self.node_count()
            )));
        }
        if source == target {
            return Err(AlgorithmError::InvalidInput(format!(
                "self-loop on node {source} is not allowed"
            )));
        }
        let key = self.lookup_key(source, target);
        if self.lookup.contains_key(&key) {
            return Err(AlgorithmError::InvalidInput(format!(
                "duplicate edge ({source}, {target})"
            )));
        }

        let index = self.edges.len();
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
        self.lookup.insert(key, index);
        self.adjacency[source.as_usize()].push((target, weight));
        if self.orientation == Orientation::Undirected {
            self.adjacency[target.as_usize()].push((source, weight));
        }
        Ok(())
    }

    /// Weight of the edge between `source` and `target`, if present.
    pub fn edge_weight(&self, source: NodeId, target: NodeId) -> Option<Weight> {
        let key = self.lookup_key(source, target);
        self.lookup.get(&key).map(|&i| self.edges[i].weight)
    }

    /// True if any edge carries a negative weight.
    pub fn has_negative_weight(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0)
    }

    /// In-edges of every node, as `(predecessor, weight)` lists. Directed
    /// graphs only; the scheduling passes consume this.
    pub fn predecessors(&self) -> Vec<Vec<(NodeId, Weight)>> {
        let mut preds = vec![Vec::new(); self.node_count()];
        for edge in &self.edges {
            preds[edge.target.as_usize()].push((edge.source, edge.weight));
            if self.orientation == Orientation::Undirected {
                preds[edge.source.as_usize()].push((edge.target, edge.weight));
            }
        }
        preds
    }
}
