//! Shortest-path algorithms and their shared result shape

pub mod bellman_ford;
pub mod dijkstra;

pub use self::bellman_ford::{bellman_ford, BellmanFord};
pub use self::dijkstra::{dijkstra, Dijkstra};

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{NodeId, Weight};

/// Distance and one shortest path for a single reachable destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathEntry {
    pub node: NodeId,
    pub distance: Weight,
    /// Node sequence from the source to `node`, inclusive of both ends.
    pub path: Vec<NodeId>,
}

/// Result of a single-source shortest-path run.
///
/// Only reachable nodes appear; unreachable destinations are simply absent,
/// not an error. Entries are ordered by node identifier so the rendering
/// layer's tables are stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    pub source: NodeId,
    pub entries: Vec<ShortestPathEntry>,
}

impl ShortestPaths {
    /// Assembles the result from the relaxation scan's distance and
    /// predecessor arrays.
    pub(crate) fn from_scan(
        source: NodeId,
        dist: &[Option<Weight>],
        prev: &[Option<NodeId>],
    ) -> Self {
        let mut entries = Vec::new();
        for (index, distance) in dist.iter().enumerate() {
            let Some(distance) = *distance else {
                continue;
            };
            let node = NodeId(index);
            let mut path = vec![node];
            let mut cursor = node;
            while let Some(parent) = prev[cursor.as_usize()] {
                path.push(parent);
                cursor = parent;
            }
            path.reverse();
            entries.push(ShortestPathEntry {
                node,
                distance,
                path,
            });
        }
        Self { source, entries }
    }

    /// Distance to `node`, if reachable.
    pub fn distance_to(&self, node: NodeId) -> Option<Weight> {
        self.entries
            .iter()
            .find(|e| e.node == node)
            .map(|e| e.distance)
    }

    /// The retained shortest path to `node`, if reachable.
    pub fn path_to(&self, node: NodeId) -> Option<&[NodeId]> {
        self.entries
            .iter()
            .find(|e| e.node == node)
            .map(|e| e.path.as_slice())
    }

    /// Number of reachable destinations (the source included).
    pub fn reachable_count(&self) -> usize {
        self.entries.len()
    }
}
