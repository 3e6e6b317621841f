//! Core type and trait definitions shared by every algorithm
//!
//! This module establishes the foundational vocabulary for the algorithm
//! catalog: the dense node identifier, the exact integer weight type, the
//! shared error enumeration, and the descriptor trait through which an
//! external menu layer enumerates the catalog entries.
//!
//! # Key design principles
//! - Opaque, comparable node identities (no raw `usize` mixing)
//! - Exact integer arithmetic end to end: the consuming UI feeds
//!   user-entered integers, and float tie-breaking has no place in
//!   teaching output
//! - Errors reported synchronously at the point of violation, never retried

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identifier ensuring type safety and preventing mixing with other
/// numeric types. Identifiers are dense indices `0..n` within one graph.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Required because `AlgorithmError::NegativeCycle` has a field named
// `source`, which thiserror wires into `Error::source()` and therefore
// must itself implement `std::error::Error`.
impl std::error::Error for NodeId {}

/// Edge weight, cost, capacity, and duration type.
///
/// Signed so Bellman-Ford inputs may carry negative edges; algorithms with
/// stricter domains (Dijkstra, max-flow capacities, transport quantities)
/// validate their own constraints up front.
pub type Weight = i64;

/// Errors surfaced by algorithm invocations.
///
/// All detection is synchronous at the point of violation. The excluded
/// presentation layer owns user-facing wording; these messages are for
/// developers and logs.
#[derive(Debug, thiserror::Error)]
pub enum AlgorithmError {
    /// Malformed or out-of-constraint input, e.g. a negative weight handed
    /// to Dijkstra, a self-loop, or a duplicate edge.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A scheduling graph that is not acyclic; topological ordering is
    /// infeasible so no time computation was attempted.
    #[error("precedence graph contains a cycle involving node {0}")]
    Cycle(NodeId),

    /// Bellman-Ford found an edge that still relaxes after `|V| - 1`
    /// passes: a negative cycle is reachable from the source.
    #[error("negative cycle reachable from source {source} (edge {from} -> {to} still relaxes)")]
    NegativeCycle {
        source: NodeId,
        from: NodeId,
        to: NodeId,
    },

    /// Transportation problem whose total supply and total demand differ.
    #[error("unbalanced transportation problem: total supply {supply} != total demand {demand}")]
    UnbalancedProblem { supply: Weight, demand: Weight },

    /// An iterative solver hit its explicit iteration bound. This is the
    /// fail-safe against degenerate inputs that would otherwise loop.
    #[error("iteration bound exhausted after {iterations} iterations in {phase}")]
    ResourceExhausted { phase: &'static str, iterations: usize },
}

/// Catalog descriptor implemented by every solver type.
///
/// The teaching shell lists algorithms by name and category and shows the
/// description next to the launch button; nothing here participates in the
/// computation itself.
pub trait Algorithm {
    /// Human-readable algorithm name, e.g. `"Bellman-Ford"`.
    fn name(&self) -> &'static str;

    /// Catalog grouping, e.g. `"path_finding"` or `"transport"`.
    fn category(&self) -> &'static str;

    /// One-paragraph description suitable for the catalog panel.
    fn description(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_type_safety() {
        let a = NodeId(42);
        let b = NodeId(42);
        let c = NodeId(43);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert_eq!(a.as_usize(), 42);
        assert_eq!(a.to_string(), "42");
    }

    #[test]
    fn error_messages_name_the_violation() {
        let err = AlgorithmError::NegativeCycle {
            source: NodeId(0),
            from: NodeId(2),
            to: NodeId(1),
        };
        assert!(err.to_string().contains("negative cycle"));

        let err = AlgorithmError::UnbalancedProblem {
            supply: 50,
            demand: 40,
        };
        assert!(err.to_string().contains("50"));
        assert!(err.to_string().contains("40"));
    }
}
