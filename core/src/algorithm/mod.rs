//! Algorithm catalog
//!
//! Nine classic graph and operations-research algorithms grouped by the
//! structure they operate on: shortest paths, graph optimization (MST,
//! max flow, coloring), task scheduling, and transportation problems.

pub mod graph;
pub mod path_finding;
pub mod scheduling;
pub mod traits;
pub mod transport;

pub use self::traits::{Algorithm, AlgorithmError, NodeId, Weight};
