//! metra-core: graph-theory and operations-research algorithms for teaching tools
//!
//! This crate is the computational core behind a button-driven teaching
//! application: nine classic algorithms over graphs and allocation matrices,
//! exposed as pure functions that consume already-validated input and return
//! structured, serialization-ready results. Everything presentational
//! (windows, tables, plots, random demo generation, input parsing) lives in
//! external layers and is deliberately absent here.
//!
//! # Catalog
//!
//! - Shortest paths: [`algorithm::path_finding::dijkstra`] (non-negative
//!   weights) and [`algorithm::path_finding::bellman_ford`] (signed weights,
//!   negative-cycle detection)
//! - Minimum spanning tree/forest: [`algorithm::graph::mst::kruskal`]
//! - Maximum flow: [`algorithm::graph::max_flow::edmonds_karp`]
//! - Project scheduling: [`algorithm::scheduling::critical_path`]
//!   (Potentiel Métra)
//! - Greedy coloring: [`algorithm::graph::coloring::welsh_powell`]
//! - Transportation problems: [`algorithm::transport`] (North-West corner,
//!   Least-Cost, Stepping-Stone improvement)
//!
//! # Execution model
//!
//! Every invocation is synchronous, single-threaded, and run-to-completion.
//! Working structures (residual network, disjoint-set, allocation matrix)
//! are created fresh per call and discarded with the result; nothing is
//! shared between runs. The two iterative solvers carry explicit iteration
//! bounds so malformed input fails with
//! [`algorithm::AlgorithmError::ResourceExhausted`] instead of hanging.

pub mod algorithm;
pub mod data_structures;

pub use algorithm::traits::{Algorithm, AlgorithmError, NodeId, Weight};
