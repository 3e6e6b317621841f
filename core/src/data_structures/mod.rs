//! Shared data structures for the algorithm catalog

pub mod graph;
pub mod union_find;

pub use self::graph::{Edge, Graph, Orientation};
pub use self::union_find::UnionFind;
