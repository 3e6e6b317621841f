//! Graph structure algorithms: spanning trees, flows, colorings

pub mod coloring;
pub mod max_flow;
pub mod mst;

pub use self::coloring::{welsh_powell, ColoringResult, WelshPowell};
pub use self::max_flow::{edmonds_karp, EdmondsKarp, FlowNetwork, MaxFlowResult};
pub use self::mst::{kruskal, Kruskal, MstEdge, MstResult};
