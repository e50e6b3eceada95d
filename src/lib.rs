pub mod algo;
pub mod graph;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graph::traits::*;
}

/// Use `use digraph_algo::prelude::*;` to import common modules, functions
/// and all traits.
pub mod prelude {
    use super::*;
    pub use algo::cpm;
    pub use algo::sccs;
    pub use algo::visits::depth_first;
    pub use algo::{acyclicity, longest_paths, top_sort};
    pub use algo::{AcyclicLongestPaths, CycleDetected, NoPath};
    pub use graph::{Digraph, DirectedEdge, EdgeWeightedDigraph, GraphError};
    pub use traits::*;
}
