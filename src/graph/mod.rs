//! Directed-graph value types.
//!
//! Graphs are built once from an edge stream and are read-only afterwards,
//! so a fully constructed graph can be shared by any number of concurrent
//! analyses without synchronization.

mod digraph;
pub use digraph::*;

mod edge_weighted;
pub use edge_weighted::*;

/// Traits for random access to directed graphs.
pub mod traits;

use thiserror::Error;

/// Errors raised while building or querying a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An endpoint or queried vertex is not in `[0, num_vertices)`.
    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },
}
