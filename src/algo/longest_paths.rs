use crate::algo::top_sort::{top_sort, CycleDetected};
use crate::graph::traits::Adjacency;
use crate::graph::{DirectedEdge, EdgeWeightedDigraph};
use dsi_progress_logger::ProgressLog;
use std::fmt;

/// The error returned when a path is requested to a vertex that is not
/// reachable from the source.
///
/// This is a normal, expected outcome, not a fault: callers can check
/// [`has_path_to`](AcyclicLongestPaths::has_path_to) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoPath {
    /// The source of the computation.
    pub source: usize,
    /// The vertex the path was requested for.
    pub target: usize,
}

impl fmt::Display for NoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no path from {} to {}", self.source, self.target)
    }
}

impl std::error::Error for NoPath {}

/// The longest paths from a single source in an acyclic edge-weighted
/// graph.
///
/// Returned by [`longest_paths`]; queried per vertex with
/// [`dist_to`](Self::dist_to), [`has_path_to`](Self::has_path_to) and
/// [`path_to`](Self::path_to).
pub struct AcyclicLongestPaths {
    source: usize,
    dist_to: Box<[f64]>,
    edge_to: Box<[Option<DirectedEdge>]>,
}

/// Computes the longest paths from `source` in an acyclic edge-weighted
/// graph, or fails with [`CycleDetected`] if the graph contains a directed
/// cycle.
///
/// Every vertex starts at distance `-∞` except the source at `0.0`; the
/// outgoing edges of each vertex are then relaxed in topological order.
/// Since all predecessors of a vertex are finalized before the vertex is
/// reached, a single forward pass suffices. Relaxation uses strict
/// comparison, so among equally long paths the first one discovered in the
/// topological order is retained, making results deterministic for a fixed
/// graph and edge-insertion order.
///
/// # Panics
///
/// Panics if `source` is not in `[0, num_vertices)`.
///
/// # Examples
///
/// ```
/// use digraph_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = EdgeWeightedDigraph::from_edges(
///     4,
///     [(0, 1, 5.0), (0, 2, 3.0), (1, 3, 6.0), (2, 3, 2.0)],
/// )
/// .unwrap();
/// let paths = longest_paths(&graph, 0, no_logging![]).unwrap();
///
/// assert_eq!(paths.dist_to(3), 11.0);
/// let path = paths.path_to(3).unwrap();
/// assert_eq!(path.len(), 2);
/// assert_eq!((path[0].from(), path[0].to()), (0, 1));
/// assert_eq!((path[1].from(), path[1].to()), (1, 3));
/// ```
pub fn longest_paths(
    graph: &EdgeWeightedDigraph,
    source: usize,
    pl: &mut impl ProgressLog,
) -> Result<AcyclicLongestPaths, CycleDetected> {
    let num_vertices = graph.num_vertices();
    assert!(
        source < num_vertices,
        "source vertex {} is out of range for a graph with {} vertices",
        source,
        num_vertices
    );

    let order = top_sort(graph, pl)?;

    pl.item_name("vertex");
    pl.expected_updates(Some(num_vertices));
    pl.start("Relaxing edges in topological order...");

    let mut dist_to = vec![f64::NEG_INFINITY; num_vertices].into_boxed_slice();
    let mut edge_to = vec![None; num_vertices].into_boxed_slice();
    dist_to[source] = 0.0;

    for &vertex in order.iter() {
        for edge in graph.edges(vertex) {
            // Strict comparison: ties keep the first path discovered.
            // Unreachable vertices stay at -∞, as -∞ + w > -∞ never holds.
            if dist_to[vertex] + edge.weight() > dist_to[edge.to()] {
                dist_to[edge.to()] = dist_to[vertex] + edge.weight();
                edge_to[edge.to()] = Some(edge);
            }
        }
        pl.light_update();
    }

    pl.done();
    Ok(AcyclicLongestPaths {
        source,
        dist_to,
        edge_to,
    })
}

impl AcyclicLongestPaths {
    /// Returns the source of the computation.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the weight of the longest path from the source to `vertex`,
    /// or `f64::NEG_INFINITY` if `vertex` is unreachable.
    ///
    /// The distance of the source to itself is `0.0`.
    pub fn dist_to(&self, vertex: usize) -> f64 {
        self.dist_to[vertex]
    }

    /// Returns whether there is a path from the source to `vertex`.
    pub fn has_path_to(&self, vertex: usize) -> bool {
        self.dist_to[vertex] != f64::NEG_INFINITY
    }

    /// Returns the edges of the longest path from the source to `vertex`,
    /// or fails with [`NoPath`] if `vertex` is unreachable.
    ///
    /// The path to the source itself is empty.
    pub fn path_to(&self, vertex: usize) -> Result<Vec<DirectedEdge>, NoPath> {
        if !self.has_path_to(vertex) {
            return Err(NoPath {
                source: self.source,
                target: vertex,
            });
        }
        let mut path = Vec::new();
        let mut edge = self.edge_to[vertex];
        while let Some(e) = edge {
            path.push(e);
            edge = self.edge_to[e.from()];
        }
        path.reverse();
        Ok(path)
    }
}
